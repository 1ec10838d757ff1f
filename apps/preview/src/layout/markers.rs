//! Page-break markers — the dashed dividers overlaid on the preview where each
//! printed page ends.

use serde::{Deserialize, Serialize};

use crate::layout::geometry::{break_offset_px, page_break_count};
use crate::locale::Locale;

/// One divider in the preview overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBreakMarker {
    /// 1-based number of the page this divider closes.
    pub page_number: u32,
    /// Distance from the top of the content container, in pixels.
    pub offset_px: f64,
    pub label: String,
}

impl PageBreakMarker {
    /// Builds the marker for `page_number`, or `None` when the padding disables page breaks.
    pub fn new(page_number: u32, page_padding_px: Option<f64>, locale: Locale) -> Option<Self> {
        let offset_px = break_offset_px(page_padding_px, page_number)?;
        Some(PageBreakMarker {
            page_number,
            offset_px,
            label: locale.page_ended(page_number),
        })
    }
}

/// All markers for content of the given height, ordered top to bottom.
pub fn page_break_markers(
    content_height_px: f64,
    page_padding_px: Option<f64>,
    locale: Locale,
) -> Vec<PageBreakMarker> {
    let count = page_break_count(content_height_px, page_padding_px);
    (1..=count)
        .filter_map(|page_number| PageBreakMarker::new(page_number, page_padding_px, locale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::geometry::page_height_px;

    #[test]
    fn test_no_markers_without_padding() {
        assert!(page_break_markers(9000.0, None, Locale::Zh).is_empty());
        assert_eq!(PageBreakMarker::new(1, None, Locale::Zh), None);
    }

    #[test]
    fn test_markers_are_spaced_one_page_apart() {
        let padding = Some(37.8);
        let markers = page_break_markers(4000.0, padding, Locale::En);
        let page = page_height_px(padding).unwrap();

        assert_eq!(markers.len(), 3);
        for (i, marker) in markers.iter().enumerate() {
            let n = i as u32 + 1;
            assert_eq!(marker.page_number, n);
            assert!((marker.offset_px - page * f64::from(n)).abs() < 1e-9);
            assert_eq!(marker.label, format!("Page {n} ended"));
        }
    }

    #[test]
    fn test_marker_count_matches_calculator() {
        for height in [0.0, 500.0, 1084.0, 1090.0, 2200.0, 7777.0] {
            let markers = page_break_markers(height, Some(24.0), Locale::Zh);
            assert_eq!(markers.len() as u32, page_break_count(height, Some(24.0)));
        }
    }
}
