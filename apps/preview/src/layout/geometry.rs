//! Page geometry — converts the resume's page padding into the height of one
//! printed page in CSS pixels, and derives how many page breaks the observed
//! content crosses.
//!
//! Both the break count and every marker offset go through [`page_height_px`],
//! so the two can never disagree about where a page ends.

/// Physical height of an A4 sheet.
pub const A4_HEIGHT_MM: f64 = 297.0;
/// CSS pixels per millimetre at 96 dpi, rounded the way browsers lay out `mm` units.
pub const MM_TO_PX: f64 = 3.78;

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Height of one page of content in pixels, or `None` when page breaks are disabled.
///
/// Disabled when the padding is unset, not positive, not finite, or so large
/// that no content height remains on the page.
pub fn page_height_px(page_padding_px: Option<f64>) -> Option<f64> {
    let padding = page_padding_px.filter(|p| p.is_finite() && *p > 0.0)?;

    let top_margin_mm = padding / MM_TO_PX;
    let content_height_mm = A4_HEIGHT_MM - top_margin_mm;
    let page_height = content_height_mm * MM_TO_PX;

    (page_height.is_finite() && page_height > 0.0).then_some(page_height)
}

/// Number of page-break markers the observed content needs.
///
/// `max(0, ceil(content / page_height) - 1)`; zero when breaks are disabled.
pub fn page_break_count(content_height_px: f64, page_padding_px: Option<f64>) -> u32 {
    let Some(page_height) = page_height_px(page_padding_px) else {
        return 0;
    };
    if !content_height_px.is_finite() || content_height_px <= 0.0 {
        return 0;
    }

    let pages = (content_height_px / page_height).ceil();
    // `as` saturates, so absurd heights clamp to u32::MAX instead of wrapping.
    (pages as u32).saturating_sub(1)
}

/// Vertical offset of the divider closing page `page_number` (1-based).
pub fn break_offset_px(page_padding_px: Option<f64>, page_number: u32) -> Option<f64> {
    page_height_px(page_padding_px).map(|h| h * f64::from(page_number))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
