//! HTML rendering of the preview surface: the A4 sheet, the page-break
//! overlay, and the dock.

use crate::layout::PageBreakMarker;
use crate::preview::dock::{DockAction, DockItem};
use crate::preview::panel::PreviewSnapshot;
use crate::templates::escape_html;

pub fn render_preview_html(snapshot: &PreviewSnapshot, dock: &[DockItem]) -> String {
    let mut html = String::from(r#"<div class="preview-panel relative w-full h-full overflow-auto bg-gray-100">"#);
    html.push_str(r#"<div class="py-4 px-4 min-h-screen flex justify-center scale-90 origin-top-left">"#);
    html.push_str(&format!(
        r#"<div class="page-sheet {}" style="width: 210mm; min-width: 210mm; min-height: 297mm; position: relative">"#,
        snapshot.font_class
    ));

    let padding_style = snapshot
        .page_padding
        .map(|p| format!(r#" style="padding: {p}px""#))
        .unwrap_or_default();
    html.push_str(&format!(r#"<div id="resume-preview"{padding_style}>"#));
    html.push_str(&snapshot.body_html);
    for marker in &snapshot.markers {
        html.push_str(&render_marker(marker));
    }
    html.push_str("</div></div></div>");

    html.push_str(&render_dock(dock));
    html.push_str("</div>");
    html
}

fn render_marker(marker: &PageBreakMarker) -> String {
    format!(
        concat!(
            r#"<div class="page-break-line" data-page="{n}" "#,
            r#"style="position: absolute; left: 0; right: 0; top: {top}px; pointer-events: none; break-after: page; break-before: page">"#,
            r#"<div class="page-break-divider" style="border-top: 2px dashed #f87171"></div>"#,
            r#"<div class="page-break-label">{label}</div>"#,
            "</div>"
        ),
        n = marker.page_number,
        top = marker.offset_px,
        label = escape_html(&marker.label),
    )
}

fn render_dock(items: &[DockItem]) -> String {
    let mut html = String::from(r#"<nav class="dock" style="position: fixed; top: 50%; right: 1.5rem; transform: translateY(-50%)">"#);
    for item in items {
        let tooltip = escape_html(item.tooltip.text);
        let control = match &item.action {
            DockAction::OpenExternal { url, target } => format!(
                r#"<a href="{}" target="{}" rel="noopener noreferrer" title="{tooltip}">{}</a>"#,
                escape_html(url),
                target,
                item.id,
            ),
            DockAction::SwitchTemplate { templates_href, .. } => format!(
                r#"<button type="button" data-templates="{templates_href}" title="{tooltip}">{}</button>"#,
                item.id,
            ),
        };
        html.push_str(&format!(
            r#"<div class="dock-icon" data-tooltip-side="{}">{control}</div>"#,
            item.tooltip.side
        ));
    }
    html.push_str("</nav>");
    html
}
