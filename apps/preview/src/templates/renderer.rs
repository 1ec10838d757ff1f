//! Template rendering seam.
//!
//! Real template engines live outside this service; the preview only needs
//! something that turns a resume plus a resolved template into an HTML fragment.
//! `OutlineRenderer` is the built-in stand-in: a plain outline of the sections.

use serde_json::Value;

use crate::models::{Resume, TemplateDescriptor};

pub trait TemplateRenderer: Send + Sync {
    fn render(&self, resume: &Resume, template: &TemplateDescriptor) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OutlineRenderer;

impl TemplateRenderer for OutlineRenderer {
    fn render(&self, resume: &Resume, template: &TemplateDescriptor) -> String {
        let accent = resume
            .global_settings
            .theme_color
            .as_deref()
            .unwrap_or(&template.accent_color);

        let mut html = format!(
            r#"<article class="resume-template template-{}" data-template="{}" style="--accent: {}">"#,
            escape_html(&template.id),
            escape_html(&template.id),
            escape_html(accent),
        );
        html.push_str(&format!("<h1>{}</h1>", escape_html(&resume.title)));

        for (title, lines) in outline_sections(&resume.sections) {
            html.push_str("<section>");
            if let Some(title) = title {
                html.push_str(&format!("<h2>{}</h2>", escape_html(&title)));
            }
            for line in lines {
                html.push_str(&format!("<p>{}</p>", escape_html(&line)));
            }
            html.push_str("</section>");
        }

        html.push_str("</article>");
        html
    }
}

/// Flattens section JSON into `(title, lines)` pairs.
///
/// Accepts either an array of `{ "title", "content" }` objects or a map of
/// title → content. Content may be a string, an array of strings, or nested.
fn outline_sections(sections: &Value) -> Vec<(Option<String>, Vec<String>)> {
    match sections {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Object(obj) => {
                    let title = obj.get("title").and_then(Value::as_str).map(str::to_string);
                    let lines = obj.get("content").map(text_lines).unwrap_or_default();
                    (title, lines)
                }
                other => (None, text_lines(other)),
            })
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(title, content)| (Some(title.clone()), text_lines(content)))
            .collect(),
        Value::Null => vec![],
        other => vec![(None, text_lines(other))],
    }
}

fn text_lines(value: &Value) -> Vec<String> {
    match value {
        Value::Null => vec![],
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items.iter().flat_map(text_lines).collect(),
        Value::Object(map) => map.values().flat_map(text_lines).collect(),
        other => vec![other.to_string()],
    }
}

/// CSS class for the resume's font family setting.
pub fn font_family_class(font_family: Option<&str>) -> &'static str {
    match font_family {
        Some("serif") => "font-serif",
        Some("mono") => "font-mono",
        _ => "font-sans",
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::TemplateRegistry;
    use serde_json::json;

    #[test]
    fn test_font_family_class() {
        assert_eq!(font_family_class(Some("serif")), "font-serif");
        assert_eq!(font_family_class(Some("mono")), "font-mono");
        assert_eq!(font_family_class(Some("sans")), "font-sans");
        assert_eq!(font_family_class(None), "font-sans");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">R&D</a>"#),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D&lt;/a&gt;"
        );
    }

    #[test]
    fn test_outline_renders_sections_in_order() {
        let registry = TemplateRegistry::default();
        let mut resume = Resume::new("Jane <Doe>");
        resume.sections = json!([
            { "title": "Experience", "content": ["Built a compiler", "Shipped a CDN"] },
            { "title": "Skills", "content": "Rust, Go" }
        ]);

        let html = OutlineRenderer.render(&resume, registry.resolve(Some("modern")));

        assert!(html.contains(r#"data-template="modern""#));
        assert!(html.contains("<h1>Jane &lt;Doe&gt;</h1>"));
        let exp = html.find("<h2>Experience</h2>").unwrap();
        let skills = html.find("<h2>Skills</h2>").unwrap();
        assert!(exp < skills);
        assert!(html.contains("<p>Shipped a CDN</p>"));
    }

    #[test]
    fn test_theme_color_overrides_accent() {
        let registry = TemplateRegistry::default();
        let mut resume = Resume::new("x");
        resume.global_settings.theme_color = Some("#ff0000".to_string());
        let html = OutlineRenderer.render(&resume, registry.default_template());
        assert!(html.contains("--accent: #ff0000"));
    }
}
