//! Action Dock — the floating buttons beside the preview.

use serde::Serialize;

use crate::locale::Locale;

/// Where a dock item opens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DockAction {
    /// Opens `url` in a new browsing context.
    OpenExternal { url: String, target: &'static str },
    /// Opens the template picker, which lists `templates_href` and writes back to `apply_href`.
    SwitchTemplate {
        templates_href: &'static str,
        apply_href: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub text: &'static str,
    pub side: &'static str,
    pub side_offset: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DockItem {
    pub id: &'static str,
    pub action: DockAction,
    pub tooltip: Tooltip,
}

fn left_tooltip(text: &'static str) -> Tooltip {
    Tooltip {
        text,
        side: "left",
        side_offset: 10,
    }
}

pub fn dock_items(locale: Locale, repo_url: &str) -> Vec<DockItem> {
    vec![
        DockItem {
            id: "github",
            action: DockAction::OpenExternal {
                url: repo_url.to_string(),
                target: "_blank",
            },
            tooltip: left_tooltip(locale.open_repository_tooltip()),
        },
        DockItem {
            id: "template",
            action: DockAction::SwitchTemplate {
                templates_href: "/api/v1/templates",
                apply_href: "/api/v1/resume/active/template",
            },
            tooltip: left_tooltip(locale.switch_template_tooltip()),
        },
    ]
}
