//! UI language for the few strings the preview renders itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl Locale {
    /// Label drawn next to the divider that closes page `page_number`.
    pub fn page_ended(self, page_number: u32) -> String {
        match self {
            Locale::Zh => format!("第{page_number}页结束"),
            Locale::En => format!("Page {page_number} ended"),
        }
    }

    pub fn open_repository_tooltip(self) -> &'static str {
        "Go GitHub"
    }

    pub fn switch_template_tooltip(self) -> &'static str {
        match self {
            Locale::Zh => "切换模版",
            Locale::En => "Switch template",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale '{0}'")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zh" | "zh-cn" => Ok(Locale::Zh),
            "en" | "en-us" => Ok(Locale::En),
            other => Err(UnsupportedLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Zh => write!(f, "zh"),
            Locale::En => write!(f, "en"),
        }
    }
}
