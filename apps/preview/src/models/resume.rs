use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// The resume currently open in the editor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resume {
    pub id: Uuid,
    pub title: String,
    /// Template chosen by the user. `None` or an unknown id falls back to the registry default.
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub global_settings: GlobalSettings,
    /// Section content, opaque to the preview and handed to the template renderer as-is.
    #[serde(default)]
    pub sections: Value,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GlobalSettings {
    /// Padding around the page content, in CSS pixels. Unset or zero disables page-break markers.
    #[serde(default)]
    pub page_padding: Option<f64>,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub theme_color: Option<String>,
}

impl Resume {
    #[cfg(test)]
    pub fn new(title: impl Into<String>) -> Self {
        Resume {
            id: Uuid::new_v4(),
            title: title.into(),
            template_id: None,
            global_settings: GlobalSettings::default(),
            sections: Value::Null,
            updated_at: Utc::now(),
        }
    }

    pub fn page_padding(&self) -> Option<f64> {
        self.global_settings.page_padding
    }
}
