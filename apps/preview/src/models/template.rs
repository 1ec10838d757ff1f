use serde::{Deserialize, Serialize};

/// Page arrangement a template uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateLayout {
    Classic,
    Modern,
    LeftRight,
    Timeline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub layout: TemplateLayout,
    pub accent_color: String,
}
