//! Template Registry — the known resume templates, looked up by id.

use anyhow::{bail, Result};

use crate::models::{TemplateDescriptor, TemplateLayout};

#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    /// Never empty; the first entry is the fallback.
    templates: Vec<TemplateDescriptor>,
}

impl TemplateRegistry {
    pub fn new(templates: Vec<TemplateDescriptor>) -> Result<Self> {
        if templates.is_empty() {
            bail!("template registry needs at least one template");
        }
        Ok(TemplateRegistry { templates })
    }

    /// Template used when the resume names none, or names one we don't know.
    pub fn default_template(&self) -> &TemplateDescriptor {
        &self.templates[0]
    }

    pub fn get(&self, id: &str) -> Option<&TemplateDescriptor> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn resolve(&self, template_id: Option<&str>) -> &TemplateDescriptor {
        template_id
            .and_then(|id| self.get(id))
            .unwrap_or_else(|| self.default_template())
    }

    pub fn all(&self) -> &[TemplateDescriptor] {
        &self.templates
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        TemplateRegistry {
            templates: default_templates(),
        }
    }
}

/// Built-in template set, classic first.
pub fn default_templates() -> Vec<TemplateDescriptor> {
    vec![
        template(
            "classic",
            "Classic",
            "Single column, traditional section headings",
            TemplateLayout::Classic,
            "#000000",
        ),
        template(
            "modern",
            "Modern",
            "Two-tone header with a compact body",
            TemplateLayout::Modern,
            "#1f2937",
        ),
        template(
            "left-right",
            "Left Right",
            "Sidebar for contact and skills, main column for experience",
            TemplateLayout::LeftRight,
            "#2563eb",
        ),
        template(
            "timeline",
            "Timeline",
            "Experience drawn along a vertical timeline",
            TemplateLayout::Timeline,
            "#0d9488",
        ),
    ]
}

fn template(
    id: &str,
    name: &str,
    description: &str,
    layout: TemplateLayout,
    accent_color: &str,
) -> TemplateDescriptor {
    TemplateDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        layout,
        accent_color: accent_color.to_string(),
    }
}
