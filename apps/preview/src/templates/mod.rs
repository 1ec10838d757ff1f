// Template registry and the renderer seam used by the preview panel.

pub mod registry;
pub mod renderer;

pub use registry::{default_templates, TemplateRegistry};
pub use renderer::{escape_html, font_family_class, OutlineRenderer, TemplateRenderer};
