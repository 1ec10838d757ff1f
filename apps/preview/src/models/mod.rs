pub mod resume;
pub mod template;

pub use resume::Resume;
pub use template::{TemplateDescriptor, TemplateLayout};
