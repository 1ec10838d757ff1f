// Live resume preview: mounted panel, HTML surface, action dock, and HTTP handlers.
// Collaborators (store, registry, renderer) arrive through PreviewDeps, never globals.

pub mod dock;
pub mod handlers;
pub mod html;
pub mod panel;

pub use panel::PreviewHost;
