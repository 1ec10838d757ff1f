use std::sync::Arc;

use crate::config::Config;
use crate::preview::PreviewHost;
use crate::store::ResumeStore;
use crate::templates::{TemplateRegistry, TemplateRenderer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Owner of the active resume. Injected so the preview never reaches for a global.
    pub store: Arc<dyn ResumeStore>,
    pub registry: Arc<TemplateRegistry>,
    pub renderer: Arc<dyn TemplateRenderer>,
    /// Holds the single mounted preview panel, if any.
    pub preview: Arc<PreviewHost>,
}
