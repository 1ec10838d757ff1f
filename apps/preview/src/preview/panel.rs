//! Preview Panel — one mounted instance of the live resume preview.
//!
//! A panel owns its layout observer and the container the browser reports
//! into. Page breaks are never stored; every snapshot derives them from the
//! latest height sample and the active resume's padding.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::layout::{
    page_break_count, page_break_markers, ContentContainer, HeightSample, LayoutObserver,
    PageBreakMarker, ReportedContainer,
};
use crate::locale::Locale;
use crate::models::TemplateDescriptor;
use crate::store::ResumeStore;
use crate::templates::{font_family_class, TemplateRegistry, TemplateRenderer};

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Collaborators a panel reads from. Passed in explicitly at mount time.
#[derive(Clone)]
pub struct PreviewDeps {
    pub store: Arc<dyn ResumeStore>,
    pub registry: Arc<TemplateRegistry>,
    pub renderer: Arc<dyn TemplateRenderer>,
    pub locale: Locale,
}

/// Everything needed to draw the preview at one moment.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewSnapshot {
    pub resume_id: Uuid,
    pub template: TemplateDescriptor,
    pub font_class: &'static str,
    pub page_padding: Option<f64>,
    pub content_height_px: f64,
    pub height_revision: u64,
    pub page_break_count: u32,
    pub markers: Vec<PageBreakMarker>,
    pub body_html: String,
}

pub struct PreviewPanel {
    id: Uuid,
    deps: PreviewDeps,
    container: Arc<ReportedContainer>,
    observer: LayoutObserver,
}

// ────────────────────────────────────────────────────────────────────────────
// Panel
// ────────────────────────────────────────────────────────────────────────────

impl PreviewPanel {
    pub fn mount(deps: PreviewDeps, throttle: Duration) -> Self {
        let container = Arc::new(ReportedContainer::new());
        let observer = LayoutObserver::observe(
            Some(Arc::clone(&container) as Arc<dyn ContentContainer>),
            throttle,
        );
        let id = Uuid::new_v4();
        let throttle_ms = throttle.as_millis() as u64;
        info!(panel_id = %id, throttle_ms, "Preview panel mounted");

        PreviewPanel {
            id,
            deps,
            container,
            observer,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Size-change notification from the browser with the container's new scroll height.
    pub fn on_resize(&self, scroll_height_px: f64) {
        self.container.report(scroll_height_px);
        self.observer.notify();
    }

    pub fn height(&self) -> HeightSample {
        self.observer.latest()
    }

    /// Current preview, or `None` when there is no active resume to show.
    pub async fn snapshot(&self) -> Option<PreviewSnapshot> {
        let resume = self.deps.store.active_resume().await?;
        let template = self.deps.registry.resolve(resume.template_id.as_deref());
        let padding = resume.page_padding();
        let sample = self.height();

        Some(PreviewSnapshot {
            resume_id: resume.id,
            template: template.clone(),
            font_class: font_family_class(resume.global_settings.font_family.as_deref()),
            page_padding: padding,
            content_height_px: sample.height_px,
            height_revision: sample.revision,
            page_break_count: page_break_count(sample.height_px, padding),
            markers: page_break_markers(sample.height_px, padding, self.deps.locale),
            body_html: self.deps.renderer.render(&resume, template),
        })
    }

    pub fn unmount(self) {
        // Drop does the teardown.
    }
}

impl Drop for PreviewPanel {
    fn drop(&mut self) {
        self.observer.disconnect();
        info!(panel_id = %self.id, "Preview panel unmounted");
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Host
// ────────────────────────────────────────────────────────────────────────────

/// Holds at most one mounted panel. Mounting again tears down the previous one.
#[derive(Default)]
pub struct PreviewHost {
    panel: Mutex<Option<PreviewPanel>>,
}

impl PreviewHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn mount(&self, deps: PreviewDeps, throttle: Duration) -> Uuid {
        let panel = PreviewPanel::mount(deps, throttle);
        let id = panel.id();
        let previous = self.panel.lock().await.replace(panel);
        if let Some(previous) = previous {
            debug!(panel_id = %previous.id(), "Replacing mounted preview panel");
            previous.unmount();
        }
        id
    }

    /// Returns `false` if nothing was mounted.
    pub async fn unmount(&self) -> bool {
        match self.panel.lock().await.take() {
            Some(panel) => {
                panel.unmount();
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub async fn is_mounted(&self) -> bool {
        self.panel.lock().await.is_some()
    }

    /// Forwards a resize to the mounted panel. Returns `false` (and does nothing) when unmounted.
    pub async fn notify_resize(&self, scroll_height_px: f64) -> bool {
        match self.panel.lock().await.as_ref() {
            Some(panel) => {
                panel.on_resize(scroll_height_px);
                true
            }
            None => false,
        }
    }

    /// `None` when unmounted; `Some(None)` when mounted without an active resume.
    pub async fn snapshot(&self) -> Option<Option<PreviewSnapshot>> {
        let guard = self.panel.lock().await;
        match guard.as_ref() {
            Some(panel) => Some(panel.snapshot().await),
            None => None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
