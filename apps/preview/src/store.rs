//! Resume Store — the accessor and mutators for the active resume.
//!
//! The preview only ever reads through this trait; `AppState` carries an
//! `Arc<dyn ResumeStore>` so tests and other hosts can inject their own.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::Resume;

/// Partial update of the page-level settings. `None` fields are left untouched.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct SettingsPatch {
    pub page_padding: Option<f64>,
    pub font_family: Option<String>,
    pub theme_color: Option<String>,
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn active_resume(&self) -> Option<Resume>;

    async fn set_active_resume(&self, resume: Resume);

    async fn clear_active_resume(&self);

    /// Switches the active resume's template. Fails if there is no active resume.
    async fn set_template(&self, template_id: &str) -> Result<Resume, AppError>;

    async fn update_settings(&self, patch: SettingsPatch) -> Result<Resume, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// InMemoryResumeStore
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryResumeStore {
    active: RwLock<Option<Resume>>,
}

impl InMemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_resume(resume: Resume) -> Self {
        InMemoryResumeStore {
            active: RwLock::new(Some(resume)),
        }
    }
}

#[async_trait]
impl ResumeStore for InMemoryResumeStore {
    async fn active_resume(&self) -> Option<Resume> {
        self.active.read().await.clone()
    }

    async fn set_active_resume(&self, resume: Resume) {
        *self.active.write().await = Some(resume);
    }

    async fn clear_active_resume(&self) {
        *self.active.write().await = None;
    }

    async fn set_template(&self, template_id: &str) -> Result<Resume, AppError> {
        let mut active = self.active.write().await;
        let resume = active.as_mut().ok_or_else(no_active_resume)?;
        resume.template_id = Some(template_id.to_string());
        resume.updated_at = Utc::now();
        Ok(resume.clone())
    }

    async fn update_settings(&self, patch: SettingsPatch) -> Result<Resume, AppError> {
        let mut active = self.active.write().await;
        let resume = active.as_mut().ok_or_else(no_active_resume)?;
        let settings = &mut resume.global_settings;
        if let Some(padding) = patch.page_padding {
            settings.page_padding = Some(padding);
        }
        if let Some(font) = patch.font_family {
            settings.font_family = Some(font);
        }
        if let Some(color) = patch.theme_color {
            settings.theme_color = Some(color);
        }
        resume.updated_at = Utc::now();
        Ok(resume.clone())
    }
}

fn no_active_resume() -> AppError {
    AppError::NotFound("No active resume".to_string())
}
