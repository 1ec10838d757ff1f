//! Axum route handlers for the preview panel, its dock, and the active resume.

use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Resume, TemplateDescriptor};
use crate::preview::dock::{dock_items, DockItem};
use crate::preview::html::render_preview_html;
use crate::preview::panel::{PreviewDeps, PreviewSnapshot};
use crate::state::AppState;
use crate::store::SettingsPatch;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MountResponse {
    pub panel_id: Uuid,
    pub throttle_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct UnmountResponse {
    pub unmounted: bool,
}

#[derive(Debug, Deserialize)]
pub struct ResizeRequest {
    pub scroll_height: f64,
}

#[derive(Debug, Serialize)]
pub struct ResizeResponse {
    /// False when no panel was mounted and the notification was dropped.
    pub accepted: bool,
}

#[derive(Debug, Deserialize)]
pub struct SetTemplateRequest {
    pub template_id: String,
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<TemplateDescriptor>,
    pub default_template_id: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Preview lifecycle
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/preview/mount
///
/// Mounts a fresh panel, tearing down any previous one.
pub async fn handle_mount(State(state): State<AppState>) -> Json<MountResponse> {
    let deps = PreviewDeps {
        store: state.store.clone(),
        registry: state.registry.clone(),
        renderer: state.renderer.clone(),
        locale: state.config.locale,
    };
    let throttle_ms = state.config.throttle_ms;
    let panel_id = state
        .preview
        .mount(deps, Duration::from_millis(throttle_ms))
        .await;

    Json(MountResponse {
        panel_id,
        throttle_ms,
    })
}

/// DELETE /api/v1/preview/mount
pub async fn handle_unmount(State(state): State<AppState>) -> Json<UnmountResponse> {
    let unmounted = state.preview.unmount().await;
    Json(UnmountResponse { unmounted })
}

/// POST /api/v1/preview/resize
///
/// Size-change notification from the browser. The height is read on the
/// throttle's trailing edge, so the response never reflects this request.
pub async fn handle_resize(
    State(state): State<AppState>,
    Json(request): Json<ResizeRequest>,
) -> Result<(StatusCode, Json<ResizeResponse>), AppError> {
    if !request.scroll_height.is_finite() || request.scroll_height < 0.0 {
        return Err(AppError::Validation(
            "scroll_height must be a non-negative number".to_string(),
        ));
    }

    let accepted = state.preview.notify_resize(request.scroll_height).await;
    Ok((StatusCode::ACCEPTED, Json(ResizeResponse { accepted })))
}

/// GET /api/v1/preview
///
/// 204 when there is no active resume.
pub async fn handle_get_preview(State(state): State<AppState>) -> Result<Response, AppError> {
    Ok(match current_snapshot(&state).await? {
        Some(snapshot) => Json(snapshot).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// GET /api/v1/preview/html
pub async fn handle_get_preview_html(State(state): State<AppState>) -> Result<Response, AppError> {
    Ok(match current_snapshot(&state).await? {
        Some(snapshot) => {
            let dock = dock_items(state.config.locale, &state.config.repo_url);
            Html(render_preview_html(&snapshot, &dock)).into_response()
        }
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

async fn current_snapshot(state: &AppState) -> Result<Option<PreviewSnapshot>, AppError> {
    state
        .preview
        .snapshot()
        .await
        .ok_or_else(|| AppError::NotFound("Preview panel is not mounted".to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Dock
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/preview/dock
pub async fn handle_get_dock(State(state): State<AppState>) -> Json<Vec<DockItem>> {
    Json(dock_items(state.config.locale, &state.config.repo_url))
}

/// GET /api/v1/dock/repository
pub async fn handle_open_repository(State(state): State<AppState>) -> Redirect {
    info!("Opening repository link");
    Redirect::temporary(&state.config.repo_url)
}

// ────────────────────────────────────────────────────────────────────────────
// Templates and active resume
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    Json(TemplateListResponse {
        templates: state.registry.all().to_vec(),
        default_template_id: state.registry.default_template().id.clone(),
    })
}

/// GET /api/v1/resume/active
pub async fn handle_get_active_resume(
    State(state): State<AppState>,
) -> Result<Json<Resume>, AppError> {
    state
        .store
        .active_resume()
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No active resume".to_string()))
}

/// PUT /api/v1/resume/active
pub async fn handle_put_active_resume(
    State(state): State<AppState>,
    Json(resume): Json<Resume>,
) -> Result<Json<Resume>, AppError> {
    validate_padding(resume.global_settings.page_padding)?;
    info!(resume_id = %resume.id, "Active resume replaced");
    state.store.set_active_resume(resume.clone()).await;
    Ok(Json(resume))
}

/// DELETE /api/v1/resume/active
///
/// Closes the active resume; the preview renders nothing until another is set.
pub async fn handle_clear_active_resume(State(state): State<AppState>) -> StatusCode {
    state.store.clear_active_resume().await;
    StatusCode::NO_CONTENT
}

/// PATCH /api/v1/resume/active/template
///
/// Explicit switches must name a known template; only stale stored ids fall back.
pub async fn handle_set_template(
    State(state): State<AppState>,
    Json(request): Json<SetTemplateRequest>,
) -> Result<Json<Resume>, AppError> {
    let template_id = request.template_id.trim();
    if template_id.is_empty() {
        return Err(AppError::Validation("template_id cannot be empty".to_string()));
    }
    if state.registry.get(template_id).is_none() {
        return Err(AppError::Validation(format!(
            "Unknown template '{template_id}'"
        )));
    }

    let resume = state.store.set_template(template_id).await?;
    info!(resume_id = %resume.id, template_id, "Template switched");
    Ok(Json(resume))
}

/// PATCH /api/v1/resume/active/settings
pub async fn handle_update_settings(
    State(state): State<AppState>,
    Json(patch): Json<SettingsPatch>,
) -> Result<Json<Resume>, AppError> {
    validate_padding(patch.page_padding)?;
    let resume = state.store.update_settings(patch).await?;
    Ok(Json(resume))
}

fn validate_padding(padding: Option<f64>) -> Result<(), AppError> {
    match padding {
        Some(p) if !p.is_finite() || p < 0.0 => Err(AppError::Validation(
            "page_padding must be a non-negative number".to_string(),
        )),
        _ => Ok(()),
    }
}
