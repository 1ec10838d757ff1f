pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::preview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template registry + active resume
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        .route(
            "/api/v1/resume/active",
            get(handlers::handle_get_active_resume)
                .put(handlers::handle_put_active_resume)
                .delete(handlers::handle_clear_active_resume),
        )
        .route(
            "/api/v1/resume/active/template",
            patch(handlers::handle_set_template),
        )
        .route(
            "/api/v1/resume/active/settings",
            patch(handlers::handle_update_settings),
        )
        // Preview panel lifecycle
        .route(
            "/api/v1/preview/mount",
            post(handlers::handle_mount).delete(handlers::handle_unmount),
        )
        .route("/api/v1/preview/resize", post(handlers::handle_resize))
        .route("/api/v1/preview", get(handlers::handle_get_preview))
        .route("/api/v1/preview/html", get(handlers::handle_get_preview_html))
        // Action dock
        .route("/api/v1/preview/dock", get(handlers::handle_get_dock))
        .route(
            "/api/v1/dock/repository",
            get(handlers::handle_open_repository),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::models::Resume;
    use crate::preview::PreviewHost;
    use crate::store::{InMemoryResumeStore, ResumeStore};
    use crate::templates::{OutlineRenderer, TemplateRegistry};

    fn test_state(resume: Option<Resume>) -> AppState {
        let store: Arc<dyn ResumeStore> = match resume {
            Some(r) => Arc::new(InMemoryResumeStore::with_resume(r)),
            None => Arc::new(InMemoryResumeStore::new()),
        };
        AppState {
            config: Config {
                repo_url: "https://example.com/resume-builder".to_string(),
                ..Config::default()
            },
            store,
            registry: Arc::new(TemplateRegistry::default()),
            renderer: Arc::new(OutlineRenderer),
            preview: Arc::new(PreviewHost::new()),
        }
    }

    fn padded_resume(padding: f64) -> Resume {
        let mut resume = Resume::new("Jane Doe");
        resume.global_settings.page_padding = Some(padding);
        resume
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn advance(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        tokio::task::yield_now().await;
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state(None));
        let response = send(&app, Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test(start_paused = true)]
    async fn test_preview_without_resume_is_no_content() {
        let app = build_router(test_state(None));
        send(&app, Method::POST, "/api/v1/preview/mount", None).await;

        let response = send(&app, Method::GET, "/api/v1/preview", None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let response = send(&app, Method::GET, "/api/v1/preview/html", None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test(start_paused = true)]
    async fn test_preview_requires_mount() {
        let app = build_router(test_state(Some(padded_resume(37.8))));
        let response = send(&app, Method::GET, "/api/v1/preview", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resize_then_snapshot_shows_breaks() {
        let app = build_router(test_state(Some(padded_resume(37.8))));
        let response = send(&app, Method::POST, "/api/v1/preview/mount", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        for height in [1500.0, 1900.0, 2200.0] {
            let response = send(
                &app,
                Method::POST,
                "/api/v1/preview/resize",
                Some(json!({ "scroll_height": height })),
            )
            .await;
            assert_eq!(response.status(), StatusCode::ACCEPTED);
        }
        advance(150).await;

        let snapshot = json_body(send(&app, Method::GET, "/api/v1/preview", None).await).await;
        assert_eq!(snapshot["content_height_px"], 2200.0);
        assert_eq!(snapshot["height_revision"], 1);
        assert_eq!(snapshot["page_break_count"], 2);
        assert_eq!(snapshot["markers"][0]["label"], "第1页结束");
        assert_eq!(snapshot["markers"][1]["label"], "第2页结束");
        assert_eq!(snapshot["template"]["id"], "classic");
    }

    #[tokio::test(start_paused = true)]
    async fn test_resize_after_unmount_is_dropped() {
        let app = build_router(test_state(Some(padded_resume(37.8))));
        send(&app, Method::POST, "/api/v1/preview/mount", None).await;
        let body = json_body(send(&app, Method::DELETE, "/api/v1/preview/mount", None).await).await;
        assert_eq!(body["unmounted"], true);

        let response = send(
            &app,
            Method::POST,
            "/api/v1/preview/resize",
            Some(json!({ "scroll_height": 4000.0 })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(json_body(response).await["accepted"], false);
    }

    #[tokio::test]
    async fn test_negative_scroll_height_rejected() {
        let app = build_router(test_state(None));
        let response = send(
            &app,
            Method::POST,
            "/api/v1/preview/resize",
            Some(json!({ "scroll_height": -1.0 })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_switch_template() {
        let app = build_router(test_state(Some(padded_resume(20.0))));
        let response = send(
            &app,
            Method::PATCH,
            "/api/v1/resume/active/template",
            Some(json!({ "template_id": "modern" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["template_id"], "modern");

        let response = send(
            &app,
            Method::PATCH,
            "/api/v1/resume/active/template",
            Some(json!({ "template_id": "unknown" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_switch_template_without_resume_is_not_found() {
        let app = build_router(test_state(None));
        let response = send(
            &app,
            Method::PATCH,
            "/api/v1/resume/active/template",
            Some(json!({ "template_id": "modern" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleared_resume_renders_nothing() {
        let app = build_router(test_state(Some(padded_resume(37.8))));
        send(&app, Method::POST, "/api/v1/preview/mount", None).await;
        let response = send(&app, Method::DELETE, "/api/v1/resume/active", None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&app, Method::GET, "/api/v1/preview", None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_list_templates() {
        let app = build_router(test_state(None));
        let body = json_body(send(&app, Method::GET, "/api/v1/templates", None).await).await;
        assert_eq!(body["default_template_id"], "classic");
        assert_eq!(body["templates"].as_array().map(Vec::len), Some(4));
    }

    #[tokio::test]
    async fn test_repository_redirect() {
        let app = build_router(test_state(None));
        let response = send(&app, Method::GET, "/api/v1/dock/repository", None).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://example.com/resume-builder"
        );
    }

    #[tokio::test]
    async fn test_dock_items() {
        let app = build_router(test_state(None));
        let body = json_body(send(&app, Method::GET, "/api/v1/preview/dock", None).await).await;
        assert_eq!(body[0]["action"]["kind"], "open_external");
        assert_eq!(body[0]["action"]["target"], "_blank");
        assert_eq!(body[1]["action"]["kind"], "switch_template");
    }

    #[tokio::test(start_paused = true)]
    async fn test_html_surface() {
        let app = build_router(test_state(Some(padded_resume(37.8))));
        send(&app, Method::POST, "/api/v1/preview/mount", None).await;
        send(
            &app,
            Method::POST,
            "/api/v1/preview/resize",
            Some(json!({ "scroll_height": 3300.0 })),
        )
        .await;
        advance(150).await;

        let response = send(&app, Method::GET, "/api/v1/preview/html", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert_eq!(html.matches(r#"class="page-break-line""#).count(), 3);
        assert!(html.contains("https://example.com/resume-builder"));
    }
}
