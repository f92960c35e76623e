// Router - maps console URLs to handlers
use crate::presentation::app_state::AppState;
use crate::presentation::auth::require_login;
use crate::presentation::handlers::{
    create_banner, delete_banner, get_analytics, get_console, health_check, list_banners, remount,
    select_view, update_banner, visit_site,
};
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    let console = Router::new()
        .route("/", get(get_console))
        .route("/view", put(select_view))
        .route("/remount", post(remount))
        .route("/banners", get(list_banners).post(create_banner))
        .route("/banners/:id", put(update_banner).delete(delete_banner))
        .route("/analytics", get(get_analytics))
        .route("/visit-site", get(visit_site))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_login));

    Router::new()
        .route("/healthz", get(health_check))
        .nest("/console", console)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::banner_editor::BannerEditor;
    use crate::application::console::tests::sample_seed;
    use crate::application::console::{Console, ConsoleSeed};
    use crate::application::console_actor::ConsoleHandle;
    use crate::application::metrics_presenter::MetricsPresenter;
    use crate::infrastructure::editor::{DisabledEditor, LocalBannerEditor};
    use crate::presentation::auth::SESSION_HEADER;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app_with(seed: ConsoleSeed, editor: Arc<dyn BannerEditor>, require_login: bool) -> Router {
        let console = Console::mount(seed, MetricsPresenter::seeded(3), editor);
        build_router(Arc::new(AppState {
            console: ConsoleHandle::spawn(console),
            site_url: "https://example.com".to_string(),
            require_login,
            login_url: "/login".to_string(),
        }))
    }

    fn app() -> Router {
        app_with(sample_seed(), Arc::new(DisabledEditor), false)
    }

    fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .oneshot(request(Method::GET, "/healthz", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_console_starts_on_analytics() {
        let app = app_with(ConsoleSeed::default(), Arc::new(DisabledEditor), false);
        let (status, body) = send(&app, request(Method::GET, "/console", None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["activeView"], "analytics");
        assert_eq!(body["panel"]["view"], "analytics");
        assert_eq!(body["panel"]["metrics"]["visitorCount"], "42.5k");
    }

    #[tokio::test]
    async fn test_select_banners_then_delete() {
        let app = app();
        let (status, body) = send(
            &app,
            request(Method::PUT, "/console/view", Some(json!({ "view": "banners" }))),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["panel"]["banners"].as_array().map(Vec::len), Some(3));

        for _ in 0..2 {
            let (status, _) = send(&app, request(Method::DELETE, "/console/banners/2", None)).await;
            assert_eq!(status, StatusCode::NO_CONTENT);
        }

        let (_, body) = send(&app, request(Method::GET, "/console", None)).await;
        assert_eq!(body["activeView"], "banners");
        let ids: Vec<u64> = body["panel"]["banners"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|b| b["id"].as_u64())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_unknown_view_is_rejected() {
        let app = app();
        let (status, body) = send(
            &app,
            request(Method::PUT, "/console/view", Some(json!({ "view": "settings" }))),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "unknown console view 'settings'");

        let (_, body) = send(&app, request(Method::GET, "/console", None)).await;
        assert_eq!(body["activeView"], "analytics");
    }

    #[tokio::test]
    async fn test_malformed_view_body_gets_json_error() {
        let app = app();
        let (status, body) = send(
            &app,
            request(Method::PUT, "/console/view", Some(json!({ "view": 5 }))),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].is_string());

        let (_, body) = send(&app, request(Method::GET, "/console", None)).await;
        assert_eq!(body["activeView"], "analytics");
    }

    #[tokio::test]
    async fn test_banner_body_without_content_type_gets_json_error() {
        let seed = sample_seed();
        let editor = Arc::new(LocalBannerEditor::new(&seed.banners));
        let app = app_with(seed, editor, false);

        let req = Request::builder()
            .method(Method::POST)
            .uri("/console/banners")
            .body(Body::from(r#"{"title":"New","imageUrl":"https://x/new.jpg"}"#))
            .unwrap();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(body["error"].is_string());

        let (status, body) =
            send(&app, request(Method::DELETE, "/console/banners/abc", None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (_, banners) = send(&app, request(Method::GET, "/console/banners", None)).await;
        assert_eq!(banners.as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_create_without_editor_is_not_implemented() {
        let app = app();
        let draft = json!({ "title": "New", "imageUrl": "https://x/new.jpg" });
        let (status, body) =
            send(&app, request(Method::POST, "/console/banners", Some(draft))).await;

        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(body["error"], "banner editing is not available");

        let (_, banners) = send(&app, request(Method::GET, "/console/banners", None)).await;
        assert_eq!(banners.as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_create_and_update_with_local_editor() {
        let seed = sample_seed();
        let editor = Arc::new(LocalBannerEditor::new(&seed.banners));
        let app = app_with(seed, editor, false);

        let draft = json!({
            "title": "Company incorporation",
            "imageUrl": "https://x/inc.jpg",
            "status": "active"
        });
        let (status, body) =
            send(&app, request(Method::POST, "/console/banners", Some(draft))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 4);
        assert_eq!(body["clickCount"], 0);

        let edit = json!({
            "title": "ITR deadline",
            "imageUrl": "https://x/itr.jpg",
            "status": "inactive"
        });
        let (status, body) = send(
            &app,
            request(Method::PUT, "/console/banners/1", Some(edit.clone())),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "ITR deadline");
        assert_eq!(body["clickCount"], 1240);

        let (status, _) = send(&app, request(Method::PUT, "/console/banners/77", Some(edit))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let blank = json!({ "title": " ", "imageUrl": "https://x/a.jpg" });
        let (status, _) = send(&app, request(Method::POST, "/console/banners", Some(blank))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_analytics_and_remount() {
        let app = app();
        let (status, metrics) = send(&app, request(Method::GET, "/console/analytics", None)).await;
        assert_eq!(status, StatusCode::OK);
        let active_now = metrics["activeNowCount"].as_u64().unwrap();
        assert!((10..=59).contains(&active_now));

        send(&app, request(Method::DELETE, "/console/banners/1", None)).await;
        send(&app, request(Method::PUT, "/console/view", Some(json!({ "view": "legal" })))).await;

        let (status, body) = send(&app, request(Method::POST, "/console/remount", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["activeView"], "analytics");

        let (_, banners) = send(&app, request(Method::GET, "/console/banners", None)).await;
        assert_eq!(banners.as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_visit_site_redirects() {
        let response = app()
            .oneshot(request(Method::GET, "/console/visit-site", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "https://example.com");
    }

    #[tokio::test]
    async fn test_login_required_redirects_without_session() {
        let app = app_with(sample_seed(), Arc::new(DisabledEditor), true);

        let response = app
            .clone()
            .oneshot(request(Method::GET, "/console", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");

        let with_session = Request::builder()
            .uri("/console")
            .header(SESSION_HEADER, "admin")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(with_session).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(request(Method::GET, "/healthz", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
