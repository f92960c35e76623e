// Login gate - sends visitors without a session to the login page
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;

pub const SESSION_HEADER: &str = "x-console-session";

pub async fn require_login(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if !state.require_login {
        return next.run(request).await;
    }

    let logged_in = request
        .headers()
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| !s.trim().is_empty())
        .unwrap_or(false);

    if logged_in {
        next.run(request).await
    } else {
        tracing::info!(
            "No console session for {}, redirecting to {}",
            request.uri(),
            state.login_url
        );
        Redirect::to(&state.login_url).into_response()
    }
}
