// HTTP error responses - every failure leaves as {"error": "..."}
use crate::application::error::ConsoleError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error(transparent)]
    Body(#[from] JsonRejection),

    #[error(transparent)]
    Path(#[from] PathRejection),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Console(err) => match err {
                ConsoleError::EditorUnavailable => StatusCode::NOT_IMPLEMENTED,
                ConsoleError::EditorRejected(_) | ConsoleError::UnknownView(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                ConsoleError::DuplicateBannerId(_) => StatusCode::CONFLICT,
                ConsoleError::BannerNotFound(_) => StatusCode::NOT_FOUND,
                ConsoleError::ConsoleStopped => StatusCode::SERVICE_UNAVAILABLE,
            },
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Path(rejection) => rejection.status(),
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Console(err) => err.to_string(),
            ApiError::Body(rejection) => rejection.body_text(),
            ApiError::Path(rejection) => rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            tracing::warn!("Console request failed: {}", message);
        } else {
            tracing::debug!("Console request rejected ({}): {}", status, message);
        }

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl IntoResponse for ConsoleError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}
