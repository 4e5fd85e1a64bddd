use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors a handler can report back to the caller.
///
/// Both variants carry the exact message written into the `{"error": ...}` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn invalid_body() -> Self {
        AppError::BadRequest("Invalid request body".to_string())
    }

    pub fn missing_id() -> Self {
        AppError::BadRequest("Product ID is required".to_string())
    }

    pub fn product_not_found() -> Self {
        AppError::NotFound("Product not found".to_string())
    }

    pub fn endpoint_not_found() -> Self {
        AppError::NotFound("Endpoint not found".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
