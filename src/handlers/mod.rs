pub mod products;

use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Unix seconds.
    pub timestamp: i64,
}

pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            timestamp: Utc::now().timestamp(),
        }),
    )
}

/// Catch-all for unknown paths and unsupported methods on known paths.
pub async fn endpoint_not_found() -> AppError {
    AppError::endpoint_not_found()
}

/// Only the methods in the routing table are served; axum would otherwise
/// answer HEAD on every GET route.
pub async fn reject_head(request: Request, next: Next) -> Response {
    if request.method() == Method::HEAD {
        return AppError::endpoint_not_found().into_response();
    }
    next.run(request).await
}
