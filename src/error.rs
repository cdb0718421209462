use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps the failure modes of the view handlers to HTTP status codes and
/// JSON bodies.
#[derive(Debug)]
pub enum ApiError {
    /// SUPABASE_URL / SUPABASE_ANON_KEY missing or empty
    Unconfigured,
    /// Invalid UUID format in path parameter
    InvalidId(String),
    /// No todo with this id
    TodoNotFound(Uuid),
    /// Backend request error
    BackendError(anyhow::Error),
    /// JSON parsing error
    JsonError(serde_json::Error),
    /// Matched path, unsupported method
    MethodNotAllowed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Unconfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Supabase backend is not configured: set SUPABASE_URL and SUPABASE_ANON_KEY"
                    .to_string(),
            ),
            ApiError::InvalidId(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid todo id: expected a UUID like '550e8400-e29b-41d4-a716-446655440000', got '{}'", id),
            ),
            ApiError::TodoNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Todo not found: {}", id),
            ),
            ApiError::BackendError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Backend error: {}", err),
            ),
            ApiError::JsonError(err) => (
                StatusCode::BAD_REQUEST,
                format!("JSON parse error: {}", err),
            ),
            ApiError::MethodNotAllowed(method) => (
                StatusCode::METHOD_NOT_ALLOWED,
                format!("Method not allowed: {}", method),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::BackendError(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonError(err)
    }
}
