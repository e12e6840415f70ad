/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use user_core::UserError;

pub type Result<T> = std::result::Result<T, ServerError>;

pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";
pub const USER_NOT_FOUND: &str = "User not found";
pub const PAYLOAD_TOO_LARGE: &str = "Request body too large";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    /// Generic 404 for unmatched routes and malformed path parameters
    pub fn endpoint_not_found() -> Self {
        ServerError::NotFound(ENDPOINT_NOT_FOUND.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Conflict(_) => StatusCode::CONFLICT,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::Internal(_) | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UserError> for ServerError {
    fn from(err: UserError) -> Self {
        match err {
            e if e.is_validation() => ServerError::BadRequest(e.to_string()),
            e @ UserError::EmailExists => ServerError::Conflict(e.to_string()),
            UserError::UserNotFound(_) => ServerError::NotFound(USER_NOT_FOUND.to_string()),
            e => ServerError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            ServerError::BadRequest(msg)
            | ServerError::Conflict(msg)
            | ServerError::NotFound(msg) => msg,
            ServerError::MethodNotAllowed => "Method not allowed".to_string(),
            ServerError::PayloadTooLarge => PAYLOAD_TOO_LARGE.to_string(),
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                "Internal server error".to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
