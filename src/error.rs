use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum PartyError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Invalid status: {value}")]
    InvalidStatus { value: String },

    #[error("Invalid request body: {0}")]
    BadRequest(String),

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Storage operation timed out: {operation}")]
    Timeout { operation: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type PartyResult<T> = Result<T, PartyError>;

impl PartyError {
    pub fn not_found(entity_type: &str, id: impl ToString) -> Self {
        PartyError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            PartyError::BlankField { .. }
            | PartyError::InvalidStatus { .. }
            | PartyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            PartyError::NotFound { .. } => StatusCode::NOT_FOUND,
            PartyError::Timeout { .. } => StatusCode::SERVICE_UNAVAILABLE,
            PartyError::Io(_) | PartyError::Json(_) | PartyError::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// Malformed bodies, wrong field types and missing content types all read as
// client errors with the usual JSON error body.
impl From<JsonRejection> for PartyError {
    fn from(rejection: JsonRejection) -> Self {
        PartyError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for PartyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            warn!(error = %self, "request failed");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
