use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Everything a handler can answer with besides success.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("missing bearer token")]
    AuthMissing,

    #[error("invalid or expired token")]
    AuthInvalid,

    #[error("user not found")]
    NotFound,

    #[error("invalid email or password")]
    InvalidCredentials,

    /// `message` goes to the client, `source` only to the log.
    #[error("{message}: {source:#}")]
    Unexpected {
        message: &'static str,
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn unexpected(message: &'static str) -> impl FnOnce(anyhow::Error) -> Self {
        move |source| ApiError::Unexpected { message, source }
    }

    /// Unreadable request bodies answer with the handler's generic 500 and the
    /// usual `{"error": ..}` shape; the rejection text is only logged.
    pub fn bad_body(message: &'static str) -> impl FnOnce(JsonRejection) -> Self {
        move |rejection| ApiError::Unexpected {
            message,
            source: anyhow::Error::new(rejection).context("read request body"),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::AuthMissing | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::AuthInvalid => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::AuthMissing => "Unauthorized",
            ApiError::AuthInvalid => "Forbidden",
            ApiError::NotFound => "User not found",
            ApiError::InvalidCredentials => "Invalid email or password",
            ApiError::Unexpected { message, source } => {
                error!(error = ?source, "{message}");
                *message
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
