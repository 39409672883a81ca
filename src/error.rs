use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// ESPN answered, but with a non-success status.
    #[error("upstream returned status {status}")]
    UpstreamUnavailable { status: u16 },

    /// Network fault or an unreadable response body.
    #[error("upstream request failed: {0}")]
    UpstreamException(#[from] reqwest::Error),

    /// The call succeeded but the payload lacked the nested keys we need.
    #[error("{0}")]
    NotFound(String),
}

#[derive(Serialize)]
#[serde(untagged)]
enum ErrorResponse {
    Status { error: &'static str, status: u16 },
    Message { error: &'static str, message: String },
    Plain { error: String },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UpstreamUnavailable { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::UpstreamException(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(%status, "{}", self);

        let body = match self {
            ApiError::UpstreamUnavailable { status } => ErrorResponse::Status {
                error: "Failed to fetch data",
                status,
            },
            ApiError::UpstreamException(err) => ErrorResponse::Message {
                error: "Exception occurred",
                message: err.to_string(),
            },
            ApiError::NotFound(message) => ErrorResponse::Plain { error: message },
        };

        (status, Json(body)).into_response()
    }
}
