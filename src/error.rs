//! Error types for HTTP handlers.
//!
//! `AppError` classifies what went wrong; its `IntoResponse` renders the JSON
//! `{"error": ...}` body with a fixed public message, so store details never
//! reach the client. `AppErrorResponse` pairs an error with the request ID so
//! server-side failures are logged against the request that caused them.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::middleware::RequestId;
use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing 'word' query parameter")]
    MissingWord,

    #[error("Database error: {0}")]
    Database(#[from] StoreError),

    #[error("Endpoint not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingWord => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::MissingWord => "Missing 'word' query parameter",
            AppError::Database(_) => "Database error",
            AppError::NotFound => "Endpoint not found",
            AppError::MethodNotAllowed => "Method not allowed",
            AppError::Internal(_) => "Internal server error",
        }
    }
}

/// JSON body shared by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        AppErrorResponse::from(self).into_response()
    }
}

/// An `AppError` tagged with the request it occurred in.
#[derive(Debug)]
pub struct AppErrorResponse {
    pub error: AppError,
    pub request_id: Option<Uuid>,
}

impl From<AppError> for AppErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error,
            request_id: None,
        }
    }
}

impl IntoResponse for AppErrorResponse {
    fn into_response(self) -> Response {
        let status = self.error.status();

        if status.is_server_error() {
            match self.request_id {
                Some(request_id) => {
                    tracing::error!(%request_id, error = %self.error, "Request failed")
                }
                None => tracing::error!(error = %self.error, "Request failed"),
            }
        } else {
            tracing::debug!(status = status.as_u16(), error = %self.error, "Client error");
        }

        let body = ErrorBody {
            error: self.error.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Attach a request ID to the error side of a `Result`.
pub trait ResultExt<T> {
    fn with_request_id(self, request_id: &RequestId) -> Result<T, AppErrorResponse>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn with_request_id(self, request_id: &RequestId) -> Result<T, AppErrorResponse> {
        self.map_err(|e| AppErrorResponse {
            error: e.into(),
            request_id: Some(request_id.0),
        })
    }
}
