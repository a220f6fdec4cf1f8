use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Shared handler result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error, Clone)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,
    #[error("internal server error")]
    Internal(Arc<anyhow::Error>),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn internal(err: anyhow::Error) -> Self {
        Self::Internal(Arc::new(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            // Clients only learn "not found"; the body stays empty.
            ApiError::NotFound => status.into_response(),
            ApiError::Internal(cause) => {
                error!(error = %cause, "request failed");
                (status, "internal server error").into_response()
            }
        }
    }
}

/// Convert any error into a masked 500 response.
pub fn internal_error(err: impl Into<anyhow::Error>) -> ApiError {
    ApiError::internal(err.into())
}
