use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};

use crate::api::response;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Request timed out. Please try again.")]
    UpstreamTimeout,

    #[error("Service temporarily unavailable ({0})")]
    UpstreamStatus(u16),

    #[error("Unable to reach the download service")]
    UpstreamUnreachable(String),

    #[error("Failed to download the video: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::UpstreamStatus(code) => {
                StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::UpstreamUnreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to API callers. Transport details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Internal(_) | AppError::Config(_) => {
                "Failed to download the video".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        response::error(self.status_code(), self.public_message()).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::UpstreamTimeout
        } else if let Some(status) = err.status() {
            AppError::UpstreamStatus(status.as_u16())
        } else if err.is_connect() || err.is_request() {
            AppError::UpstreamUnreachable(err.to_string())
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_maps_to_gateway_timeout() {
        assert_eq!(AppError::UpstreamTimeout.status_code(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            AppError::UpstreamTimeout.public_message(),
            "Request timed out. Please try again."
        );
    }

    #[test]
    fn upstream_status_is_passed_through() {
        let err = AppError::UpstreamStatus(429);
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.public_message(), "Service temporarily unavailable (429)");
    }

    #[test]
    fn unrepresentable_status_falls_back_to_bad_gateway() {
        assert_eq!(AppError::UpstreamStatus(42).status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let err = AppError::Internal("body stream closed".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Failed to download the video");
    }

    #[test]
    fn unreachable_is_service_unavailable() {
        let err = AppError::UpstreamUnreachable("connection refused".to_string());
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.public_message(), "Unable to reach the download service");
    }
}
