//! HTTP Error Handling
//!
//! 响应体统一为 `{ "message": ... }`，运维错误只返回固定文案，细节写日志

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 客户端可见的固定文案
pub mod messages {
    pub const INVALID_CREDENTIALS: &str = "Invalid login credentials";
    pub const UNAUTHORIZED: &str = "Unauthorized";
    pub const USER_NOT_FOUND: &str = "User not found";
    pub const LOGIN_FAILED: &str = "Failed to log in";
    pub const FETCH_FAILED: &str = "Failed to fetch data";
    pub const SUBMIT_FAILED: &str = "Failed to submit form";
    pub const DELETE_FAILED: &str = "Failed to delete user";
    pub const EXPORT_FAILED: &str = "Failed to download CSV";
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    /// 将应用层错误映射为 HTTP 错误
    ///
    /// 客户端错误按类型映射，其余一律 500 + `operational_message`
    pub fn from_application(err: ApplicationError, operational_message: &str) -> Self {
        match err {
            ApplicationError::InvalidCredentials => {
                ApiError::Unauthorized(messages::INVALID_CREDENTIALS.to_string())
            }
            ApplicationError::Unauthorized(_) => {
                ApiError::Unauthorized(messages::UNAUTHORIZED.to_string())
            }
            ApplicationError::NotFound { .. } => {
                ApiError::NotFound(messages::USER_NOT_FOUND.to_string())
            }
            other => {
                tracing::error!(error = %other, "{}", operational_message);
                ApiError::Internal(operational_message.to_string())
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::Internal(msg) => msg,
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_keep_their_status() {
        let err = ApiError::from_application(ApplicationError::InvalidCredentials, "x");
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);

        let err = ApiError::from_application(ApplicationError::not_found("Submission", "abc"), "x");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_operational_errors_hide_details() {
        let err = ApiError::from_application(
            ApplicationError::RepositoryError("disk I/O error at /var/lib".to_string()),
            messages::FETCH_FAILED,
        );

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        match err {
            ApiError::Internal(msg) => assert_eq!(msg, "Failed to fetch data"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
