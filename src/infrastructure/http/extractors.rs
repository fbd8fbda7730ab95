//! Request Extractors

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use super::dto::AdminLoginRequest;
use super::error::{messages, ApiError};

/// 登录请求体提取器
///
/// 请求体无法解析（非 JSON、字段类型错误等）时按登录失败处理，返回 401
pub struct LoginPayload(pub AdminLoginRequest);

#[async_trait]
impl<S> FromRequest<S> for LoginPayload
where
    S: Send + Sync,
    Json<AdminLoginRequest>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<AdminLoginRequest>::from_request(req, state)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e.body_text(), "Malformed login request");
                ApiError::Unauthorized(messages::INVALID_CREDENTIALS.to_string())
            })?;

        Ok(LoginPayload(payload))
    }
}
