//! HTTP Middleware
//!
//! - HTTP 状态码错误日志中间件
//! - 管理端路由的 Bearer token 校验

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use super::error::{messages, ApiError};
use super::state::AppState;

/// Authorization 头前缀
pub const BEARER_PREFIX: &str = "Bearer ";

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，当状态码为 4xx 或 5xx 时记录日志
/// 注意：运维错误的细节在 ApiError::from_application() 中记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

/// 管理端 token 校验中间件
///
/// 校验 `Authorization: Bearer <token>` 的签名、有效期和用户名，
/// 通过后将 TokenClaims 放入 request extensions
pub async fn require_admin_token(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_PREFIX))
        .map(str::to_owned)
        .ok_or_else(|| ApiError::Unauthorized(messages::UNAUTHORIZED.to_string()))?;

    let claims = state
        .token_issuer
        .verify(&token)
        .map_err(|e| ApiError::from_application(e.into(), messages::UNAUTHORIZED))?;

    if claims.username != state.admin_username {
        tracing::warn!(username = %claims.username, "Token subject is not the admin");
        return Err(ApiError::Unauthorized(messages::UNAUTHORIZED.to_string()));
    }

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
