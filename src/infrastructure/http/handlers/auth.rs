//! Auth HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::AdminLogin;
use crate::infrastructure::http::dto::AdminLoginResponse;
use crate::infrastructure::http::error::{messages, ApiError};
use crate::infrastructure::http::extractors::LoginPayload;
use crate::infrastructure::http::state::AppState;

/// 管理员登录
pub async fn admin_login(
    State(state): State<Arc<AppState>>,
    LoginPayload(req): LoginPayload,
) -> Result<Json<AdminLoginResponse>, ApiError> {
    let command = AdminLogin {
        username: req.username,
        password: req.password,
    };

    let result = state
        .admin_login_handler
        .handle(command)
        .await
        .map_err(|e| ApiError::from_application(e, messages::LOGIN_FAILED))?;

    Ok(Json(AdminLoginResponse {
        token: result.token,
    }))
}
