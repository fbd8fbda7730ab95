//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::SubmissionId;

// ============================================================================
// Auth DTOs
// ============================================================================

/// 登录请求（缺失字段按空字符串处理，必然校验失败）
#[derive(Deserialize)]
pub struct AdminLoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub token: String,
}

// ============================================================================
// Submission DTOs
// ============================================================================

/// 插入结果
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResponse {
    pub acknowledged: bool,
    pub inserted_id: SubmissionId,
}

/// 仅含文案的响应
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
