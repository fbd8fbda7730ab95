//! Admin Context - Token Claims

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Token 有效期（秒）
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Session token 载荷
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    /// 以 `issued_at` 为起点签发，过期时间固定为一小时后
    pub fn issue(username: impl Into<String>, issued_at: DateTime<Utc>) -> Self {
        let expires_at = issued_at + Duration::seconds(TOKEN_TTL_SECS);
        Self {
            username: username.into(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }
}
