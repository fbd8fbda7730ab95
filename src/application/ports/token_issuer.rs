//! Token Issuer Port
//!
//! 签发与校验无状态的 session token

use thiserror::Error;

use crate::domain::TokenClaims;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Invalid token: {0}")]
    Invalid(String),

    #[error("Token expired")]
    Expired,
}

/// 签发结果
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: TokenClaims,
}

/// Token Issuer Port
pub trait TokenIssuerPort: Send + Sync {
    /// 为用户名签发 token（有效期一小时）
    fn issue(&self, username: &str) -> Result<IssuedToken, TokenError>;

    /// 校验签名与有效期，返回载荷
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
