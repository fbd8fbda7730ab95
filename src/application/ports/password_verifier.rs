//! Password Verifier Port
//!
//! 明文密码与哈希的比对

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Invalid password hash: {0}")]
    InvalidHash(String),

    #[error("Verification task failed: {0}")]
    TaskFailed(String),
}

/// Password Verifier Port
#[async_trait]
pub trait PasswordVerifierPort: Send + Sync {
    /// 校验明文是否匹配哈希
    ///
    /// - `Ok(false)` 表示不匹配
    /// - `Err` 表示哈希本身无法解析等运维错误
    async fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, CredentialError>;
}
