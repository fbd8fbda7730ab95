//! Bcrypt Password Verifier
//!
//! 实现 PasswordVerifierPort trait，兼容 `$2a$` / `$2b$` / `$2y$` 格式的哈希

use async_trait::async_trait;

use crate::application::ports::{CredentialError, PasswordVerifierPort};

/// Bcrypt 密码校验器
///
/// bcrypt 为 CPU 密集计算，放到 blocking 线程池执行
#[derive(Debug, Clone, Default)]
pub struct BcryptPasswordVerifier;

impl BcryptPasswordVerifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PasswordVerifierPort for BcryptPasswordVerifier {
    async fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, CredentialError> {
        let plaintext = plaintext.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash))
            .await
            .map_err(|e| CredentialError::TaskFailed(e.to_string()))?
            .map_err(|e| CredentialError::InvalidHash(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 最低 cost，测试用
    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn test_verify_matching_password() {
        let hash = bcrypt::hash("correct horse", TEST_COST).unwrap();
        let verifier = BcryptPasswordVerifier::new();

        assert!(verifier.verify("correct horse", &hash).await.unwrap());
        assert!(!verifier.verify("battery staple", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_empty_password_against_hash() {
        let hash = bcrypt::hash("secret", TEST_COST).unwrap();
        let verifier = BcryptPasswordVerifier::new();

        assert!(!verifier.verify("", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_hash_is_error() {
        let verifier = BcryptPasswordVerifier::new();
        let result = verifier.verify("secret", "not-a-bcrypt-hash").await;
        assert!(matches!(result, Err(CredentialError::InvalidHash(_))));
    }
}
