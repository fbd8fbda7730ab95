//! Auth Command Handlers

use std::sync::Arc;

use crate::application::commands::AdminLogin;
use crate::application::error::ApplicationError;
use crate::application::ports::{PasswordVerifierPort, TokenIssuerPort};
use crate::domain::AdminCredentials;

/// 登录成功响应
#[derive(Debug, Clone)]
pub struct AdminLoginResponse {
    pub token: String,
    pub expires_at: i64,
}

/// AdminLogin Handler
pub struct AdminLoginHandler {
    admin: AdminCredentials,
    password_verifier: Arc<dyn PasswordVerifierPort>,
    token_issuer: Arc<dyn TokenIssuerPort>,
}

impl AdminLoginHandler {
    pub fn new(
        admin: AdminCredentials,
        password_verifier: Arc<dyn PasswordVerifierPort>,
        token_issuer: Arc<dyn TokenIssuerPort>,
    ) -> Self {
        Self {
            admin,
            password_verifier,
            token_issuer,
        }
    }

    pub async fn handle(&self, command: AdminLogin) -> Result<AdminLoginResponse, ApplicationError> {
        let username_ok = self.admin.matches_username(&command.username);

        // 用户名不匹配时也执行密码校验，响应时间不暴露是哪一项失败
        let password_ok = self
            .password_verifier
            .verify(&command.password, self.admin.password_hash())
            .await?;

        if !(username_ok && password_ok) {
            tracing::debug!(username = %command.username, "Admin login rejected");
            return Err(ApplicationError::InvalidCredentials);
        }

        let issued = self.token_issuer.issue(self.admin.username())?;

        tracing::info!(
            username = %issued.claims.username,
            expires_at = issued.claims.exp,
            "Admin logged in"
        );

        Ok(AdminLoginResponse {
            token: issued.token,
            expires_at: issued.claims.exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{CredentialError, IssuedToken, TokenError};
    use crate::domain::TokenClaims;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 以 "hash:<明文>" 作为哈希的假实现，记录调用次数
    #[derive(Default)]
    struct FakeVerifier {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PasswordVerifierPort for FakeVerifier {
        async fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, CredentialError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match hash.strip_prefix("hash:") {
                Some(expected) => Ok(expected == plaintext),
                None => Err(CredentialError::InvalidHash(hash.to_string())),
            }
        }
    }

    struct FakeIssuer;

    impl TokenIssuerPort for FakeIssuer {
        fn issue(&self, username: &str) -> Result<IssuedToken, TokenError> {
            let claims = TokenClaims::issue(username, Utc::now());
            Ok(IssuedToken {
                token: format!("token-for-{}", username),
                claims,
            })
        }

        fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
            Err(TokenError::Invalid(token.to_string()))
        }
    }

    fn handler(hash: &str, verifier: Arc<FakeVerifier>) -> AdminLoginHandler {
        AdminLoginHandler::new(
            AdminCredentials::new("admin", hash),
            verifier,
            Arc::new(FakeIssuer),
        )
    }

    fn login(username: &str, password: &str) -> AdminLogin {
        AdminLogin {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_credentials_issue_token() {
        let verifier = Arc::new(FakeVerifier::default());
        let handler = handler("hash:s3cret", verifier);

        let response = handler.handle(login("admin", "s3cret")).await.unwrap();
        assert_eq!(response.token, "token-for-admin");
        assert!(response.expires_at > Utc::now().timestamp());
    }

    #[tokio::test]
    async fn test_wrong_username_or_password_rejected() {
        let verifier = Arc::new(FakeVerifier::default());
        let handler = handler("hash:s3cret", verifier);

        for (user, pass) in [("root", "s3cret"), ("admin", "nope"), ("root", "nope")] {
            let err = handler.handle(login(user, pass)).await.unwrap_err();
            assert!(matches!(err, ApplicationError::InvalidCredentials));
            assert_eq!(err.to_string(), "Invalid login credentials");
        }
    }

    #[tokio::test]
    async fn test_password_checked_even_when_username_wrong() {
        let verifier = Arc::new(FakeVerifier::default());
        let handler = handler("hash:s3cret", verifier.clone());

        let _ = handler.handle(login("someone-else", "s3cret")).await;
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_malformed_hash_is_operational_error() {
        let verifier = Arc::new(FakeVerifier::default());
        let handler = handler("plaintext-password", verifier);

        let err = handler.handle(login("admin", "plaintext-password")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::CredentialError(_)));
        assert!(!err.is_client_error());
    }
}
