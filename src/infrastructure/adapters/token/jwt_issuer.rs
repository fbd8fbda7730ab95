//! JWT Token Issuer
//!
//! 实现 TokenIssuerPort trait，HS256 签名，载荷 `{ username, iat, exp }`

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::application::ports::{IssuedToken, TokenError, TokenIssuerPort};
use crate::domain::TokenClaims;

/// JWT 签发器
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenIssuer {
    /// 使用服务端密钥创建签发器
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
        }
    }
}

impl TokenIssuerPort for JwtTokenIssuer {
    fn issue(&self, username: &str) -> Result<IssuedToken, TokenError> {
        let claims = TokenClaims::issue(username, Utc::now());

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))?;

        Ok(IssuedToken { token, claims })
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_issue_and_verify() {
        let issuer = JwtTokenIssuer::new("test-secret");
        let issued = issuer.issue("admin").unwrap();

        let claims = issuer.verify(&issued.token).unwrap();
        assert_eq!(claims.username, "admin");
        assert_eq!(claims, issued.claims);
        assert_eq!(claims.exp - claims.iat, 3600);

        let now = Utc::now().timestamp();
        assert!((claims.iat - now).abs() <= 5);
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let issued = JwtTokenIssuer::new("secret-a").issue("admin").unwrap();
        let result = JwtTokenIssuer::new("secret-b").verify(&issued.token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_expired_token_rejected() {
        let secret = "test-secret";
        let claims = TokenClaims::issue("admin", Utc::now() - Duration::hours(3));
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        let result = JwtTokenIssuer::new(secret).verify(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let issuer = JwtTokenIssuer::new("test-secret");
        assert!(issuer.verify("not.a.jwt").is_err());
        assert!(issuer.verify("").is_err());
    }
}
