//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod password_verifier;
mod submission_repository;
mod token_issuer;

pub use password_verifier::{CredentialError, PasswordVerifierPort};
pub use submission_repository::{RepositoryError, SubmissionRepositoryPort};
pub use token_issuer::{IssuedToken, TokenError, TokenIssuerPort};
