//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{CredentialError, RepositoryError, TokenError};
use crate::domain::SubmissionError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 登录失败（不区分用户名错误还是密码错误）
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// 缺少或无效的 token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 凭据校验错误
    #[error("Credential error: {0}")]
    CredentialError(String),

    /// 导出错误
    #[error("Export error: {0}")]
    ExportError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// 是否属于客户端错误（4xx）
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials | Self::Unauthorized(_) | Self::NotFound { .. }
        )
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

impl From<CredentialError> for ApplicationError {
    fn from(err: CredentialError) -> Self {
        Self::CredentialError(err.to_string())
    }
}

impl From<TokenError> for ApplicationError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::SigningFailed(msg) => Self::InternalError(msg),
            other => Self::Unauthorized(other.to_string()),
        }
    }
}

impl From<SubmissionError> for ApplicationError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::InvalidId(id) => Self::not_found("Submission", id),
            SubmissionError::Export(msg) => Self::ExportError(msg),
        }
    }
}
