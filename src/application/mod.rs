//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SubmissionRepository、PasswordVerifier、TokenIssuer）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    AdminLogin,
    DeleteSubmission,
    SubmitForm,
    // Handlers
    handlers::{
        AdminLoginHandler, AdminLoginResponse, DeleteSubmissionHandler, SubmitFormHandler,
        SubmitFormResponse,
    },
};

pub use error::ApplicationError;

pub use ports::{
    CredentialError, IssuedToken, PasswordVerifierPort, RepositoryError,
    SubmissionRepositoryPort, TokenError, TokenIssuerPort,
};

pub use queries::{
    ExportSubmissionsCsv,
    ListSubmissions,
    // Handlers
    handlers::{CsvExport, ExportSubmissionsCsvHandler, ListSubmissionsHandler, EXPORT_FILE_NAME},
};
