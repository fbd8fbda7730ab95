//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Submission Context: 表单提交记录与 CSV 导出
//! - Admin Context: 管理员身份与 token 载荷

pub mod admin;
pub mod submission;

pub use admin::{AdminCredentials, TokenClaims, TOKEN_TTL_SECS};
pub use submission::{
    encode_csv, ExportRow, Submission, SubmissionError, SubmissionFields, SubmissionId,
    EXPORT_FIELDS,
};
