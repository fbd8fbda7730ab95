//! Repository Ports - 出站端口
//!
//! 定义提交记录集合的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Submission, SubmissionFields, SubmissionId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Submission Repository Port
///
/// 文档集合语义：全量扫描、插入一条、按标识删除
#[async_trait]
pub trait SubmissionRepositoryPort: Send + Sync {
    /// 插入一条记录，由存储层分配标识
    async fn insert(&self, fields: &SubmissionFields) -> Result<SubmissionId, RepositoryError>;

    /// 获取所有记录（存储默认扫描顺序）
    async fn find_all(&self) -> Result<Vec<Submission>, RepositoryError>;

    /// 删除记录，返回是否有记录被删除
    async fn delete(&self, id: &SubmissionId) -> Result<bool, RepositoryError>;
}
