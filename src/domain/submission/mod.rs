//! Submission Context - 表单提交限界上下文
//!
//! 职责:
//! - 提交记录的数据形状（四个已知字段 + 任意扩展字段）
//! - 记录标识
//! - CSV 导出

mod aggregate;
mod errors;
mod export;
mod value_objects;

pub use aggregate::{Submission, SubmissionFields};
pub use errors::SubmissionError;
pub use export::{encode_csv, ExportRow, EXPORT_FIELDS};
pub use value_objects::SubmissionId;
