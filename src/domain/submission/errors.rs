//! Submission Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("无效的记录标识: {0}")]
    InvalidId(String),

    #[error("CSV 导出失败: {0}")]
    Export(String),
}

impl From<csv::Error> for SubmissionError {
    fn from(err: csv::Error) -> Self {
        SubmissionError::Export(err.to_string())
    }
}
