//! Submission Commands

use crate::domain::SubmissionFields;

/// 提交表单命令
#[derive(Debug, Clone)]
pub struct SubmitForm {
    pub fields: SubmissionFields,
}

/// 删除记录命令（标识为原始字符串，由 handler 解析）
#[derive(Debug, Clone)]
pub struct DeleteSubmission {
    pub id: String,
}
