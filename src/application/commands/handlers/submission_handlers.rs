//! Submission Command Handlers

use std::sync::Arc;

use crate::application::commands::{DeleteSubmission, SubmitForm};
use crate::application::error::ApplicationError;
use crate::application::ports::SubmissionRepositoryPort;
use crate::domain::SubmissionId;

// ============================================================================
// SubmitForm
// ============================================================================

/// 插入结果
#[derive(Debug, Clone)]
pub struct SubmitFormResponse {
    pub acknowledged: bool,
    pub inserted_id: SubmissionId,
}

/// SubmitForm Handler
pub struct SubmitFormHandler {
    submission_repo: Arc<dyn SubmissionRepositoryPort>,
}

impl SubmitFormHandler {
    pub fn new(submission_repo: Arc<dyn SubmissionRepositoryPort>) -> Self {
        Self { submission_repo }
    }

    /// 原样保存请求体，不去重
    pub async fn handle(&self, command: SubmitForm) -> Result<SubmitFormResponse, ApplicationError> {
        let fields = command.fields.without_reserved();
        let field_count = fields.len();

        let inserted_id = self.submission_repo.insert(&fields).await?;

        tracing::info!(
            submission_id = %inserted_id,
            field_count,
            "Submission stored"
        );

        Ok(SubmitFormResponse {
            acknowledged: true,
            inserted_id,
        })
    }
}

// ============================================================================
// DeleteSubmission
// ============================================================================

/// DeleteSubmission Handler
pub struct DeleteSubmissionHandler {
    submission_repo: Arc<dyn SubmissionRepositoryPort>,
}

impl DeleteSubmissionHandler {
    pub fn new(submission_repo: Arc<dyn SubmissionRepositoryPort>) -> Self {
        Self { submission_repo }
    }

    /// 格式错误的标识视为不存在
    pub async fn handle(&self, command: DeleteSubmission) -> Result<SubmissionId, ApplicationError> {
        let id = SubmissionId::parse(&command.id)?;

        if !self.submission_repo.delete(&id).await? {
            return Err(ApplicationError::not_found("Submission", id.to_string()));
        }

        tracing::info!(submission_id = %id, "Submission deleted");

        Ok(id)
    }
}
