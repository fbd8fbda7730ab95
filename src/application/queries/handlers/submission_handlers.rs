//! Submission Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::SubmissionRepositoryPort;
use crate::application::queries::{ExportSubmissionsCsv, ListSubmissions};
use crate::domain::{encode_csv, Submission};

/// 导出文件名
pub const EXPORT_FILE_NAME: &str = "users.csv";

/// CSV 导出结果
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub file_name: &'static str,
    pub row_count: usize,
    pub content: Vec<u8>,
}

/// ListSubmissions Handler
pub struct ListSubmissionsHandler {
    submission_repo: Arc<dyn SubmissionRepositoryPort>,
}

impl ListSubmissionsHandler {
    pub fn new(submission_repo: Arc<dyn SubmissionRepositoryPort>) -> Self {
        Self { submission_repo }
    }

    pub async fn handle(&self, _query: ListSubmissions) -> Result<Vec<Submission>, ApplicationError> {
        Ok(self.submission_repo.find_all().await?)
    }
}

/// ExportSubmissionsCsv Handler
pub struct ExportSubmissionsCsvHandler {
    submission_repo: Arc<dyn SubmissionRepositoryPort>,
}

impl ExportSubmissionsCsvHandler {
    pub fn new(submission_repo: Arc<dyn SubmissionRepositoryPort>) -> Self {
        Self { submission_repo }
    }

    pub async fn handle(&self, _query: ExportSubmissionsCsv) -> Result<CsvExport, ApplicationError> {
        let submissions = self.submission_repo.find_all().await?;
        let content = encode_csv(&submissions)?;

        tracing::debug!(
            row_count = submissions.len(),
            size_bytes = content.len(),
            "Submissions exported"
        );

        Ok(CsvExport {
            file_name: EXPORT_FILE_NAME,
            row_count: submissions.len(),
            content,
        })
    }
}
