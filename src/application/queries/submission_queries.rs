//! Submission Queries

/// 列出所有记录
#[derive(Debug, Clone)]
pub struct ListSubmissions;

/// 导出所有记录为 CSV
#[derive(Debug, Clone)]
pub struct ExportSubmissionsCsv;
