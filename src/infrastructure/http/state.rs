//! Application State
//!
//! 显式构造的服务上下文，包含所有 Command/Query Handlers，
//! 通过 axum `State` 注入每个请求

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AdminLoginHandler, DeleteSubmissionHandler, SubmitFormHandler,
    // Query handlers
    ExportSubmissionsCsvHandler, ListSubmissionsHandler,
    // Ports
    PasswordVerifierPort, SubmissionRepositoryPort, TokenIssuerPort,
};
use crate::domain::AdminCredentials;

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub token_issuer: Arc<dyn TokenIssuerPort>,

    // ========== Auth Policy ==========
    pub admin_username: String,
    /// 是否要求管理端路由携带 token
    pub protect_admin_routes: bool,

    // ========== Command Handlers ==========
    pub admin_login_handler: AdminLoginHandler,
    pub submit_form_handler: SubmitFormHandler,
    pub delete_submission_handler: DeleteSubmissionHandler,

    // ========== Query Handlers ==========
    pub list_submissions_handler: ListSubmissionsHandler,
    pub export_submissions_csv_handler: ExportSubmissionsCsvHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        admin: AdminCredentials,
        protect_admin_routes: bool,
        submission_repo: Arc<dyn SubmissionRepositoryPort>,
        password_verifier: Arc<dyn PasswordVerifierPort>,
        token_issuer: Arc<dyn TokenIssuerPort>,
    ) -> Self {
        Self {
            // Ports
            token_issuer: token_issuer.clone(),

            // Auth policy
            admin_username: admin.username().to_string(),
            protect_admin_routes,

            // Command handlers
            admin_login_handler: AdminLoginHandler::new(
                admin,
                password_verifier,
                token_issuer.clone(),
            ),
            submit_form_handler: SubmitFormHandler::new(submission_repo.clone()),
            delete_submission_handler: DeleteSubmissionHandler::new(submission_repo.clone()),

            // Query handlers
            list_submissions_handler: ListSubmissionsHandler::new(submission_repo.clone()),
            export_submissions_csv_handler: ExportSubmissionsCsvHandler::new(submission_repo),
        }
    }
}
