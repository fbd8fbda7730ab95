//! Submission HTTP Handlers

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::application::{DeleteSubmission, ExportSubmissionsCsv, ListSubmissions, SubmitForm};
use crate::domain::{Submission, SubmissionFields};
use crate::infrastructure::http::dto::{InsertOneResponse, MessageResponse};
use crate::infrastructure::http::error::{messages, ApiError};
use crate::infrastructure::http::state::AppState;

/// CSV 响应类型
const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// 获取所有提交记录
pub async fn list_submissions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Submission>>, ApiError> {
    let submissions = state
        .list_submissions_handler
        .handle(ListSubmissions)
        .await
        .map_err(|e| ApiError::from_application(e, messages::FETCH_FAILED))?;

    Ok(Json(submissions))
}

/// 提交表单（请求体原样保存）
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    Json(fields): Json<SubmissionFields>,
) -> Result<(StatusCode, Json<InsertOneResponse>), ApiError> {
    let result = state
        .submit_form_handler
        .handle(SubmitForm { fields })
        .await
        .map_err(|e| ApiError::from_application(e, messages::SUBMIT_FAILED))?;

    Ok((
        StatusCode::CREATED,
        Json(InsertOneResponse {
            acknowledged: result.acknowledged,
            inserted_id: result.inserted_id,
        }),
    ))
}

/// 删除记录
pub async fn delete_submission(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .delete_submission_handler
        .handle(DeleteSubmission { id })
        .await
        .map_err(|e| ApiError::from_application(e, messages::DELETE_FAILED))?;

    Ok(Json(MessageResponse::new("User deleted successfully")))
}

/// 导出 CSV 附件
pub async fn download_csv(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let export = state
        .export_submissions_csv_handler
        .handle(ExportSubmissionsCsv)
        .await
        .map_err(|e| ApiError::from_application(e, messages::EXPORT_FAILED))?;

    tracing::info!(row_count = export.row_count, "CSV export downloaded");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.file_name),
            ),
        ],
        export.content,
    )
        .into_response())
}
