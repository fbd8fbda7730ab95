//! HTTP Routes
//!
//! API Endpoints:
//! - /                    GET     存活检查
//! - /admin-login         POST    管理员登录，签发 token
//! - /submit-form         POST    提交表单
//! - /form-collection     GET     列出所有提交记录
//! - /download-csv        GET     导出 CSV（users.csv）
//! - /delete-user/:id     DELETE  删除记录

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::middleware::require_admin_token;
use super::state::AppState;

/// 创建所有路由
///
/// `protect_admin_routes` 开启时，管理端路由需要 Bearer token
pub fn create_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let mut admin = admin_routes();
    if state.protect_admin_routes {
        admin = admin.route_layer(middleware::from_fn_with_state(state, require_admin_token));
    }

    public_routes().merge(admin)
}

/// 公开路由
fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/admin-login", post(handlers::admin_login))
        .route("/submit-form", post(handlers::submit_form))
}

/// 管理端路由
fn admin_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/form-collection", get(handlers::list_submissions))
        .route("/download-csv", get(handlers::download_csv))
        .route("/delete-user/:id", delete(handlers::delete_submission))
}
