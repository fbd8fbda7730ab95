//! Root Handler
//!
//! 存活检查

/// 存活检查文案
pub const LIVENESS_MESSAGE: &str = "Server is Running! 🚀";

/// GET / - 存活检查
pub async fn root() -> &'static str {
    LIVENESS_MESSAGE
}
