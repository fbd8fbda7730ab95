//! Admin Context - 管理员限界上下文
//!
//! 职责:
//! - 静态管理员身份
//! - Session token 载荷与有效期

mod claims;
mod credentials;

pub use claims::{TokenClaims, TOKEN_TTL_SECS};
pub use credentials::AdminCredentials;
