//! Command Handlers 实现

mod auth_handlers;
mod submission_handlers;

pub use auth_handlers::*;
pub use submission_handlers::*;
