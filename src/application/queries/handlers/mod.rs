//! Query Handlers 实现

mod submission_handlers;

pub use submission_handlers::*;
