//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod submission_repo;

pub use database::*;
pub use submission_repo::*;
