//! Persistence Layer - 数据持久化
//!
//! SQLite 文档集合存储实现

pub mod sqlite;

pub use self::sqlite::SqliteSubmissionRepository;
