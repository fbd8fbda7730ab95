//! Formbox - 表单收集后台
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Submission Context: 提交记录与 CSV 导出
//! - Admin Context: 管理员身份与 token 载荷
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SubmissionRepository, PasswordVerifier, TokenIssuer）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 文档存储
//! - Adapters: bcrypt 密码校验, JWT 签发

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
