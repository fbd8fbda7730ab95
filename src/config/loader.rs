//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "FORMBOX";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `FORMBOX_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `FORMBOX_SERVER__PORT=5000`
/// - `FORMBOX_DATABASE__PATH=/data/formbox.db`
/// - `FORMBOX_AUTH__ADMIN_USERNAME=admin`
/// - `FORMBOX_AUTH__ADMIN_PASSWORD_HASH='$2b$10$...'`
/// - `FORMBOX_AUTH__JWT_SECRET=change-me`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("server.max_body_bytes", 1024 * 1024)?
        .set_default("database.path", "data/formbox.db")?
        .set_default("database.max_connections", 5)?
        .set_default("auth.protect_admin_routes", false)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 例如: FORMBOX_AUTH__JWT_SECRET=change-me
    // 注意: 环境变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.database.path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database path cannot be empty".to_string(),
        ));
    }

    if config.auth.admin_username.is_empty() {
        return Err(ConfigError::ValidationError(
            "Admin username must be set".to_string(),
        ));
    }

    if config.auth.admin_password_hash.is_empty() {
        return Err(ConfigError::ValidationError(
            "Admin password hash must be set".to_string(),
        ));
    }

    if config.auth.jwt_secret.is_empty() {
        return Err(ConfigError::ValidationError(
            "JWT secret must be set".to_string(),
        ));
    }

    Ok(())
}

/// 启动摘要（不含密钥）
pub fn config_summary(config: &AppConfig) -> Vec<String> {
    vec![
        format!("Server: {}", config.server.addr()),
        format!("Max Body Size: {} bytes", config.server.max_body_bytes),
        format!("Database: {}", config.database.path),
        format!("Database Max Connections: {}", config.database.max_connections),
        format!("Admin Username: {}", config.auth.admin_username),
        format!("Protect Admin Routes: {}", config.auth.protect_admin_routes),
        format!("Log Level: {}", config.log.level),
        format!("Log JSON: {}", config.log.json),
    ]
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    for line in config_summary(config) {
        tracing::info!("{}", line);
    }
    tracing::info!("=================================");
}
