//! Formbox - 表单收集后台
//!
//! - Domain: submission/, admin/
//! - Application: commands, queries, ports
//! - Infrastructure: http, persistence, adapters

use std::sync::Arc;

use formbox::config::{load_config, print_config, LogConfig};
use formbox::domain::AdminCredentials;
use formbox::infrastructure::adapters::{BcryptPasswordVerifier, JwtTokenIssuer};
use formbox::infrastructure::http::{AppState, HttpServer, ServerConfig};
use formbox::infrastructure::persistence::sqlite::{
    close_pool, create_pool, run_migrations, DatabaseConfig, SqliteSubmissionRepository,
};

/// 初始化日志（RUST_LOG 优先于配置）
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},formbox={},tower_http=debug", log.level, log.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 可选
    dotenvy::dotenv().ok();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Formbox - 表单收集后台");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建适配器
    let submission_repo = Arc::new(SqliteSubmissionRepository::new(pool.clone()));
    let password_verifier = Arc::new(BcryptPasswordVerifier::new());
    let token_issuer = Arc::new(JwtTokenIssuer::new(&config.auth.jwt_secret));

    let admin = AdminCredentials::new(
        config.auth.admin_username.clone(),
        config.auth.admin_password_hash.clone(),
    );

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    let state = AppState::new(
        admin,
        config.auth.protect_admin_routes,
        submission_repo,
        password_verifier,
        token_issuer,
    );

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    let served = server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await;

    // 无论服务是否正常退出都释放连接池
    close_pool(&pool).await;
    served?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
