//! 预订目录服务入口
//!
//! 加载配置、初始化日志和数据库、执行迁移后启动 HTTP 服务。

use std::time::Duration;

use axum::{Json, Router, routing::get};
use stagebook_booking_service::{routes, state::AppState};
use stagebook_shared::{AppConfig, Database, logging};
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 本地开发时从 .env 读取环境变量，文件不存在则忽略
    dotenvy::dotenv().ok();

    let config = AppConfig::load("stagebook-booking-service").unwrap_or_default();
    logging::init(&config.logging)?;

    info!("Starting stagebook-booking-service on {}", config.server_addr());

    let db = Database::connect(&config.database).await?;
    sqlx::migrate!("../../migrations").run(db.pool()).await?;
    info!("Database migrations applied");

    let state = AppState::new(db.pool().clone());

    let app = Router::new()
        .merge(routes::router(state))
        .route("/health", get(health_check))
        .route(
            "/ready",
            get({
                let db_for_ready = db;
                move || readiness_check(db_for_ready.clone())
            }),
        )
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_seconds,
        )));

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Listening on {}", config.server_addr());

    // 优雅关闭：收到 SIGTERM 或 Ctrl+C 时停止接收新连接，
    // 等待已有请求处理完毕
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// 监听关闭信号
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("注册 Ctrl+C 处理器失败");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("注册 SIGTERM 处理器失败")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}

/// 存活探针：服务进程正常即返回 ok
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "stagebook-booking-service"
    }))
}

/// 就绪探针：检查数据库连接是否可用
async fn readiness_check(db: Database) -> Json<serde_json::Value> {
    let db_ok = db.health_check().await.is_ok();

    Json(serde_json::json!({
        "status": if db_ok { "ok" } else { "degraded" },
        "service": "stagebook-booking-service",
        "checks": {
            "database": if db_ok { "ok" } else { "fail" }
        }
    }))
}
