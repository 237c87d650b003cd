//! 共享错误类型定义
//!
//! 基础设施层（配置、数据库）产生的错误统一收敛到 `SharedError`，
//! 业务错误由各服务自行定义并按需转换。

use thiserror::Error;

/// 基础设施错误
#[derive(Debug, Error)]
pub enum SharedError {
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("迁移错误: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),

    #[error("内部错误: {0}")]
    Internal(String),
}

/// 共享库 Result 类型别名
pub type Result<T> = std::result::Result<T, SharedError>;
