//! 共享基础库
//!
//! 为 stagebook 各服务提供配置加载、数据库连接池、日志初始化
//! 和统一的基础错误类型。

pub mod config;
pub mod database;
pub mod error;
pub mod logging;

pub mod test_utils;

pub use config::{AppConfig, DatabaseConfig, LoggingConfig, ServerConfig};
pub use database::Database;
pub use error::{Result, SharedError};
