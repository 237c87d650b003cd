//! 场馆/艺人/演出预订目录服务
//!
//! 浏览和搜索场馆与艺人，查看其今后/过往演出，通过 Web 表单
//! 创建和编辑条目。
//!
//! ## 模块结构
//!
//! - `models`: 三个实体与联表查询行
//! - `repository`: 数据访问层，所有读写的唯一入口
//! - `dto`: 表单请求与页面视图数据
//! - `handlers`: HTTP 请求处理器，每个路由一个
//! - `flash`: 一次性提示消息
//! - `error`: 错误类型定义
//! - `routes`: 路由配置
//! - `state`: 应用状态
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 存储：PostgreSQL（sqlx）
//! - 数据验证：validator

pub mod dto;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod state;

pub use error::{BookingError, Result};
pub use models::{Area, Artist, Show, Venue};
pub use state::AppState;
