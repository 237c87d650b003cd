//! HTTP 请求处理器模块
//!
//! 每个路由一个 handler：读操作产出页面视图数据，写操作按
//! 提交-成功/失败-flash-重定向的契约执行。

pub mod artist;
pub mod home;
pub mod show;
pub mod venue;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use chrono::{DateTime, Utc};

use crate::error::BookingError;

/// 路径 id 提取器
///
/// 非数字 id 渲染 404 页面，而不是 `Path<i64>` 默认的 400 文本
pub struct EntityId(pub i64);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = BookingError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| BookingError::NotFound(e.to_string()))?;
        raw.parse().map(EntityId).map_err(|_| BookingError::NotFound(raw))
    }
}

/// 以请求时刻为界切分演出：`start_time >= now` 为今后，其余为过往
pub(crate) fn partition_by_time<T>(
    entries: Vec<T>,
    now: DateTime<Utc>,
    start_time: impl Fn(&T) -> DateTime<Utc>,
) -> (Vec<T>, Vec<T>) {
    entries.into_iter().partition(|e| start_time(e) >= now)
}
