//! 预订目录服务错误类型定义
//!
//! 两类错误：请求级错误（404/校验失败）直接映射为对应状态码的
//! 错误页载荷；存储级错误统一 500，细节只进日志不透给用户。

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::dto::ErrorPage;

/// 预订目录服务错误
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    // 资源不存在
    #[error("场馆不存在: {0}")]
    VenueNotFound(i64),
    #[error("艺人不存在: {0}")]
    ArtistNotFound(i64),
    #[error("页面不存在: {0}")]
    NotFound(String),

    // 校验错误
    #[error("参数验证失败: {0}")]
    Validation(String),

    // 系统错误
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
    #[error("内部错误: {0}")]
    Internal(String),
}

impl BookingError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::VenueNotFound(_) | Self::ArtistNotFound(_) | Self::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 系统级错误只返回通用错误页，详细信息仅记录日志，防止信息泄露
        let page = match &self {
            Self::Database(e) => {
                tracing::error!(error = %e, "数据库操作失败");
                ErrorPage::server_error()
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, "内部错误");
                ErrorPage::server_error()
            }
            Self::Validation(msg) => ErrorPage::new(status, "Bad Request", msg),
            _ => ErrorPage::not_found(),
        };

        (status, axum::Json(page)).into_response()
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, BookingError>;
