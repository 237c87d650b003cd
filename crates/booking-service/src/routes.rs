//! 路由配置模块
//!
//! 定义所有页面端点的路由映射；未匹配的路径落入 404 页面

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{handlers, state::AppState};

/// 场馆相关路由
fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(handlers::venue::list_venues))
        .route("/venues/search", post(handlers::venue::search_venues))
        .route(
            "/venues/create",
            get(handlers::venue::create_venue_form).post(handlers::venue::create_venue_submission),
        )
        .route("/venues/{id}", get(handlers::venue::show_venue))
        .route("/venues/{id}", delete(handlers::venue::delete_venue))
        .route(
            "/venues/{id}/edit",
            get(handlers::venue::edit_venue_form).post(handlers::venue::edit_venue_submission),
        )
}

/// 艺人相关路由
fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(handlers::artist::list_artists))
        .route("/artists/search", post(handlers::artist::search_artists))
        .route(
            "/artists/create",
            get(handlers::artist::create_artist_form)
                .post(handlers::artist::create_artist_submission),
        )
        .route("/artists/{id}", get(handlers::artist::show_artist))
        .route("/artists/{id}", delete(handlers::artist::delete_artist))
        .route(
            "/artists/{id}/edit",
            get(handlers::artist::edit_artist_form).post(handlers::artist::edit_artist_submission),
        )
}

/// 演出相关路由
fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(handlers::show::list_shows))
        .route(
            "/shows/create",
            get(handlers::show::create_show_form).post(handlers::show::create_show_submission),
        )
}

/// 构建完整路由表
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::index))
        .merge(venue_routes())
        .merge(artist_routes())
        .merge(show_routes())
        .fallback(handlers::home::not_found)
        .with_state(state)
}
