//! 演出路由处理器
//!
//! 演出只有列表和创建；悬空的 venue_id/artist_id 由外键约束
//! 拦截，以失败 flash 的形式反馈。

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::{CookieJar, Form};
use tracing::error;
use validator::Validate;

use crate::dto::{Page, ShowForm, ShowFormPage, ShowsPage, aggregate_errors};
use crate::error::{BookingError, Result};
use crate::flash;
use crate::state::AppState;

/// 演出列表，联场馆名和艺人名/头像
///
/// GET /shows
pub async fn list_shows(State(state): State<AppState>, jar: CookieJar) -> Result<Response> {
    let shows = state.shows.list().await?;

    let (jar, pending) = flash::take(jar);
    Ok((jar, Json(Page::new(pending, ShowsPage { shows }))).into_response())
}

/// 空的演出创建表单
///
/// GET /shows/create
pub async fn create_show_form(jar: CookieJar) -> Response {
    let (jar, pending) = flash::take(jar);
    let page = ShowFormPage {
        form: ShowForm::default(),
    };
    (jar, Json(Page::new(pending, page))).into_response()
}

/// 演出创建提交
///
/// POST /shows/create
pub async fn create_show_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ShowForm>,
) -> Result<Response> {
    if let Err(errors) = form.validate() {
        let message = format!("Validation error occured: {}", aggregate_errors(&errors));
        let page = ShowFormPage {
            form: ShowForm::default(),
        };
        return Ok(Json(Page::new(Some(message), page)).into_response());
    }

    // validate() 已确认字段可转换
    let new_show = form
        .into_new_show()
        .ok_or_else(|| BookingError::Internal("validated show form failed to convert".into()))?;

    let jar = match state.shows.create(&new_show).await {
        Ok(_) => flash::queue(jar, "Show was successfully listed!"),
        Err(e) => {
            error!(
                error = %e,
                venue_id = new_show.venue_id,
                artist_id = new_show.artist_id,
                "Failed to create show"
            );
            flash::queue(jar, "Error occured: Failed to create show.")
        }
    };

    Ok((jar, Redirect::to("/")).into_response())
}
