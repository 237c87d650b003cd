//! 艺人路由处理器
//!
//! 与场馆路由镜像：列表不分组，其余契约一致。

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::{CookieJar, Form};
use chrono::Utc;
use tracing::error;
use validator::Validate;

use super::{EntityId, partition_by_time};
use crate::dto::{
    ArtistDetail, ArtistForm, ArtistFormPage, ArtistsPage, Page, SearchForm, SearchResults,
    aggregate_errors,
};
use crate::error::{BookingError, Result};
use crate::flash;
use crate::state::AppState;

/// 艺人列表，不过滤
///
/// GET /artists
pub async fn list_artists(State(state): State<AppState>, jar: CookieJar) -> Result<Response> {
    let artists = state.artists.list().await?;

    let (jar, pending) = flash::take(jar);
    Ok((jar, Json(Page::new(pending, ArtistsPage { artists }))).into_response())
}

/// 艺人名称子串搜索
///
/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SearchForm>,
) -> Result<Response> {
    let term = form.search_term.trim().to_string();
    let results = state.artists.search(&term).await?;

    let (jar, pending) = flash::take(jar);
    Ok((
        jar,
        Json(Page::new(pending, SearchResults::new(results, term))),
    )
        .into_response())
}

/// 艺人详情，演出按当前时间切分为今后/过往
///
/// GET /artists/{id}
pub async fn show_artist(
    State(state): State<AppState>,
    jar: CookieJar,
    EntityId(artist_id): EntityId,
) -> Result<Response> {
    let artist = state
        .artists
        .get(artist_id)
        .await?
        .ok_or(BookingError::ArtistNotFound(artist_id))?;

    let shows = state.shows.list_for_artist(artist_id).await?;
    let (upcoming_shows, past_shows) = partition_by_time(shows, Utc::now(), |s| s.start_time);

    let detail = ArtistDetail {
        artist,
        upcoming_shows_count: upcoming_shows.len(),
        upcoming_shows,
        past_shows_count: past_shows.len(),
        past_shows,
    };

    let (jar, pending) = flash::take(jar);
    Ok((jar, Json(Page::new(pending, detail))).into_response())
}

/// 空的艺人创建表单
///
/// GET /artists/create
pub async fn create_artist_form(jar: CookieJar) -> Response {
    let (jar, pending) = flash::take(jar);
    let page = ArtistFormPage {
        form: ArtistForm::default(),
        artist: None,
    };
    (jar, Json(Page::new(pending, page))).into_response()
}

/// 艺人创建提交
///
/// POST /artists/create
pub async fn create_artist_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ArtistForm>,
) -> Result<Response> {
    if let Err(errors) = form.validate() {
        let message = format!("Validation error occured: {}", aggregate_errors(&errors));
        let page = ArtistFormPage {
            form: ArtistForm::default(),
            artist: None,
        };
        return Ok(Json(Page::new(Some(message), page)).into_response());
    }

    let artist_name = form.name.clone();
    let jar = match state.artists.create(&form.into_fields()).await {
        Ok(_) => flash::queue(
            jar,
            format!("Artist '{artist_name}' was successfully listed!"),
        ),
        Err(e) => {
            error!(error = %e, name = %artist_name, "Failed to create artist");
            flash::queue(
                jar,
                format!("Error occured: Artist '{artist_name}' could not be listed."),
            )
        }
    };

    Ok((jar, Redirect::to("/")).into_response())
}

/// 删除艺人
///
/// DELETE /artists/{id}
pub async fn delete_artist(
    State(state): State<AppState>,
    jar: CookieJar,
    EntityId(artist_id): EntityId,
) -> Result<Response> {
    let Some(artist) = state.artists.get(artist_id).await? else {
        return Ok(Redirect::to("/404").into_response());
    };

    let jar = match state.artists.delete(artist_id).await {
        Ok(()) => flash::queue(
            jar,
            format!("Artist '{}' was successfully deleted!", artist.name),
        ),
        Err(e) => {
            error!(error = %e, artist_id, "Failed to delete artist");
            flash::queue(
                jar,
                format!(
                    "Error occured: Artist '{}' could not be deleted.",
                    artist.name
                ),
            )
        }
    };

    Ok((jar, Redirect::to("/")).into_response())
}

/// 预填的艺人编辑表单
///
/// GET /artists/{id}/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    jar: CookieJar,
    EntityId(artist_id): EntityId,
) -> Result<Response> {
    let artist = state
        .artists
        .get(artist_id)
        .await?
        .ok_or(BookingError::ArtistNotFound(artist_id))?;

    let page = ArtistFormPage {
        form: ArtistForm::from_artist(&artist),
        artist: Some(artist),
    };
    let (jar, pending) = flash::take(jar);
    Ok((jar, Json(Page::new(pending, page))).into_response())
}

/// 艺人编辑提交（同场馆：编辑不做校验）
///
/// POST /artists/{id}/edit
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    EntityId(artist_id): EntityId,
    Form(form): Form<ArtistForm>,
) -> Result<Response> {
    state
        .artists
        .get(artist_id)
        .await?
        .ok_or(BookingError::ArtistNotFound(artist_id))?;

    let artist_name = form.name.clone();
    let jar = match state.artists.update(artist_id, &form.into_fields()).await {
        Ok(artist) => flash::queue(
            jar,
            format!("Artist '{}' was successfully edited!", artist.name),
        ),
        Err(e) => {
            error!(error = %e, artist_id, "Failed to update artist");
            flash::queue(
                jar,
                format!("Error occured: Artist '{artist_name}' could not be edited."),
            )
        }
    };

    Ok((jar, Redirect::to(&format!("/artists/{artist_id}"))).into_response())
}
