//! 场馆路由处理器
//!
//! 列表/搜索/详情为读路由；创建/编辑/删除的契约是：成功或
//! 持久化失败都排队一条 flash 消息后重定向，校验失败则带着
//! 聚合错误消息重新渲染空表单。

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::{CookieJar, Form};
use chrono::Utc;
use tracing::error;
use validator::Validate;

use super::{EntityId, partition_by_time};
use crate::dto::{
    Page, SearchForm, SearchResults, VenueDetail, VenueForm, VenueFormPage, VenuesPage,
    aggregate_errors,
};
use crate::error::{BookingError, Result};
use crate::flash;
use crate::state::AppState;

/// 场馆列表，按 (city, state) 区域分组展示
///
/// GET /venues
pub async fn list_venues(State(state): State<AppState>, jar: CookieJar) -> Result<Response> {
    let areas = state.venues.distinct_areas().await?;
    let venues = state.venues.list().await?;

    let (jar, pending) = flash::take(jar);
    Ok((jar, Json(Page::new(pending, VenuesPage { areas, venues }))).into_response())
}

/// 场馆名称子串搜索
///
/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SearchForm>,
) -> Result<Response> {
    let term = form.search_term.trim().to_string();
    let results = state.venues.search(&term).await?;

    let (jar, pending) = flash::take(jar);
    Ok((
        jar,
        Json(Page::new(pending, SearchResults::new(results, term))),
    )
        .into_response())
}

/// 场馆详情，演出按当前时间切分为今后/过往
///
/// GET /venues/{id}
pub async fn show_venue(
    State(state): State<AppState>,
    jar: CookieJar,
    EntityId(venue_id): EntityId,
) -> Result<Response> {
    let venue = state
        .venues
        .get(venue_id)
        .await?
        .ok_or(BookingError::VenueNotFound(venue_id))?;

    let shows = state.shows.list_for_venue(venue_id).await?;
    let (upcoming_shows, past_shows) = partition_by_time(shows, Utc::now(), |s| s.start_time);

    let detail = VenueDetail {
        venue,
        upcoming_shows_count: upcoming_shows.len(),
        upcoming_shows,
        past_shows_count: past_shows.len(),
        past_shows,
    };

    let (jar, pending) = flash::take(jar);
    Ok((jar, Json(Page::new(pending, detail))).into_response())
}

/// 空的场馆创建表单
///
/// GET /venues/create
pub async fn create_venue_form(jar: CookieJar) -> Response {
    let (jar, pending) = flash::take(jar);
    let page = VenueFormPage {
        form: VenueForm::default(),
        venue: None,
    };
    (jar, Json(Page::new(pending, page))).into_response()
}

/// 场馆创建提交
///
/// POST /venues/create
///
/// 校验失败：聚合字段错误为一条 flash，重新渲染空表单，
/// 提交值不回显（见 DESIGN.md）。否则持久化并按结果
/// 排队成功/失败 flash，重定向首页。
pub async fn create_venue_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<VenueForm>,
) -> Result<Response> {
    if let Err(errors) = form.validate() {
        let message = format!("Validation Error occured: {}", aggregate_errors(&errors));
        let page = VenueFormPage {
            form: VenueForm::default(),
            venue: None,
        };
        return Ok(Json(Page::new(Some(message), page)).into_response());
    }

    let venue_name = form.name.clone();
    let jar = match state.venues.create(&form.into_fields()).await {
        Ok(_) => flash::queue(
            jar,
            format!("Venue '{venue_name}' was successfully listed!"),
        ),
        Err(e) => {
            error!(error = %e, name = %venue_name, "Failed to create venue");
            flash::queue(
                jar,
                format!("Error occured: Venue '{venue_name}' could not be listed."),
            )
        }
    };

    Ok((jar, Redirect::to("/")).into_response())
}

/// 删除场馆
///
/// DELETE /venues/{id}
///
/// 实体不存在时重定向到 404 页面，不排队 flash（见 DESIGN.md）
pub async fn delete_venue(
    State(state): State<AppState>,
    jar: CookieJar,
    EntityId(venue_id): EntityId,
) -> Result<Response> {
    let Some(venue) = state.venues.get(venue_id).await? else {
        return Ok(Redirect::to("/404").into_response());
    };

    let jar = match state.venues.delete(venue_id).await {
        Ok(()) => flash::queue(
            jar,
            format!("Venue '{}' was successfully deleted!", venue.name),
        ),
        Err(e) => {
            error!(error = %e, venue_id, "Failed to delete venue");
            flash::queue(
                jar,
                format!("Error occured: Venue '{}' could not be deleted.", venue.name),
            )
        }
    };

    Ok((jar, Redirect::to("/")).into_response())
}

/// 预填的场馆编辑表单
///
/// GET /venues/{id}/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    jar: CookieJar,
    EntityId(venue_id): EntityId,
) -> Result<Response> {
    let venue = state
        .venues
        .get(venue_id)
        .await?
        .ok_or(BookingError::VenueNotFound(venue_id))?;

    let page = VenueFormPage {
        form: VenueForm::from_venue(&venue),
        venue: Some(venue),
    };
    let (jar, pending) = flash::take(jar);
    Ok((jar, Json(Page::new(pending, page))).into_response())
}

/// 场馆编辑提交
///
/// POST /venues/{id}/edit
///
/// 与创建不同，编辑不做表单校验（见 DESIGN.md）；
/// 整体覆盖可编辑字段后重定向回详情页
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    EntityId(venue_id): EntityId,
    Form(form): Form<VenueForm>,
) -> Result<Response> {
    state
        .venues
        .get(venue_id)
        .await?
        .ok_or(BookingError::VenueNotFound(venue_id))?;

    let venue_name = form.name.clone();
    let jar = match state.venues.update(venue_id, &form.into_fields()).await {
        Ok(venue) => flash::queue(
            jar,
            format!("Venue '{}' was successfully edited!", venue.name),
        ),
        Err(e) => {
            error!(error = %e, venue_id, "Failed to update venue");
            flash::queue(
                jar,
                format!("Error occured: Venue '{venue_name}' could not be edited."),
            )
        }
    };

    Ok((jar, Redirect::to(&format!("/venues/{venue_id}"))).into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use chrono::{Duration, Utc};
    use tower::ServiceExt;

    use crate::models::{Venue, VenueShowEntry};
    use crate::repository::{MockArtistRepository, MockShowRepository, MockVenueRepository};
    use crate::routes::router;
    use crate::state::AppState;

    fn sample_venue(id: i64, name: &str) -> Venue {
        Venue {
            id,
            name: name.to_string(),
            city: "San Francisco".into(),
            state: "CA".into(),
            address: None,
            phone: None,
            image_link: None,
            facebook_link: None,
            genres: vec!["Jazz".into()],
            website_link: None,
            seeking_talent: true,
            seeking_description: None,
        }
    }

    fn state_with(venues: MockVenueRepository, shows: MockShowRepository) -> AppState {
        AppState::with_repositories(
            Arc::new(venues),
            Arc::new(MockArtistRepository::new()),
            Arc::new(shows),
        )
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Set-Cookie 里的 flash 值是百分号编码的，先解码再断言
    fn flash_value(response: &axum::response::Response) -> String {
        let raw = response.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .to_string();
        axum_extra::extract::cookie::Cookie::parse_encoded(raw)
            .unwrap()
            .value()
            .to_string()
    }

    #[tokio::test]
    async fn test_venue_detail_partitions_shows() {
        let now = Utc::now();
        let mut venues = MockVenueRepository::new();
        venues
            .expect_get()
            .returning(|id| Ok(Some(sample_venue(id, "The Fillmore"))));

        let mut shows = MockShowRepository::new();
        shows.expect_list_for_venue().returning(move |_| {
            Ok(vec![
                VenueShowEntry {
                    artist_id: 1,
                    artist_name: "Future Act".into(),
                    artist_image_link: None,
                    start_time: now + Duration::days(3),
                },
                VenueShowEntry {
                    artist_id: 2,
                    artist_name: "Past Act".into(),
                    artist_image_link: None,
                    start_time: now - Duration::days(3),
                },
            ])
        });

        let app = router(state_with(venues, shows));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/venues/5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let page = body_json(response).await;
        let data = &page["data"];
        assert_eq!(data["upcomingShowsCount"], 1);
        assert_eq!(data["upcomingShows"][0]["artistName"], "Future Act");
        assert_eq!(data["pastShowsCount"], 1);
        assert_eq!(data["pastShows"][0]["artistName"], "Past Act");
    }

    #[tokio::test]
    async fn test_venue_detail_missing_renders_404() {
        let mut venues = MockVenueRepository::new();
        venues.expect_get().returning(|_| Ok(None));

        let app = router(state_with(venues, MockShowRepository::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/venues/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_numeric_id_renders_404_page() {
        let app = router(state_with(
            MockVenueRepository::new(),
            MockShowRepository::new(),
        ));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/venues/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let page = body_json(response).await;
        assert_eq!(page["status"], 404);
    }

    #[tokio::test]
    async fn test_search_echoes_trimmed_term() {
        let mut venues = MockVenueRepository::new();
        venues
            .expect_search()
            .withf(|term| term == "Fillmore")
            .returning(|_| Ok(vec![sample_venue(1, "The Fillmore")]));

        let app = router(state_with(venues, MockShowRepository::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/venues/search")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("search_term=++Fillmore++"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let page = body_json(response).await;
        assert_eq!(page["data"]["searchTerm"], "Fillmore");
        assert_eq!(page["data"]["count"], 1);
    }

    #[tokio::test]
    async fn test_create_venue_success_flashes_and_redirects_home() {
        let mut venues = MockVenueRepository::new();
        venues
            .expect_create()
            .withf(|fields| fields.name == "The Fillmore" && fields.seeking_talent)
            .returning(|fields| {
                let mut venue = sample_venue(7, &fields.name);
                venue.seeking_talent = fields.seeking_talent;
                Ok(venue)
            });

        let app = router(state_with(venues, MockShowRepository::new()));
        let body = "name=The+Fillmore&city=SF&state=CA&genres=Jazz&seeking_talent=y";
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/venues/create")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert_eq!(
            flash_value(&response),
            "Venue 'The Fillmore' was successfully listed!"
        );
    }

    #[tokio::test]
    async fn test_create_venue_validation_failure_rerenders_empty_form() {
        // 校验失败不应触达仓储
        let app = router(state_with(
            MockVenueRepository::new(),
            MockShowRepository::new(),
        ));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/venues/create")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("name=&city=SF&state=California&genres=Jazz"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let page = body_json(response).await;
        let flash = page["flash"].as_str().unwrap();
        assert!(flash.starts_with("Validation Error occured:"));
        assert!(flash.contains("name"));
        assert!(flash.contains("state"));
        // 表单清空，提交值不回显
        assert_eq!(page["data"]["form"]["city"], "");
    }

    #[tokio::test]
    async fn test_create_venue_persistence_failure_flashes_error() {
        let mut venues = MockVenueRepository::new();
        venues
            .expect_create()
            .returning(|_| Err(crate::error::BookingError::Database(sqlx::Error::PoolClosed)));

        let app = router(state_with(venues, MockShowRepository::new()));
        let body = "name=The+Fillmore&city=SF&state=CA&genres=Jazz";
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/venues/create")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert_eq!(
            flash_value(&response),
            "Error occured: Venue 'The Fillmore' could not be listed."
        );
    }

    #[tokio::test]
    async fn test_delete_missing_venue_redirects_to_not_found() {
        let mut venues = MockVenueRepository::new();
        venues.expect_get().returning(|_| Ok(None));

        let app = router(state_with(venues, MockShowRepository::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/venues/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/404");
    }

    #[tokio::test]
    async fn test_delete_existing_venue_flashes_success() {
        let mut venues = MockVenueRepository::new();
        venues
            .expect_get()
            .returning(|id| Ok(Some(sample_venue(id, "The Fillmore"))));
        venues.expect_delete().returning(|_| Ok(()));

        let app = router(state_with(venues, MockShowRepository::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/venues/5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert_eq!(
            flash_value(&response),
            "Venue 'The Fillmore' was successfully deleted!"
        );
    }

    #[tokio::test]
    async fn test_edit_skips_validation_and_redirects_to_detail() {
        let mut venues = MockVenueRepository::new();
        venues
            .expect_get()
            .returning(|id| Ok(Some(sample_venue(id, "Old Name"))));
        // state 是非法的 3 字母值也照样持久化：编辑不做校验
        venues
            .expect_update()
            .withf(|_, fields| fields.state == "Cal")
            .returning(|id, fields| {
                let mut venue = sample_venue(id, &fields.name);
                venue.state = fields.state.clone();
                Ok(venue)
            });

        let app = router(state_with(venues, MockShowRepository::new()));
        let body = "name=New+Name&city=SF&state=Cal&genres=Jazz";
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/venues/5/edit")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/venues/5");
        assert_eq!(
            flash_value(&response),
            "Venue 'New Name' was successfully edited!"
        );
    }
}
