use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::draft::{DraftError, PostDraft};
use crate::feed::{local_events, CommunityFilter, FilterCriteria, PostTypeFilter, SortKey};
use crate::gamification::{followers_preview, summarize};
use crate::model::{Author, Post};

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(health))
        .route("/api/feed", get(api_feed))
        .route("/api/events/local", get(api_local_events))
        .route("/api/users/:id/progress", get(api_user_progress))
        .route("/api/users/:id/followers", get(api_user_followers))
        .route("/api/posts", post(api_create_post))
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Serialize)]
struct ApiError<'a> {
    error: &'a str,
    message: String,
}

fn not_found(what: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError {
            error: "not_found",
            message: format!("{what} not found"),
        }),
    )
        .into_response()
}

// ========== Feed ==========

#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
    search: Option<String>,
    community: Option<String>,
    post_type: Option<String>,
    sort_by: Option<String>,
    page: Option<usize>,
    per_page: Option<usize>,
}

impl FeedParams {
    fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        if let Some(search) = &self.search {
            criteria = criteria.with_search(search.as_str());
        }
        if let Some(community) = &self.community {
            criteria = criteria.with_community(CommunityFilter::parse(community));
        }
        if let Some(post_type) = &self.post_type {
            criteria = criteria.with_post_type(PostTypeFilter::parse(post_type));
        }
        if let Some(sort_by) = &self.sort_by {
            criteria = criteria.with_sort(SortKey::parse(sort_by));
        }
        criteria
    }
}

#[derive(Debug, Serialize)]
pub struct FeedPage<'a> {
    data: Vec<&'a Post>,
    page: usize,
    per_page: usize,
    total: usize,
    active_filters: usize,
    sort_by: SortKey,
}

async fn api_feed(State(state): State<AppState>, Query(params): Query<FeedParams>) -> Response {
    let criteria = params.criteria();
    let page = params.page.unwrap_or(1).max(1);
    let per_page = state.config.page_size(params.per_page);
    let offset = (page - 1).saturating_mul(per_page);

    let data = state.data.read().await;
    let visible = state.composer.compose(&data.posts, &criteria);
    let total = visible.len();

    Json(FeedPage {
        data: visible.into_iter().skip(offset).take(per_page).collect(),
        page,
        per_page,
        total,
        active_filters: criteria.active_filter_count(),
        sort_by: criteria.sort_by,
    })
    .into_response()
}

async fn api_local_events(State(state): State<AppState>) -> Response {
    let data = state.data.read().await;
    Json(local_events(&data.posts, state.config.local_events_limit)).into_response()
}

// ========== Users ==========

async fn api_user_progress(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let data = state.data.read().await;
    let Some(user) = data.user(&id) else {
        return not_found("User");
    };

    let summary = summarize(
        user,
        &data.users,
        &data.posts,
        Utc::now().date_naive(),
        &state.config.gamification,
    );
    Json(summary).into_response()
}

async fn api_user_followers(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let data = state.data.read().await;
    let Some(user) = data.user(&id) else {
        return not_found("User");
    };

    Json(followers_preview(user, &data.users, &state.config.gamification)).into_response()
}

// ========== Posts ==========

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    author_id: String,
    #[serde(default)]
    draft: PostDraft,
}

async fn api_create_post(
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> Response {
    let mut data = state.data.write().await;
    let Some(user) = data.user(&request.author_id) else {
        return not_found("User");
    };
    let author = Author {
        id: user.id.clone(),
        name: user.full_name.clone(),
        avatar_url: user.avatar_url.clone(),
    };

    let draft = request.draft;
    if let Err(e) = draft.validate() {
        tracing::warn!(author_id = %request.author_id, error = %e, "Rejected post draft");
        return draft_rejected(&e);
    }

    let post = match draft.into_post(author, state.allocate_post_id(), Utc::now()) {
        Ok(post) => post,
        Err(e) => return draft_rejected(&e),
    };

    tracing::info!(post_id = %post.id, community = %post.community, "Published post");
    data.posts.insert(0, post.clone());
    (StatusCode::CREATED, Json(post)).into_response()
}

fn draft_rejected(e: &DraftError) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiError {
            error: e.code(),
            message: e.to_string(),
        }),
    )
        .into_response()
}
