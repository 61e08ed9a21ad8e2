//! Integration tests for web routes.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use community_feed::config::Config;
use community_feed::model::{Author, Community, EventDetails, Post, PostKind, UserProfile};
use community_feed::source::SeedData;
use community_feed::web::{self, create_app, AppState};
use serde_json::Value;
use tower::ServiceExt;

fn post(id: &str, community: &str, kind: PostKind, likes: u64, minutes: i64) -> Post {
    Post {
        id: id.to_string(),
        author: Author {
            id: "u1".to_string(),
            name: "রহিম উদ্দিন".to_string(),
            avatar_url: None,
        },
        content: format!("post {id}"),
        images: Vec::new(),
        community: Community::parse(community),
        kind,
        created_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes),
        likes,
        comments: Vec::new(),
    }
}

fn event() -> PostKind {
    PostKind::Event(EventDetails::default())
}

fn user(id: &str, trust: u32, followers: u32) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        full_name: format!("User {id}"),
        username: id.to_string(),
        avatar_url: None,
        bio: None,
        location: None,
        trust_score: trust,
        followers,
        following: 0,
        is_verified: false,
        joined_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        achievements: Vec::new(),
        activity_dates: Vec::new(),
    }
}

fn seed() -> SeedData {
    SeedData {
        posts: vec![
            post("1", "global", PostKind::Text, 10, 0),
            post("2", "ward-1", event(), 1, 10),
            post("3", "ward-2", event(), 5, 20),
            post("4", "global", event(), 7, 30),
            post("5", "ward-3", event(), 2, 40),
            post("6", "ward-4", event(), 0, 50),
        ],
        users: vec![user("u1", 85, 2), user("u2", 30, 0), user("u3", 60, 0)],
    }
}

fn create_test_app() -> Router {
    create_app(AppState::new(Config::default(), seed()))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

fn ids(page: &Value) -> Vec<String> {
    page["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = create_test_app()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"ok");
}

#[tokio::test]
async fn test_feed_defaults_to_recent() {
    let (status, page) = get_json(create_test_app(), "/api/feed").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&page), ["6", "5", "4", "3", "2", "1"]);
    assert_eq!(page["total"], 6);
    assert_eq!(page["page"], 1);
    assert_eq!(page["per_page"], 20);
    assert_eq!(page["active_filters"], 0);
    assert_eq!(page["sort_by"], "recent");
}

#[tokio::test]
async fn test_feed_filters_and_sorts() {
    let (status, page) = get_json(
        create_test_app(),
        "/api/feed?community=global&sort_by=most_liked",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&page), ["1", "4"]);
    assert_eq!(page["active_filters"], 2);
}

#[tokio::test]
async fn test_feed_unknown_sort_falls_back_to_recent() {
    let (status, page) = get_json(create_test_app(), "/api/feed?sort_by=bogus&post_type=all").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["sort_by"], "recent");
    assert_eq!(page["active_filters"], 0);
}

#[tokio::test]
async fn test_feed_pagination() {
    let (_, page) = get_json(create_test_app(), "/api/feed?per_page=4&page=2").await;

    assert_eq!(ids(&page), ["2", "1"]);
    assert_eq!(page["total"], 6);
    assert_eq!(page["per_page"], 4);

    let (_, capped) = get_json(create_test_app(), "/api/feed?per_page=5000").await;
    assert_eq!(capped["per_page"], 100);
}

#[tokio::test]
async fn test_local_events() {
    let (status, events) = get_json(create_test_app(), "/api/events/local").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = events
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["2", "3", "5"]);
}

#[tokio::test]
async fn test_user_progress() {
    let (status, summary) = get_json(create_test_app(), "/api/users/u3/progress").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["rank"], 2);
    assert_eq!(summary["level"]["level"], 4);
    assert_eq!(summary["weekly_progress"], 60);
}

#[tokio::test]
async fn test_unknown_user_is_404() {
    let (status, body) = get_json(create_test_app(), "/api/users/nobody/progress").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, _) = get_json(create_test_app(), "/api/users/nobody/followers").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_followers_preview() {
    let (status, followers) = get_json(create_test_app(), "/api/users/u1/followers").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = followers
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["u2", "u3"]);
}

#[tokio::test]
async fn test_create_post_prepends_to_feed() {
    let app = create_test_app();

    let (status, created) = post_json(
        app.clone(),
        "/api/posts",
        &serde_json::json!({
            "author_id": "u2",
            "draft": { "content": "  নতুন পোস্ট  ", "community": "ward-1" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["content"], "নতুন পোস্ট");
    assert_eq!(created["author"]["name"], "User u2");
    assert_eq!(created["likes"], 0);

    let (_, page) = get_json(app, "/api/feed?community=ward-1&sort_by=most_liked").await;
    let new_id = created["id"].as_str().unwrap().to_string();
    assert_eq!(ids(&page), ["2".to_string(), new_id]);
}

#[tokio::test]
async fn test_create_post_rejects_invalid_draft() {
    let (status, body) = post_json(
        create_test_app(),
        "/api/posts",
        &serde_json::json!({ "author_id": "u1", "draft": { "content": "   " } }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "empty_post");

    let images: Vec<Value> = (0..5)
        .map(|n| serde_json::json!({ "url": format!("https://img/{n}.jpg"), "size_bytes": 10 }))
        .collect();
    let (status, body) = post_json(
        create_test_app(),
        "/api/posts",
        &serde_json::json!({ "author_id": "u1", "draft": { "content": "x", "images": images } }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "too_many_images");
}

#[tokio::test]
async fn test_create_post_unknown_author() {
    let (status, _) = post_json(
        create_test_app(),
        "/api/posts",
        &serde_json::json!({ "author_id": "ghost", "draft": { "content": "hi" } }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rejected_drafts_do_not_consume_post_ids() {
    let app = create_test_app();

    for _ in 0..3 {
        let (status, _) = post_json(
            app.clone(),
            "/api/posts",
            &serde_json::json!({ "author_id": "u1", "draft": { "content": "" } }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    let (status, created) = post_json(
        app,
        "/api/posts",
        &serde_json::json!({ "author_id": "u1", "draft": { "content": "প্রথম পোস্ট" } }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], "local-1");
}

#[tokio::test]
async fn test_serve_fails_when_port_is_taken() {
    let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let config = Config {
        web_host: "127.0.0.1".to_string(),
        web_port: taken.local_addr().unwrap().port(),
        ..Config::default()
    };

    let result = web::serve(config, SeedData::default(), std::future::pending()).await;

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("Failed to bind web server"));
}

#[tokio::test]
async fn test_serve_returns_on_shutdown() {
    let config = Config {
        web_host: "127.0.0.1".to_string(),
        web_port: 0,
        ..Config::default()
    };

    web::serve(config, SeedData::default(), async {}).await.unwrap();
}
