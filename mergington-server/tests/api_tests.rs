//! # HTTP API Tests
//!
//! Drives the router in-process and checks status codes, bodies and the
//! registry state behind them.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use mergington_server::{config::DEFAULT_STATIC_DIR, router, ActivityRegistry, AppState};
use serde_json::Value;
use tower::ServiceExt;

const CHESS_CLUB: &str = "Chess Club";
const TEST_EMAIL: &str = "testuser@example.com";

fn setup_app() -> (Router, ActivityRegistry) {
    let registry = ActivityRegistry::with_default_catalog();
    let state = Arc::new(AppState::new(registry.clone(), None));
    (router(state, DEFAULT_STATIC_DIR), registry)
}

fn activity_uri(activity: &str, action: &str, email: &str) -> String {
    format!(
        "/activities/{}/{}?email={}",
        activity.replace(' ', "%20"),
        action,
        email.replace('@', "%40")
    )
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_get_activities() {
    let (app, registry) = setup_app();

    let (status, body) = send(&app, Method::GET, "/activities").await;
    assert_eq!(status, StatusCode::OK);

    let activities = body.as_object().expect("activities should be a JSON object");
    assert!(activities.contains_key(CHESS_CLUB));
    for name in registry.get_all().await.keys() {
        assert!(activities.contains_key(name), "missing {}", name);
    }

    let chess = &activities[CHESS_CLUB];
    assert_eq!(chess["max_participants"], 12);
    assert_eq!(chess["schedule"], "Fridays, 3:30 PM - 5:00 PM");
    assert!(chess["participants"]
        .as_array()
        .unwrap()
        .contains(&Value::from("michael@mergington.edu")));
}

#[tokio::test]
async fn test_signup_and_unregister() {
    let (app, registry) = setup_app();
    let signup = activity_uri(CHESS_CLUB, "signup", TEST_EMAIL);
    let unregister = activity_uri(CHESS_CLUB, "participants", TEST_EMAIL);

    // Signup should succeed
    let (status, body) = send(&app, Method::POST, &signup).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Signed up testuser@example.com for Chess Club");
    assert!(registry.contains_participant(CHESS_CLUB, TEST_EMAIL).await.unwrap());

    // Duplicate signup should fail without duplicating the entry
    let (status, body) = send(&app, Method::POST, &signup).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Student is already signed up");
    let chess = registry.get(CHESS_CLUB).await.unwrap();
    assert_eq!(chess.participants.iter().filter(|p| *p == TEST_EMAIL).count(), 1);

    // Unregister should succeed
    let (status, body) = send(&app, Method::DELETE, &unregister).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Unregistered testuser@example.com from Chess Club");
    assert!(!registry.contains_participant(CHESS_CLUB, TEST_EMAIL).await.unwrap());

    // Unregistering again should return 404
    let before = registry.get(CHESS_CLUB).await.unwrap();
    let (status, body) = send(&app, Method::DELETE, &unregister).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Participant not found");
    assert_eq!(registry.get(CHESS_CLUB).await.unwrap(), before);
}

#[tokio::test]
async fn test_signup_appends_in_order() {
    let (app, registry) = setup_app();

    let (status, _) = send(&app, Method::POST, &activity_uri(CHESS_CLUB, "signup", TEST_EMAIL)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/activities").await;
    let participants = body[CHESS_CLUB]["participants"].as_array().unwrap().clone();
    assert_eq!(participants.last(), Some(&Value::from(TEST_EMAIL)));
    assert_eq!(
        registry.get(CHESS_CLUB).await.unwrap().participants.len(),
        participants.len()
    );
}

#[tokio::test]
async fn test_unknown_activity_returns_404() {
    let (app, registry) = setup_app();
    let before = registry.get_all().await;

    let (status, body) = send(&app, Method::POST, &activity_uri("Underwater Basket Weaving", "signup", TEST_EMAIL)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");

    let (status, body) = send(&app, Method::DELETE, &activity_uri("Underwater Basket Weaving", "participants", TEST_EMAIL)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");

    assert_eq!(registry.get_all().await, before);
}

#[tokio::test]
async fn test_activity_names_are_case_sensitive() {
    let (app, _registry) = setup_app();

    let (status, _) = send(&app, Method::POST, &activity_uri("chess club", "signup", TEST_EMAIL)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_existing_default_participant() {
    let (app, registry) = setup_app();

    let (status, _) = send(&app, Method::DELETE, &activity_uri(CHESS_CLUB, "participants", "michael@mergington.edu")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        registry.get(CHESS_CLUB).await.unwrap().participants,
        vec!["daniel@mergington.edu"]
    );
}

#[tokio::test]
async fn test_missing_email_is_rejected() {
    let (app, registry) = setup_app();
    let before = registry.get(CHESS_CLUB).await.unwrap();

    let (status, _) = send(&app, Method::POST, "/activities/Chess%20Club/signup").await;
    assert!(status.is_client_error());
    assert_eq!(registry.get(CHESS_CLUB).await.unwrap(), before);
}

#[tokio::test]
async fn test_root_redirects_to_front_end() {
    let (app, _registry) = setup_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/static/index.html"
    );
}

#[tokio::test]
async fn test_static_front_end_is_served() {
    let (app, _registry) = setup_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/static/index.html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Mergington High School"));
    assert!(html.contains("app.js"));
}

#[tokio::test]
async fn test_health_check() {
    let (app, _registry) = setup_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_routers_do_not_share_state() {
    let (first, first_registry) = setup_app();
    let (_second, second_registry) = setup_app();

    let (status, _) = send(&first, Method::POST, &activity_uri(CHESS_CLUB, "signup", TEST_EMAIL)).await;
    assert_eq!(status, StatusCode::OK);

    assert!(first_registry.contains_participant(CHESS_CLUB, TEST_EMAIL).await.unwrap());
    assert!(!second_registry.contains_participant(CHESS_CLUB, TEST_EMAIL).await.unwrap());
}
