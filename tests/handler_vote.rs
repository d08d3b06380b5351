mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::{Router, routing::post};
use axum_test::TestServer;
use tower::ServiceExt;
use visit_counter::domain::counter;
use visit_counter::web::handlers::vote_handler;

fn vote_app(state: visit_counter::AppState) -> Router {
    Router::new()
        .route("/vote", post(vote_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_vote_increments_and_redirects() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(vote_app(state)).unwrap();

    let response = server.post("/vote").await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");

    assert_eq!(store.value(counter::VOTES), 1);
    assert_eq!(store.value(counter::HITS), 0);
}

#[tokio::test]
async fn test_votes_accumulate() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(vote_app(state)).unwrap();

    for _ in 0..5 {
        let response = server.post("/vote").await;
        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    }

    assert_eq!(store.value(counter::VOTES), 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_votes_lose_no_updates() {
    let (state, store) = common::create_test_state();
    let app = vote_app(state);

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..32 {
        let app = app.clone();
        tasks.spawn(async move {
            let request = Request::builder()
                .method("POST")
                .uri("/vote")
                .body(Body::empty())
                .unwrap();

            let response = app.oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
        });
    }

    while let Some(task) = tasks.join_next().await {
        task.unwrap();
    }

    assert_eq!(store.value(counter::VOTES), 32);
}

#[tokio::test]
async fn test_vote_store_down_returns_500() {
    let state = common::create_failing_state();
    let server = TestServer::new(vote_app(state)).unwrap();

    let response = server.post("/vote").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "store_unavailable");
}
