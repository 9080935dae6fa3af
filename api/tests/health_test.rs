
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use db::test_utils::setup_test_db;
use test_helpers::make_app;
use tower::util::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let db = setup_test_db().await;
    let app = make_app(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
