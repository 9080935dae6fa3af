
use api::auth::Claims;
use axum::{
    body::Body,
    http::{
        Request, StatusCode,
        header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
    },
};
use chrono::Utc;
use common::config;
use db::models::user::{Model as UserModel, Role};
use db::test_utils::setup_test_db;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde_json::json;
use test_helpers::{create_user_with_token, get_json_body, make_app};
use tower::util::ServiceExt;

fn json_request(method: &str, uri: &str, payload: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_register_success() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let payload = json!({
        "name": "Alice",
        "email": "alice@example.com",
        "password": "securepassword123"
    });
    let response = app
        .oneshot(json_request("POST", "/register", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = get_json_body(response).await;
    assert_eq!(json["message"], "Registration successful");

    let user = &json["user"];
    assert_eq!(user["name"], "Alice");
    assert_eq!(user["email"], "alice@example.com");
    assert_eq!(user["role"], "user");
    assert!(user["id"].as_i64().is_some());

    // The stored hash must never appear in a response.
    assert!(user.get("password").is_none());
    assert!(user.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_with_explicit_admin_role() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let payload = json!({
        "name": "Root",
        "email": "root@example.com",
        "password": "securepassword123",
        "role": "admin"
    });
    let response = app
        .oneshot(json_request("POST", "/register", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = get_json_body(response).await;
    assert_eq!(json["user"]["role"], "admin");
}

#[tokio::test]
async fn test_register_invalid_email() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let payload = json!({
        "name": "Bob",
        "email": "not-an-email",
        "password": "securepassword123"
    });
    let response = app
        .oneshot(json_request("POST", "/register", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_json_body(response).await;
    assert!(json["error"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let db = setup_test_db().await;

    let payload = json!({
        "name": "First",
        "email": "dup@example.com",
        "password": "securepassword123"
    });

    let response = make_app(db.clone())
        .oneshot(json_request("POST", "/register", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = make_app(db.clone())
        .oneshot(json_request("POST", "/register", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_json_body(response).await;
    assert_eq!(json["error"], "Duplicate entry");
    assert!(
        json["details"]
            .as_str()
            .unwrap()
            .contains("already registered")
    );
}

#[tokio::test]
async fn test_login_success_sets_cookie_and_issues_hour_token() {
    let db = setup_test_db().await;
    UserModel::create(&db, "Carol", "carol@example.com", "correcthorse1", Role::User)
        .await
        .unwrap();

    let app = make_app(db.clone());
    let payload = json!({ "email": "carol@example.com", "password": "correcthorse1" });
    let response = app
        .oneshot(json_request("POST", "/login", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("login must set the session cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("HttpOnly"));

    let json = get_json_body(response).await;
    assert_eq!(json["user"]["email"], "carol@example.com");
    assert!(json["user"].get("password_hash").is_none());

    let token = json["token"].as_str().unwrap();
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config::jwt_secret().as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .expect("login token must verify");

    assert_eq!(data.claims.email, "carol@example.com");
    assert_eq!(data.claims.role, Role::User);

    // Expires one hour after issuance (default JWT_DURATION_MINUTES).
    let now = Utc::now().timestamp();
    let lifetime = data.claims.exp as i64 - now;
    assert!((3540..=3660).contains(&lifetime), "lifetime was {lifetime}s");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let db = setup_test_db().await;
    UserModel::create(&db, "Dave", "dave@example.com", "rightpassword", Role::User)
        .await
        .unwrap();

    let app = make_app(db.clone());
    let payload = json!({ "email": "dave@example.com", "password": "wrongpassword" });
    let response = app
        .oneshot(json_request("POST", "/login", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = get_json_body(response).await;
    assert_eq!(json["error"], "Invalid password");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let db = setup_test_db().await;

    let app = make_app(db.clone());
    let payload = json!({ "email": "ghost@example.com", "password": "whatever123" });
    let response = app
        .oneshot(json_request("POST", "/login", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = get_json_body(response).await;
    assert_eq!(json["error"], "User not found");
}

#[tokio::test]
async fn test_profile_without_token() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/profile")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = get_json_body(response).await;
    assert_eq!(json["error"], "No token provided");
}

#[tokio::test]
async fn test_profile_with_tampered_token() {
    let db = setup_test_db().await;
    let (_user, token) = create_user_with_token(&db, "Eve", "eve@example.com", Role::User).await;

    // Flip the last signature character.
    let mut tampered = token.clone();
    let last = if tampered.ends_with('a') { 'b' } else { 'a' };
    tampered.pop();
    tampered.push(last);

    let app = make_app(db.clone());
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/profile")
                .header(COOKIE, format!("token={tampered}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_with_expired_token() {
    let db = setup_test_db().await;
    let (user, _token) = create_user_with_token(&db, "Finn", "finn@example.com", Role::User).await;

    let expired_claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        role: user.role,
        exp: (Utc::now().timestamp() - 3600) as usize,
    };
    let expired = encode(
        &Header::default(),
        &expired_claims,
        &EncodingKey::from_secret(config::jwt_secret().as_bytes()),
    )
    .unwrap();

    let app = make_app(db.clone());
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/profile")
                .header(COOKIE, format!("token={expired}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_success() {
    let db = setup_test_db().await;
    let (user, token) = create_user_with_token(&db, "Grace", "grace@example.com", Role::User).await;

    let app = make_app(db.clone());
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/profile")
                .header(COOKIE, format!("token={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["id"].as_i64(), Some(user.id));
    assert_eq!(json["email"], "grace@example.com");
    assert!(json.get("password_hash").is_none());
}

#[tokio::test]
async fn test_profile_user_gone() {
    let db = setup_test_db().await;
    let (user, _token) = create_user_with_token(&db, "Henry", "henry@example.com", Role::User).await;

    // Token for an id that was never persisted.
    let (ghost_token, _expires_at) =
        api::auth::generate_jwt(user.id + 999, "henry@example.com", Role::User);

    let app = make_app(db.clone());
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/profile")
                .header(COOKIE, format!("token={ghost_token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let db = setup_test_db().await;

    for _ in 0..2 {
        let app = make_app(db.clone());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response
            .headers()
            .get(SET_COOKIE)
            .expect("logout must clear the session cookie")
            .to_str()
            .unwrap()
            .to_string();
        assert!(set_cookie.starts_with("token="));
        assert!(set_cookie.contains("Max-Age=0"));

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Logged out successfully");
    }
}
