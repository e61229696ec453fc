//! Integration tests for the REST routes.
//!
//! These tests drive the full router against the seeded in-memory
//! collaborators, so no network listener is needed.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::JwtConfig;
use domain::UserId;
use rest_demo_lib::config::ServerConfig;
use rest_demo_lib::identity::JwtIdentityProvider;
use rest_demo_lib::routes::create_router;
use rest_demo_lib::seed_collaborators;
use rest_demo_lib::state::AppState;

// =============================================================================
// Test Fixtures
// =============================================================================

const ADMIN: UserId = 1;
const WRITER: UserId = 2;
const READER: UserId = 3;

fn test_config() -> ServerConfig {
    ServerConfig {
        jwt: JwtConfig {
            secret: "test-secret-key-for-testing-only-32chars".to_string(),
            expiration_hours: 1,
        },
        ..ServerConfig::default()
    }
}

/// Router over the demo seed, plus a provider sharing its secret for minting tokens.
fn test_app() -> (Router, JwtIdentityProvider) {
    let config = test_config();
    let (content, identity) = seed_collaborators(&config).unwrap();
    let (_, issuer) = seed_collaborators(&config).unwrap();
    let state = AppState::new(Arc::new(content), Arc::new(identity));
    (create_router(state), issuer)
}

fn token_for(issuer: &JwtIdentityProvider, id: UserId) -> String {
    let account = issuer.directory().get(id).unwrap();
    issuer.issue_token(account).unwrap().access_token
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_as(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn ids(body: &Value) -> Vec<u64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|post| post["id"].as_u64().unwrap())
        .collect()
}

// =============================================================================
// Demo Routes
// =============================================================================

#[tokio::test]
async fn test_hello() {
    let (app, _) = test_app();
    let (status, body) = send(&app, get("/rest-demo/v1/hello")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Hello World"}));
}

#[tokio::test]
async fn test_greet_matching_name() {
    let (app, _) = test_app();
    let (status, body) = send(&app, get("/rest-demo/v1/greet/Jane-Doe")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hello Jane-Doe");
}

#[tokio::test]
async fn test_greet_pattern_mismatch_is_no_route() {
    let (app, _) = test_app();
    let (status, body) = send(&app, get("/rest-demo/v1/greet/bad_name!")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "rest_no_route");
    assert_eq!(body["data"]["status"], 404);
}

#[tokio::test]
async fn test_invoice_item_echoes_ids() {
    let (app, _) = test_app();
    let (status, body) = send(&app, get("/rest-demo/v1/invoice/7/item/3")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"invoice_id": "7", "item_id": "3"}));

    let (status, body) = send(&app, get("/rest-demo/v1/invoice/7/item/x")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "rest_no_route");
}

#[tokio::test]
async fn test_query_string_echo() {
    let (app, _) = test_app();
    let (status, body) = send(&app, get("/rest-demo/v1/qs?b=2&a=one")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"a": "one", "b": "2"}));

    let (_, body) = send(&app, get("/rest-demo/v1/qs")).await;
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_person_echoes_json_body() {
    let (app, _) = test_app();
    let request = post_json(
        "/rest-demo/v1/person",
        None,
        json!({"name": "Jane", "email": "jane@example.com"}),
    );
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"name": "Jane", "email": "jane@example.com"}));
}

#[tokio::test]
async fn test_person_echoes_form_body_and_missing_fields() {
    let (app, _) = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/rest-demo/v1/person")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("name=Jane"))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"name": "Jane", "email": null}));
}

#[tokio::test]
async fn test_person_malformed_body() {
    let (app, _) = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/rest-demo/v1/person")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "rest_invalid_body");
}

#[tokio::test]
async fn test_contact_not_implemented() {
    let (app, _) = test_app();
    let (status, body) = send(&app, get("/rest-demo/v1/contact")).await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body["code"], "rest_not_implemented");

    let (status, _) = send(&app, post_json("/rest-demo/v1/contact", None, json!({}))).await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
}

// =============================================================================
// Post Routes
// =============================================================================

#[tokio::test]
async fn test_list_posts_only_published_posts_newest_first() {
    let (app, _) = test_app();
    let (status, body) = send(&app, get("/rest-demo/v1/posts")).await;

    assert_eq!(status, StatusCode::OK);
    // Post 3 is a draft and post 4 is a page.
    assert_eq!(ids(&body), vec![2, 1]);
    assert_eq!(body[0]["status"], "publish");
    assert_eq!(body[0]["type"], "post");
}

#[tokio::test]
async fn test_get_post_by_id() {
    let (app, _) = test_app();
    let (status, body) = send(&app, get("/rest-demo/v1/posts/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["author"], ADMIN);
    assert_eq!(body["title"], "Hello world!");
}

#[tokio::test]
async fn test_get_missing_post() {
    let (app, _) = test_app();
    let (status, body) = send(&app, get("/rest-demo/v1/posts/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"code": "rest_post_not_found", "message": "Post Not Found", "data": {"status": 404}})
    );
}

#[tokio::test]
async fn test_get_post_non_numeric_id_is_no_route() {
    let (app, _) = test_app();
    let (status, body) = send(&app, get("/rest-demo/v1/posts/abc")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "rest_no_route");
}

#[tokio::test]
async fn test_create_post_as_author() {
    let (app, issuer) = test_app();
    let token = token_for(&issuer, WRITER);

    let request = post_json(
        "/rest-demo/v1/posts",
        Some(&token),
        json!({"title": "Fresh", "content": "Body"}),
    );
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Post Created");
    let id = body["id"].as_u64().unwrap();

    let (status, post) = send(&app, get(&format!("/rest-demo/v1/posts/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post["author"], WRITER);
    assert_eq!(post["title"], "Fresh");
    assert_eq!(post["status"], "publish");

    // Exactly one new item, listed first
    let (_, listed) = send(&app, get("/rest-demo/v1/posts")).await;
    assert_eq!(ids(&listed), vec![id, 2, 1]);
}

#[tokio::test]
async fn test_create_post_requires_publish_capability() {
    let (app, issuer) = test_app();
    let token = token_for(&issuer, READER);

    let request = post_json("/rest-demo/v1/posts", Some(&token), json!({"title": "Nope"}));
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "rest_forbidden");

    let (_, listed) = send(&app, get("/rest-demo/v1/posts")).await;
    assert_eq!(ids(&listed), vec![2, 1]);
}

#[tokio::test]
async fn test_create_post_anonymous() {
    let (app, _) = test_app();
    let request = post_json("/rest-demo/v1/posts", None, json!({"title": "Nope"}));
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "rest_forbidden");
}

#[tokio::test]
async fn test_my_posts_only_callers_posts() {
    let (app, issuer) = test_app();
    let token = token_for(&issuer, WRITER);

    let (status, body) = send(&app, get_as("/rest-demo/v1/my_posts", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![2]);

    let token = token_for(&issuer, READER);
    let (status, body) = send(&app, get_as("/rest-demo/v1/my_posts", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_my_posts_anonymous() {
    let (app, _) = test_app();
    let (status, _) = send(&app, get("/rest-demo/v1/my_posts")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// User Routes
// =============================================================================

#[tokio::test]
async fn test_me_anonymous() {
    let (app, _) = test_app();
    let (status, body) = send(&app, get("/rest-demo/v1/me")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "rest_unauthorized");
}

#[tokio::test]
async fn test_me_authenticated() {
    let (app, issuer) = test_app();
    let token = token_for(&issuer, ADMIN);
    let (status, body) = send(&app, get_as("/rest-demo/v1/me", &token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "admin"}));
}

#[tokio::test]
async fn test_check_permission() {
    let (app, issuer) = test_app();

    let token = token_for(&issuer, ADMIN);
    let (status, body) = send(&app, get_as("/rest-demo/v1/check_permission", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "You can Manage Options");

    let token = token_for(&issuer, WRITER);
    let (status, body) = send(&app, get_as("/rest-demo/v1/check_permission", &token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "rest_forbidden");

    let (status, body) = send(&app, get("/rest-demo/v1/check_permission")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "rest_forbidden");
}

// =============================================================================
// Identity and Routing
// =============================================================================

#[tokio::test]
async fn test_invalid_token_rejected_everywhere() {
    let (app, _) = test_app();
    let (status, body) = send(&app, get_as("/rest-demo/v1/hello", "not-a-token")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "rest_unauthorized");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    let (app, _) = test_app();
    let (_, other) = seed_collaborators(&ServerConfig::default()).unwrap();
    let token = token_for(&other, ADMIN);

    let (status, _) = send(&app, get_as("/rest-demo/v1/me", &token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_path() {
    let (app, _) = test_app();
    let (status, body) = send(&app, get("/rest-demo/v1/nothing-here")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "rest_no_route");
}

#[tokio::test]
async fn test_unregistered_method_is_no_route() {
    let (app, _) = test_app();

    for (method, uri) in [("DELETE", "/rest-demo/v1/hello"), ("PUT", "/rest-demo/v1/posts")] {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, uri);
        assert_eq!(
            body,
            json!({
                "code": "rest_no_route",
                "message": "No route was found matching the URL and request method",
                "data": {"status": 404}
            })
        );
    }
}

#[tokio::test]
async fn test_non_ascii_digits_are_no_route() {
    let (app, _) = test_app();

    let (status, body) = send(&app, get("/rest-demo/v1/invoice/%D9%A7/item/3")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "rest_no_route");

    let (status, body) = send(&app, get("/rest-demo/v1/posts/%D9%A3")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "rest_no_route");
}

#[tokio::test]
async fn test_undecodable_path_capture_is_no_route() {
    let (app, _) = test_app();
    let (status, body) = send(&app, get("/rest-demo/v1/greet/%FF")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "rest_no_route");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (app, _) = test_app();
    let (status, body) = send(&app, get("/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/rest-demo/v1/posts"].is_object());
}
