//! Integration tests for the beer resource.
//!
//! These drive the full router in process with in-memory repositories, so no
//! running MongoDB is required.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use taphouse_api::config::ApiConfig;
use taphouse_api::db::memory::{InMemoryBeerRepository, InMemoryCustomerRepository};
use taphouse_api::routes;
use taphouse_api::state::AppState;

fn test_app() -> Router {
    let state = AppState::new(
        ApiConfig::test_default(),
        Arc::new(InMemoryBeerRepository::default()),
        Arc::new(InMemoryCustomerRepository::default()),
    );
    routes::routes().with_state(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    app.clone().oneshot(request).await.expect("response")
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

fn galaxy_cat() -> Value {
    json!({
        "beerName": "Galaxy Cat",
        "beerStyle": "Pale Ale",
        "upc": "12356",
        "price": 12.99,
        "quantityOnHand": 122
    })
}

/// Create a beer and return the id from the Location header.
async fn create_beer(app: &Router, body: Value) -> String {
    let response = send(app, Method::POST, "/api/v3/beer", Some(body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .expect("ascii location");
    location
        .strip_prefix("/api/v3/beer/")
        .expect("location under the beer collection")
        .to_owned()
}

// ============================================================================
// Create & Read
// ============================================================================

#[tokio::test]
async fn create_then_get_returns_identical_fields() {
    let app = test_app();
    let id = create_beer(&app, galaxy_cat()).await;
    assert!(!id.is_empty());

    let response = send(&app, Method::GET, &format!("/api/v3/beer/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let beer = body_json(response).await;
    assert_eq!(beer["id"], id.as_str());
    assert_eq!(beer["beerName"], "Galaxy Cat");
    assert_eq!(beer["beerStyle"], "Pale Ale");
    assert_eq!(beer["upc"], "12356");
    assert_eq!(beer["price"], 12.99);
    assert_eq!(beer["quantityOnHand"], 122);
    assert!(beer["createdDate"].is_string());
    assert!(beer["lastModifiedDate"].is_string());
}

#[tokio::test]
async fn get_of_unknown_id_is_not_found() {
    let app = test_app();

    // A well-formed id that matches nothing, and one that can match nothing.
    for id in ["0123456789abcdef01234567", "not-an-id"] {
        let response = send(&app, Method::GET, &format!("/api/v3/beer/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn list_returns_every_created_beer() {
    let app = test_app();
    for name in ["Galaxy Cat", "Crank", "Sunshine City"] {
        create_beer(&app, json!({ "beerName": name })).await;
    }

    let response = send(&app, Method::GET, "/api/v3/beer", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let beers = body_json(response).await;
    let names: Vec<&str> = beers
        .as_array()
        .expect("list body")
        .iter()
        .map(|b| b["beerName"].as_str().expect("name"))
        .collect();
    assert_eq!(names.len(), 3);
    for name in ["Galaxy Cat", "Crank", "Sunshine City"] {
        assert!(names.contains(&name));
    }
}

#[tokio::test]
async fn list_filters_by_exact_style() {
    let app = test_app();
    create_beer(&app, galaxy_cat()).await;
    create_beer(
        &app,
        json!({ "beerName": "Sunshine City", "beerStyle": "IPA" }),
    )
    .await;

    let response = send(&app, Method::GET, "/api/v3/beer?style=IPA", None).await;
    let beers = body_json(response).await;
    let beers = beers.as_array().expect("list body");

    assert_eq!(beers.len(), 1);
    assert_eq!(beers[0]["beerName"], "Sunshine City");
}

// ============================================================================
// Update & Patch
// ============================================================================

#[tokio::test]
async fn update_overwrites_every_field_and_nulls_omissions() {
    let app = test_app();
    let id = create_beer(&app, galaxy_cat()).await;

    let response = send(
        &app,
        Method::PUT,
        &format!("/api/v3/beer/{id}"),
        Some(json!({ "beerName": "Crank" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let beer = body_json(send(&app, Method::GET, &format!("/api/v3/beer/{id}"), None).await).await;
    assert_eq!(beer["beerName"], "Crank");
    assert_eq!(beer["beerStyle"], Value::Null);
    assert_eq!(beer["upc"], Value::Null);
    assert_eq!(beer["price"], Value::Null);
    assert_eq!(beer["quantityOnHand"], Value::Null);
}

#[tokio::test]
async fn patch_overwrites_present_fields_and_preserves_the_rest() {
    let app = test_app();
    let id = create_beer(&app, galaxy_cat()).await;

    let response = send(
        &app,
        Method::PATCH,
        &format!("/api/v3/beer/{id}"),
        Some(json!({ "quantityOnHand": 100 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let beer = body_json(send(&app, Method::GET, &format!("/api/v3/beer/{id}"), None).await).await;
    assert_eq!(beer["quantityOnHand"], 100);
    assert_eq!(beer["beerName"], "Galaxy Cat");
    assert_eq!(beer["beerStyle"], "Pale Ale");
    assert_eq!(beer["price"], 12.99);
}

#[tokio::test]
async fn update_and_patch_of_unknown_id_are_not_found() {
    let app = test_app();

    let response = send(
        &app,
        Method::PUT,
        "/api/v3/beer/0123456789abcdef01234567",
        Some(galaxy_cat()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(
        &app,
        Method::PATCH,
        "/api/v3/beer/0123456789abcdef01234567",
        Some(json!({ "quantityOnHand": 1 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn delete_removes_the_beer_and_repeats_as_not_found() {
    let app = test_app();
    let id = create_beer(&app, galaxy_cat()).await;
    let uri = format!("/api/v3/beer/{id}");

    let response = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, Method::GET, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn invalid_create_is_rejected_with_every_violation_and_persists_nothing() {
    let app = test_app();

    let response = send(
        &app,
        Method::POST,
        "/api/v3/beer",
        Some(json!({
            "beerName": "x".repeat(300),
            "quantityOnHand": -5
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let message = body_text(response).await;
    assert!(message.contains("beerName"));
    assert!(message.contains("quantityOnHand"));

    let beers = body_json(send(&app, Method::GET, "/api/v3/beer", None).await).await;
    assert_eq!(beers.as_array().expect("list body").len(), 0);
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn health_endpoints_respond_ok() {
    let app = test_app();

    let response = send(&app, Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");

    let response = send(&app, Method::GET, "/health/ready", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}
