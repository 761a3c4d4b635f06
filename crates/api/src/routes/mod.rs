//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check (pings the store)
//!
//! # Beer
//! GET    /api/v3/beer           - List beers (?style= exact-match filter)
//! GET    /api/v3/beer/{id}      - Beer by id (404 if absent)
//! POST   /api/v3/beer           - Create (201 + Location, 400 on validation)
//! PUT    /api/v3/beer/{id}      - Full replace (204, 404, 400)
//! PATCH  /api/v3/beer/{id}      - Partial patch (204, 404, 400)
//! DELETE /api/v3/beer/{id}      - Delete (204, 404)
//!
//! # Customer
//! GET    /api/v3/customer       - List customers (?name= first-match filter)
//! GET    /api/v3/customer/{id}  - Customer by id (404 if absent)
//! POST   /api/v3/customer       - Create (201 + Location, 400 on validation)
//! PUT    /api/v3/customer/{id}  - Full replace (204, 404, 400)
//! PATCH  /api/v3/customer/{id}  - Partial patch (204, 404, 400)
//! DELETE /api/v3/customer/{id}  - Delete (204, 404)
//! ```

pub mod beers;
pub mod customers;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;

use crate::state::AppState;

/// Create the beer routes router.
pub fn beer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(beers::list_beers).post(beers::create_beer))
        .route(
            "/{id}",
            get(beers::get_beer_by_id)
                .put(beers::update_beer)
                .patch(beers::patch_beer)
                .delete(beers::delete_beer),
        )
}

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/{id}",
            get(customers::get_customer_by_id)
                .put(customers::update_customer)
                .patch(customers::patch_customer)
                .delete(customers::delete_customer),
        )
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .nest(beers::BEER_PATH, beer_routes())
        .nest(customers::CUSTOMER_PATH, customer_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies store connectivity before returning OK.
/// Returns 503 Service Unavailable if the store is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.beers().count().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
