//! Customer route handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use taphouse_core::CustomerDto;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Collection path for the customer resource.
pub const CUSTOMER_PATH: &str = "/api/v3/customer";

/// Query parameters for the customer listing.
#[derive(Debug, Deserialize)]
pub struct ListCustomersQuery {
    /// Exact-match name filter; resolves to at most one customer.
    pub name: Option<String>,
}

/// List customers; with `?name=` the result is the first match, as a list of
/// zero or one items.
pub async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<ListCustomersQuery>,
) -> Result<Json<Vec<CustomerDto>>> {
    let customers = match query.name {
        Some(name) => state
            .customers()
            .find_first_by_name(&name)
            .await?
            .into_iter()
            .collect(),
        None => state.customers().list().await?,
    };
    Ok(Json(customers))
}

/// Get a single customer by id.
pub async fn get_customer_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CustomerDto>> {
    state
        .customers()
        .get_by_id(&id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// Create a customer; responds 201 with a Location header for the new id.
pub async fn create_customer(
    State(state): State<AppState>,
    Json(dto): Json<CustomerDto>,
) -> Result<Response> {
    dto.validate().map_err(AppError::Validation)?;

    let saved = state.customers().create(&dto).await?;
    // The store assigns an id on save.
    let id = saved.id.unwrap_or_default();
    let location = format!("{CUSTOMER_PATH}/{id}");

    Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
}

/// Full replace of a customer's mutable fields.
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<CustomerDto>,
) -> Result<StatusCode> {
    dto.validate().map_err(AppError::Validation)?;

    state
        .customers()
        .update(&id, &dto)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Partial patch of the fields present in the body.
pub async fn patch_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<CustomerDto>,
) -> Result<StatusCode> {
    dto.validate_patch().map_err(AppError::Validation)?;

    state
        .customers()
        .patch(&id, &dto)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a customer; absent ids are reported before the delete is attempted.
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state
        .customers()
        .get_by_id(&id)
        .await?
        .ok_or(AppError::NotFound)?;

    state.customers().delete_by_id(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
