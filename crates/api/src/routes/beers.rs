//! Beer route handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use taphouse_core::BeerDto;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Collection path for the beer resource.
pub const BEER_PATH: &str = "/api/v3/beer";

/// Query parameters for the beer listing.
#[derive(Debug, Deserialize)]
pub struct ListBeersQuery {
    /// Exact-match style filter.
    pub style: Option<String>,
}

/// List beers, optionally filtered by exact style.
pub async fn list_beers(
    State(state): State<AppState>,
    Query(query): Query<ListBeersQuery>,
) -> Result<Json<Vec<BeerDto>>> {
    let beers = match query.style {
        Some(style) => state.beers().find_by_style(&style).await?,
        None => state.beers().list().await?,
    };
    Ok(Json(beers))
}

/// Get a single beer by id.
pub async fn get_beer_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BeerDto>> {
    state
        .beers()
        .get_by_id(&id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// Create a beer; responds 201 with a Location header for the new id.
pub async fn create_beer(
    State(state): State<AppState>,
    Json(dto): Json<BeerDto>,
) -> Result<Response> {
    dto.validate().map_err(AppError::Validation)?;

    let saved = state.beers().create(&dto).await?;
    // The store assigns an id on save.
    let id = saved.id.unwrap_or_default();
    let location = format!("{BEER_PATH}/{id}");

    Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
}

/// Full replace of a beer's mutable fields.
pub async fn update_beer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<BeerDto>,
) -> Result<StatusCode> {
    dto.validate().map_err(AppError::Validation)?;

    state
        .beers()
        .update(&id, &dto)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Partial patch of the fields present in the body.
pub async fn patch_beer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<BeerDto>,
) -> Result<StatusCode> {
    dto.validate_patch().map_err(AppError::Validation)?;

    state
        .beers()
        .patch(&id, &dto)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a beer; absent ids are reported before the delete is attempted.
pub async fn delete_beer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state
        .beers()
        .get_by_id(&id)
        .await?
        .ok_or(AppError::NotFound)?;

    state.beers().delete_by_id(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
