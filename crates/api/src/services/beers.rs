//! Beer service: repository queries mapped to wire DTOs.

use std::sync::Arc;

use chrono::Utc;

use taphouse_core::{Beer, BeerDto};

use super::parse_id;
use crate::db::{BeerRepository, RepositoryError};

/// Orchestrates the beer repository and the entity/DTO mappers.
#[derive(Clone)]
pub struct BeerService {
    repository: Arc<dyn BeerRepository>,
}

impl BeerService {
    /// Create a new service over `repository`.
    #[must_use]
    pub fn new(repository: Arc<dyn BeerRepository>) -> Self {
        Self { repository }
    }

    /// Every stored beer in wire form.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store call fails.
    pub async fn list(&self) -> Result<Vec<BeerDto>, RepositoryError> {
        let beers = self.repository.find_all().await?;
        Ok(beers.iter().map(Beer::to_dto).collect())
    }

    /// Single beer by id, absent if no document has that id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store call fails.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<BeerDto>, RepositoryError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        Ok(self.repository.find_by_id(id).await?.map(|b| b.to_dto()))
    }

    /// First beer whose name equals `name`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store call fails.
    pub async fn find_first_by_name(&self, name: &str) -> Result<Option<BeerDto>, RepositoryError> {
        Ok(self
            .repository
            .find_first_by_name(name)
            .await?
            .map(|b| b.to_dto()))
    }

    /// Every beer whose style equals `style`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store call fails.
    pub async fn find_by_style(&self, style: &str) -> Result<Vec<BeerDto>, RepositoryError> {
        let beers = self.repository.find_by_style(style).await?;
        Ok(beers.iter().map(Beer::to_dto).collect())
    }

    /// Persist a new beer, ignoring any id in `dto`; returns the stored form
    /// with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store call fails.
    pub async fn create(&self, dto: &BeerDto) -> Result<BeerDto, RepositoryError> {
        let beer = Beer::from_new_dto(dto, Utc::now());
        let saved = self.repository.save(beer).await?;
        Ok(saved.to_dto())
    }

    /// Full replace of the beer's mutable fields; `None` if the id is absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store call fails.
    pub async fn update(&self, id: &str, dto: &BeerDto) -> Result<Option<BeerDto>, RepositoryError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let Some(mut beer) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };
        beer.apply_update(dto, Utc::now());
        let saved = self.repository.save(beer).await?;
        Ok(Some(saved.to_dto()))
    }

    /// Partial patch of the fields present in `dto`; `None` if the id is
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store call fails.
    pub async fn patch(&self, id: &str, dto: &BeerDto) -> Result<Option<BeerDto>, RepositoryError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let Some(mut beer) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };
        beer.apply_patch(dto, Utc::now());
        let saved = self.repository.save(beer).await?;
        Ok(Some(saved.to_dto()))
    }

    /// Remove the beer; succeeds as a no-op when the id is absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store call fails.
    pub async fn delete_by_id(&self, id: &str) -> Result<(), RepositoryError> {
        let Some(id) = parse_id(id) else {
            return Ok(());
        };
        self.repository.delete_by_id(id).await
    }

    /// Number of stored beers; used by the readiness probe.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store call fails.
    pub async fn count(&self) -> Result<u64, RepositoryError> {
        self.repository.count().await
    }
}
