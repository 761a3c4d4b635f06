//! Customer service: repository queries mapped to wire DTOs.

use std::sync::Arc;

use chrono::Utc;

use taphouse_core::{Customer, CustomerDto};

use super::parse_id;
use crate::db::{CustomerRepository, RepositoryError};

/// Orchestrates the customer repository and the entity/DTO mappers.
#[derive(Clone)]
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    /// Create a new service over `repository`.
    #[must_use]
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// Every stored customer in wire form.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store call fails.
    pub async fn list(&self) -> Result<Vec<CustomerDto>, RepositoryError> {
        let customers = self.repository.find_all().await?;
        Ok(customers.iter().map(Customer::to_dto).collect())
    }

    /// Single customer by id, absent if no document has that id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store call fails.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<CustomerDto>, RepositoryError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        Ok(self.repository.find_by_id(id).await?.map(|c| c.to_dto()))
    }

    /// First customer whose name equals `name`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store call fails.
    pub async fn find_first_by_name(
        &self,
        name: &str,
    ) -> Result<Option<CustomerDto>, RepositoryError> {
        Ok(self
            .repository
            .find_first_by_name(name)
            .await?
            .map(|c| c.to_dto()))
    }

    /// Persist a new customer, ignoring any id in `dto`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store call fails.
    pub async fn create(&self, dto: &CustomerDto) -> Result<CustomerDto, RepositoryError> {
        let customer = Customer::from_new_dto(dto, Utc::now());
        let saved = self.repository.save(customer).await?;
        Ok(saved.to_dto())
    }

    /// Full replace of the customer's mutable fields; `None` if the id is
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store call fails.
    pub async fn update(
        &self,
        id: &str,
        dto: &CustomerDto,
    ) -> Result<Option<CustomerDto>, RepositoryError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let Some(mut customer) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };
        customer.apply_update(dto, Utc::now());
        let saved = self.repository.save(customer).await?;
        Ok(Some(saved.to_dto()))
    }

    /// Partial patch of the fields present in `dto`; `None` if the id is
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store call fails.
    pub async fn patch(
        &self,
        id: &str,
        dto: &CustomerDto,
    ) -> Result<Option<CustomerDto>, RepositoryError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let Some(mut customer) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };
        customer.apply_patch(dto, Utc::now());
        let saved = self.repository.save(customer).await?;
        Ok(Some(saved.to_dto()))
    }

    /// Remove the customer; succeeds as a no-op when the id is absent.
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
}
