//! Storage access for the `beer` and `customer` collections.
//!
//! The repository traits are the seam between the services and the store:
//! each operation is a pass-through query returning zero-or-one or
//! zero-or-many documents. The Mongo-backed implementations live in
//! [`beers`] and [`customers`]; in-memory implementations for tests live in
//! [`memory`] behind the `test-support` feature.
//!
//! The store client is built once at startup from configuration and handed
//! to the repositories explicitly; there is no ambient global client.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::{Client, Database};
use secrecy::ExposeSecret;
use thiserror::Error;

use taphouse_core::{Beer, Customer};

use crate::config::ApiConfig;

pub mod beers;
pub mod customers;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;

pub use beers::MongoBeerRepository;
pub use customers::MongoCustomerRepository;

/// Name of the beer collection.
pub const BEER_COLLECTION: &str = "beer";

/// Name of the customer collection.
pub const CUSTOMER_COLLECTION: &str = "customer";

/// Errors surfaced by the repository layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store call failed or timed out.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// The store returned data violating a repository invariant.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Connect to the configured MongoDB deployment and select the database.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the connection string is invalid.
pub async fn connect(config: &ApiConfig) -> Result<Database, RepositoryError> {
    let client = Client::with_uri_str(config.mongo_url.expose_secret()).await?;
    Ok(client.database(&config.mongo_database))
}

/// Storage operations for beers.
#[async_trait]
pub trait BeerRepository: Send + Sync {
    /// All beer documents; no pagination, no ordering guarantee.
    async fn find_all(&self) -> Result<Vec<Beer>, RepositoryError>;

    /// Zero-or-one document keyed by id.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Beer>, RepositoryError>;

    /// At most one document whose name equals `name`; arbitrary tie-break.
    async fn find_first_by_name(&self, name: &str) -> Result<Option<Beer>, RepositoryError>;

    /// Every document whose style equals `style`.
    async fn find_by_style(&self, style: &str) -> Result<Vec<Beer>, RepositoryError>;

    /// Upsert; assigns an id if absent. Returns the persisted document.
    async fn save(&self, beer: Beer) -> Result<Beer, RepositoryError>;

    /// Remove the document; no error if absent.
    async fn delete_by_id(&self, id: ObjectId) -> Result<(), RepositoryError>;

    /// Clear the collection.
    async fn delete_all(&self) -> Result<(), RepositoryError>;

    /// Number of documents in the collection.
    async fn count(&self) -> Result<u64, RepositoryError>;
}

/// Storage operations for customers.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// All customer documents; no pagination, no ordering guarantee.
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError>;

    /// Zero-or-one document keyed by id.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Customer>, RepositoryError>;

    /// At most one document whose name equals `name`; arbitrary tie-break.
    async fn find_first_by_name(&self, name: &str) -> Result<Option<Customer>, RepositoryError>;

    /// Upsert; assigns an id if absent. Returns the persisted document.
    async fn save(&self, customer: Customer) -> Result<Customer, RepositoryError>;

    /// Remove the document; no error if absent.
    async fn delete_by_id(&self, id: ObjectId) -> Result<(), RepositoryError>;

    /// Clear the collection.
    async fn delete_all(&self) -> Result<(), RepositoryError>;

    /// Number of documents in the collection.
    async fn count(&self) -> Result<u64, RepositoryError>;
}
