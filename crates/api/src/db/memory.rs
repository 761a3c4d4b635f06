//! In-memory repositories for tests.
//!
//! These mirror the observable behavior of the Mongo implementations: upsert
//! save with store-assigned ids, idempotent delete, exact-equality filters,
//! and no ordering guarantee on `find_all`.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use taphouse_core::{Beer, Customer};

use super::{BeerRepository, CustomerRepository, RepositoryError};

/// In-memory stand-in for the `beer` collection.
#[derive(Default)]
pub struct InMemoryBeerRepository {
    documents: Mutex<HashMap<ObjectId, Beer>>,
}

#[async_trait]
impl BeerRepository for InMemoryBeerRepository {
    async fn find_all(&self) -> Result<Vec<Beer>, RepositoryError> {
        Ok(self.documents.lock().expect("lock").values().cloned().collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Beer>, RepositoryError> {
        Ok(self.documents.lock().expect("lock").get(&id).cloned())
    }

    async fn find_first_by_name(&self, name: &str) -> Result<Option<Beer>, RepositoryError> {
        Ok(self
            .documents
            .lock()
            .expect("lock")
            .values()
            .find(|beer| beer.beer_name.as_deref() == Some(name))
            .cloned())
    }

    async fn find_by_style(&self, style: &str) -> Result<Vec<Beer>, RepositoryError> {
        Ok(self
            .documents
            .lock()
            .expect("lock")
            .values()
            .filter(|beer| beer.beer_style.as_deref() == Some(style))
            .cloned()
            .collect())
    }

    async fn save(&self, mut beer: Beer) -> Result<Beer, RepositoryError> {
        let id = beer.id.unwrap_or_else(ObjectId::new);
        beer.id = Some(id);
        self.documents.lock().expect("lock").insert(id, beer.clone());
        Ok(beer)
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<(), RepositoryError> {
        self.documents.lock().expect("lock").remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        self.documents.lock().expect("lock").clear();
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.documents.lock().expect("lock").len() as u64)
    }
}

/// In-memory stand-in for the `customer` collection.
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    documents: Mutex<HashMap<ObjectId, Customer>>,
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        Ok(self.documents.lock().expect("lock").values().cloned().collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Customer>, RepositoryError> {
        Ok(self.documents.lock().expect("lock").get(&id).cloned())
    }

    async fn find_first_by_name(&self, name: &str) -> Result<Option<Customer>, RepositoryError> {
        Ok(self
            .documents
            .lock()
            .expect("lock")
            .values()
            .find(|customer| customer.customer_name.as_deref() == Some(name))
            .cloned())
    }

    async fn save(&self, mut customer: Customer) -> Result<Customer, RepositoryError> {
        let id = customer.id.unwrap_or_else(ObjectId::new);
        customer.id = Some(id);
        self.documents
            .lock()
            .expect("lock")
            .insert(id, customer.clone());
        Ok(customer)
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<(), RepositoryError> {
        self.documents.lock().expect("lock").remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        self.documents.lock().expect("lock").clear();
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.documents.lock().expect("lock").len() as u64)
    }
}
