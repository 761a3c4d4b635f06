//! Mongo-backed customer repository.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Collection, Database};

use taphouse_core::Customer;

use super::{CUSTOMER_COLLECTION, CustomerRepository, RepositoryError};

/// Repository over the `customer` collection.
pub struct MongoCustomerRepository {
    collection: Collection<Customer>,
}

impl MongoCustomerRepository {
    /// Create a new repository over `database`.
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(CUSTOMER_COLLECTION),
        }
    }
}

#[async_trait]
impl CustomerRepository for MongoCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Customer>, RepositoryError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_first_by_name(&self, name: &str) -> Result<Option<Customer>, RepositoryError> {
        Ok(self
            .collection
            .find_one(doc! { "customerName": name })
            .await?)
    }

    async fn save(&self, mut customer: Customer) -> Result<Customer, RepositoryError> {
        match customer.id {
            Some(id) => {
                self.collection
                    .replace_one(doc! { "_id": id }, &customer)
                    .upsert(true)
                    .await?;
                Ok(customer)
            }
            None => {
                let result = self.collection.insert_one(&customer).await?;
                let id = result.inserted_id.as_object_id().ok_or_else(|| {
                    RepositoryError::DataCorruption(format!(
                        "store assigned a non-ObjectId key: {}",
                        result.inserted_id
                    ))
                })?;
                customer.id = Some(id);
                Ok(customer)
            }
        }
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<(), RepositoryError> {
        self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        self.collection.delete_many(doc! {}).await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }
}
