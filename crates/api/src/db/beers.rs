//! Mongo-backed beer repository.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Collection, Database};

use taphouse_core::Beer;

use super::{BEER_COLLECTION, BeerRepository, RepositoryError};

/// Repository over the `beer` collection.
pub struct MongoBeerRepository {
    collection: Collection<Beer>,
}

impl MongoBeerRepository {
    /// Create a new repository over `database`.
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(BEER_COLLECTION),
        }
    }
}

#[async_trait]
impl BeerRepository for MongoBeerRepository {
    async fn find_all(&self) -> Result<Vec<Beer>, RepositoryError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Beer>, RepositoryError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_first_by_name(&self, name: &str) -> Result<Option<Beer>, RepositoryError> {
        Ok(self.collection.find_one(doc! { "beerName": name }).await?)
    }

    async fn find_by_style(&self, style: &str) -> Result<Vec<Beer>, RepositoryError> {
        let cursor = self.collection.find(doc! { "beerStyle": style }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn save(&self, mut beer: Beer) -> Result<Beer, RepositoryError> {
        match beer.id {
            Some(id) => {
                self.collection
                    .replace_one(doc! { "_id": id }, &beer)
                    .upsert(true)
                    .await?;
                Ok(beer)
            }
            None => {
                let result = self.collection.insert_one(&beer).await?;
                let id = result.inserted_id.as_object_id().ok_or_else(|| {
                    RepositoryError::DataCorruption(format!(
                        "store assigned a non-ObjectId key: {}",
                        result.inserted_id
                    ))
                })?;
                beer.id = Some(id);
                Ok(beer)
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
