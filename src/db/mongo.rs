use async_trait::async_trait;
use futures::TryStreamExt;
use bson::{doc, oid::ObjectId};
use mongodb::{
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection, Database,
};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Collections;
use crate::db::query::CityQuery;
use crate::db::store::{StoreError, TravelStore};
use crate::models::{city::City, place::Place, submission::CitySubmission};

pub async fn create_mongo_client(uri: &str) -> Result<Arc<Client>, mongodb::error::Error> {
    let mut client_options = ClientOptions::parse(uri).await?;

    client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    client_options.connect_timeout = Some(Duration::from_secs(10));
    client_options.server_selection_timeout = Some(Duration::from_secs(10));
    client_options.max_pool_size = Some(10);
    client_options.min_pool_size = Some(1);

    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);

    let client = Client::with_options(client_options)?;
    Ok(Arc::new(client))
}

/// [`TravelStore`] backed by a MongoDB database.
#[derive(Clone)]
pub struct MongoStore {
    client: Arc<Client>,
    database: String,
    collections: Collections,
}

impl MongoStore {
    pub fn new(client: Arc<Client>, database: &str, collections: Collections) -> Self {
        Self {
            client,
            database: database.to_string(),
            collections,
        }
    }

    fn database(&self) -> Database {
        self.client.database(&self.database)
    }

    fn cities(&self) -> Collection<City> {
        self.database().collection(&self.collections.cities)
    }

    fn places(&self) -> Collection<Place> {
        self.database().collection(&self.collections.places)
    }

    fn submissions(&self) -> Collection<CitySubmission> {
        self.database().collection(&self.collections.submissions)
    }
}

#[async_trait]
impl TravelStore for MongoStore {
    async fn find_cities(
        &self,
        query: &CityQuery,
        limit: Option<i64>,
    ) -> Result<Vec<City>, StoreError> {
        let filter = query.to_document();
        log::debug!("cities filter: {}", filter);

        let collection = self.cities();
        let mut find = collection.find(filter);
        if let Some(limit) = limit {
            find = find.limit(limit);
        }
        Ok(find.await?.try_collect::<Vec<City>>().await?)
    }

    async fn find_places(&self, city_name: &str) -> Result<Vec<Place>, StoreError> {
        let cursor = self.places().find(doc! { "City": city_name }).await?;
        Ok(cursor.try_collect::<Vec<Place>>().await?)
    }

    async fn insert_submission(&self, submission: &CitySubmission) -> Result<ObjectId, StoreError> {
        let result = self.submissions().insert_one(submission).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Unavailable("insert returned a non-ObjectId id".to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database().run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
