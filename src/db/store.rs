use async_trait::async_trait;
use bson::oid::ObjectId;
use thiserror::Error;

use crate::db::query::CityQuery;
use crate::models::{city::City, place::Place, submission::CitySubmission};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Invalid city pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Read and write access to the travel dataset.
///
/// Handlers only talk to this trait, so the routes run unchanged against
/// MongoDB in production and the in-memory store in tests.
#[async_trait]
pub trait TravelStore: Send + Sync {
    /// Cities matching `query`, in storage order, at most `limit` of them.
    async fn find_cities(&self, query: &CityQuery, limit: Option<i64>)
        -> Result<Vec<City>, StoreError>;

    /// Places whose parent city name equals `city_name` exactly.
    async fn find_places(&self, city_name: &str) -> Result<Vec<Place>, StoreError>;

    async fn insert_submission(&self, submission: &CitySubmission) -> Result<ObjectId, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
