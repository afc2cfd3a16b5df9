use async_trait::async_trait;
use bson::oid::ObjectId;
use std::sync::{Mutex, PoisonError};

use crate::db::query::CityQuery;
use crate::db::store::{StoreError, TravelStore};
use crate::models::{city::City, place::Place, submission::CitySubmission};

/// [`TravelStore`] over plain vectors, evaluating [`CityQuery`] in process.
///
/// Backs the route tests, which need no running database.
#[derive(Default)]
pub struct MemoryStore {
    cities: Vec<City>,
    places: Vec<Place>,
    submissions: Mutex<Vec<CitySubmission>>,
    offline: bool,
}

impl MemoryStore {
    pub fn new(cities: Vec<City>, places: Vec<Place>) -> Self {
        Self {
            cities,
            places,
            ..Default::default()
        }
    }

    /// A store whose every call fails, for exercising error paths.
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Default::default()
        }
    }

    pub fn submissions(&self) -> Vec<CitySubmission> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError::Unavailable("memory store is offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TravelStore for MemoryStore {
    async fn find_cities(
        &self,
        query: &CityQuery,
        limit: Option<i64>,
    ) -> Result<Vec<City>, StoreError> {
        self.check()?;
        let limit = limit
            .and_then(|limit| usize::try_from(limit).ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(usize::MAX);
        let matcher = query.matcher()?;
        Ok(self
            .cities
            .iter()
            .filter(|city| matcher.matches(city))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_places(&self, city_name: &str) -> Result<Vec<Place>, StoreError> {
        self.check()?;
        Ok(self
            .places
            .iter()
            .filter(|place| place.city == city_name)
            .cloned()
            .collect())
    }

    async fn insert_submission(&self, submission: &CitySubmission) -> Result<ObjectId, StoreError> {
        self.check()?;
        let id = ObjectId::new();
        let mut stored = submission.clone();
        stored.id = Some(id);
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(stored);
        Ok(id)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}
