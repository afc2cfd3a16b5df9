#![allow(dead_code)]

use actix_web::{web, App};
use std::sync::Arc;

use travel_planner_api::db::memory::MemoryStore;
use travel_planner_api::db::store::TravelStore;
use travel_planner_api::models::{city::City, place::Place};
use travel_planner_api::routes;

pub struct TestApp {
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new(test_cities(), test_places()))
    }

    pub fn offline() -> Self {
        Self::with_store(MemoryStore::offline())
    }

    pub fn with_store(store: MemoryStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let store: Arc<dyn TravelStore> = self.store.clone();
        App::new()
            .app_data(web::Data::from(store))
            .configure(routes::configure)
    }
}

pub fn city(name: &str, description: &str, best_time: &str, min_days: u32, max_days: u32) -> City {
    City {
        name: name.to_string(),
        description: description.to_string(),
        best_time_to_visit: best_time.to_string(),
        rating: 4.0,
        min_days,
        max_days,
        ideal_duration: format!("{}-{} days", min_days, max_days),
        low_budget_per_day: 1000.0,
        medium_budget_per_day: 2500.0,
        high_budget_per_day: 6000.0,
        ..Default::default()
    }
}

pub fn place(city: &str, name: &str, rating: f64) -> Place {
    Place {
        city: city.to_string(),
        name: name.to_string(),
        rating,
        distance: "10 km".to_string(),
        description: format!("['{} in {}']", name, city),
        ..Default::default()
    }
}

pub fn test_cities() -> Vec<City> {
    vec![
        city(
            "Goa Beaches",
            "Coastal strip known for beach shacks",
            "November to February",
            2,
            6,
        ),
        city("Goa", "['Beaches, churches and \"nightlife\"']", "November to March", 3, 7),
        city("Manali", "Snowy mountain town in the hills", "October to June", 2, 5),
        city("Jaipur", "The Pink City of forts", "October to March", 2, 4),
        city("Munnar", "Tea estates in the hills", "September to May", 3, 8),
    ]
}

/// Ten places in Goa, "1. Spot A" rated 0.5 up to "10. Spot J" rated 5.0,
/// and one in Manali.
pub fn test_places() -> Vec<Place> {
    let mut places: Vec<Place> = (1..=10u8)
        .map(|i| {
            let letter = char::from(b'A' + i - 1);
            place("Goa", &format!("{}. Spot {}", i, letter), f64::from(i) / 2.0)
        })
        .collect();
    places.push(place("Manali", "Solang Valley", 4.6));
    places
}
