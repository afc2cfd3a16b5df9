use std::env;

use thiserror::Error;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 5000;
const DATABASE: &str = "travel";
const CITIES_COLLECTION: &str = "cities";
const PLACES_COLLECTION: &str = "places";
const SUBMISSIONS_COLLECTION: &str = "submissions";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Names of the collections the API reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collections {
    pub cities: String,
    pub places: String,
    pub submissions: String,
}

impl Default for Collections {
    fn default() -> Self {
        Self {
            cities: CITIES_COLLECTION.to_string(),
            places: PLACES_COLLECTION.to_string(),
            submissions: SUBMISSIONS_COLLECTION.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongo_url: String,
    pub database: String,
    pub collections: Collections,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable source; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => PORT,
        };

        let defaults = Collections::default();

        Ok(Self {
            host: non_empty("HOST").unwrap_or_else(|| HOST.to_string()),
            port,
            mongo_url: non_empty("MONGO_URL").ok_or(ConfigError::Missing("MONGO_URL"))?,
            database: non_empty("MONGO_DB").unwrap_or_else(|| DATABASE.to_string()),
            collections: Collections {
                cities: non_empty("CITIES_COLLECTION").unwrap_or(defaults.cities),
                places: non_empty("PLACES_COLLECTION").unwrap_or(defaults.places),
                submissions: non_empty("SUBMISSIONS_COLLECTION").unwrap_or(defaults.submissions),
            },
        })
    }
}
