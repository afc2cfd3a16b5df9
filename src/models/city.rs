use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// A destination record as stored in the cities collection.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct City {
    #[serde(
        rename = "_id",
        serialize_with = "super::serialize_hex_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ObjectId>,
    #[serde(rename = "City")]
    pub name: String,
    #[serde(rename = "City_desc", deserialize_with = "lenient::text", default)]
    pub description: String,
    #[serde(rename = "Ratings", deserialize_with = "lenient::number", default)]
    pub rating: f64,
    #[serde(rename = "Min_no_of_days", deserialize_with = "lenient::days", default)]
    pub min_days: u32,
    #[serde(rename = "Max_no_of_days", deserialize_with = "lenient::days", default)]
    pub max_days: u32,
    #[serde(rename = "Ideal_duration", deserialize_with = "lenient::text", default)]
    pub ideal_duration: String,
    #[serde(rename = "Best_time_to_visit", deserialize_with = "lenient::text", default)]
    pub best_time_to_visit: String,
    #[serde(rename = "Low_Budget_Per_Day", deserialize_with = "lenient::number", default)]
    pub low_budget_per_day: f64,
    #[serde(rename = "Medium_Budget_Per_Day", deserialize_with = "lenient::number", default)]
    pub medium_budget_per_day: f64,
    #[serde(rename = "High_Budget_Per_Day", deserialize_with = "lenient::number", default)]
    pub high_budget_per_day: f64,
}

/// Spending level chosen for a trip.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

impl City {
    /// Estimated spend per person per day at the given tier.
    pub fn budget_per_day(&self, tier: BudgetTier) -> f64 {
        match tier {
            BudgetTier::Low => self.low_budget_per_day,
            BudgetTier::Medium => self.medium_budget_per_day,
            BudgetTier::High => self.high_budget_per_day,
        }
    }
}

/// A search hit: the city plus how many keyword/field pairs matched.
#[derive(Debug, Serialize, Clone)]
pub struct ScoredCity {
    #[serde(flatten)]
    pub city: City,
    #[serde(rename = "matchCount")]
    pub match_count: usize,
}
