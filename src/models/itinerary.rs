use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError, NoneAsEmptyString, PickFirst};

use crate::models::city::BudgetTier;

/// Trip parameters as the client collects them on the planner form.
///
/// Form inputs arrive as strings once edited, so `members` also reads a
/// numeric string. A `members` or `budget` that cannot be read is left
/// empty rather than rejecting the request; only the budget estimate needs
/// them and it reports them as missing.
#[serde_as]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TripDetails {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde_as(as = "DefaultOnError<PickFirst<(Option<_>, NoneAsEmptyString)>>")]
    #[serde(default)]
    pub members: Option<u32>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub budget: Option<BudgetTier>,
    pub trip_type: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRequest {
    pub city_name: Option<String>,
    pub trip_details: Option<TripDetails>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatchCitiesRequest {
    pub trip_duration: Option<i64>,
}

/// One stop on an itinerary day, projected from a place.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlannedActivity {
    pub name: String,
    pub description: String,
    pub rating: f64,
    pub distance: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ItineraryDay {
    pub day: u32,
    pub activities: Vec<PlannedActivity>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripBudget {
    pub city_name: String,
    pub budget: BudgetTier,
    pub budget_per_day: f64,
    pub members: u32,
    pub duration_in_days: i64,
    pub total_budget: f64,
}
