use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString, PickFirst};

/// A user-proposed city awaiting review.
///
/// The submission form posts every field as a string, so the numeric fields
/// also accept numeric strings. Empty strings read as absent.
#[serde_as]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CitySubmission {
    #[serde(
        rename = "_id",
        serialize_with = "super::serialize_hex_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ObjectId>,
    #[serde(rename = "City", default)]
    pub name: String,
    #[serde(rename = "City_desc", default)]
    pub description: String,
    #[serde_as(as = "PickFirst<(Option<_>, NoneAsEmptyString)>")]
    #[serde(rename = "Min_no_of_days", default)]
    pub min_days: Option<u32>,
    #[serde_as(as = "PickFirst<(Option<_>, NoneAsEmptyString)>")]
    #[serde(rename = "Max_no_of_days", default)]
    pub max_days: Option<u32>,
    #[serde_as(as = "PickFirst<(Option<_>, NoneAsEmptyString)>")]
    #[serde(rename = "Low_Budget_Per_Day", default)]
    pub low_budget_per_day: Option<f64>,
    #[serde_as(as = "PickFirst<(Option<_>, NoneAsEmptyString)>")]
    #[serde(rename = "Medium_Budget_Per_Day", default)]
    pub medium_budget_per_day: Option<f64>,
    #[serde_as(as = "PickFirst<(Option<_>, NoneAsEmptyString)>")]
    #[serde(rename = "High_Budget_Per_Day", default)]
    pub high_budget_per_day: Option<f64>,
    #[serde(rename = "Ideal_duration", default)]
    pub ideal_duration: String,
    #[serde(rename = "Best_time_to_visit", default)]
    pub best_time_to_visit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
}
