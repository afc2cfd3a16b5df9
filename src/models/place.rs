use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// A point of interest, linked to its city by name.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Place {
    #[serde(
        rename = "_id",
        serialize_with = "super::serialize_hex_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ObjectId>,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Place", deserialize_with = "lenient::text", default)]
    pub name: String,
    #[serde(rename = "Ratings", deserialize_with = "lenient::number", default)]
    pub rating: f64,
    #[serde(rename = "Distance", deserialize_with = "lenient::text", default)]
    pub distance: String,
    #[serde(rename = "Place_Desc", deserialize_with = "lenient::text", default)]
    pub description: String,
}
