use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

use crate::db::store::{StoreError, TravelStore};
use crate::models::itinerary::{ItineraryDay, PlannedActivity, TripDetails};
use crate::models::place::Place;
use crate::services::text::clean_place_name;

pub const MAX_ACTIVITIES_PER_DAY: usize = 4;
const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TripDateError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} is not a valid date: {value}")]
    Invalid { field: &'static str, value: String },
}

/// Parse a trip date sent by the client.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS` timestamps and
/// bare `YYYY-MM-DD` dates; anything without an offset is read as UTC.
pub fn parse_trip_date(field: &'static str, value: &str) -> Result<DateTime<Utc>, TripDateError> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(parsed.and_utc());
    }
    if let Some(parsed) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(parsed.and_utc());
    }
    Err(TripDateError::Invalid {
        field,
        value: value.to_string(),
    })
}

/// Whole days between two instants, rounded up. Zero or negative when the
/// trip ends before it starts.
pub fn duration_in_days(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let millis = (end - start).num_milliseconds();
    -(-millis).div_euclid(MILLIS_PER_DAY)
}

/// Trip length in days from the client's start and end dates.
pub fn trip_duration(details: &TripDetails) -> Result<i64, TripDateError> {
    let start = details
        .start_date
        .as_deref()
        .ok_or(TripDateError::Missing("startDate"))?;
    let end = details
        .end_date
        .as_deref()
        .ok_or(TripDateError::Missing("endDate"))?;
    Ok(duration_in_days(
        parse_trip_date("startDate", start)?,
        parse_trip_date("endDate", end)?,
    ))
}

impl From<&Place> for PlannedActivity {
    fn from(place: &Place) -> Self {
        Self {
            name: clean_place_name(&place.name),
            description: place.description.clone(),
            rating: place.rating,
            distance: place.distance.clone(),
        }
    }
}

/// Spread places over the trip, best rated first, at most
/// [`MAX_ACTIVITIES_PER_DAY`] per day. Days left without places are not
/// returned, so the result may be shorter than the trip.
pub fn allocate(mut places: Vec<Place>, duration_days: i64) -> Vec<ItineraryDay> {
    // sort_by is stable: equally rated places keep their stored order
    places.sort_by(|a, b| b.rating.total_cmp(&a.rating));

    let days = usize::try_from(duration_days).unwrap_or(0);
    places
        .chunks(MAX_ACTIVITIES_PER_DAY)
        .take(days)
        .zip(1..)
        .map(|(chunk, day)| ItineraryDay {
            day,
            activities: chunk.iter().map(PlannedActivity::from).collect(),
        })
        .collect()
}

pub async fn generate_itinerary(
    store: &dyn TravelStore,
    city_name: &str,
    duration_days: i64,
) -> Result<Vec<ItineraryDay>, StoreError> {
    let places = store.find_places(city_name).await?;
    log::debug!(
        "Planning {} day(s) in {} from {} place(s)",
        duration_days,
        city_name,
        places.len()
    );
    Ok(allocate(places, duration_days))
}
