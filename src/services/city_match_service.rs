use crate::db::query::CityQuery;
use crate::db::store::{StoreError, TravelStore};
use crate::models::city::City;

/// Slack required above the requested duration on a city's maximum stay.
pub const STAY_TOLERANCE_DAYS: u32 = 2;

/// Cities whose recommended stay admits a trip of `duration_days`:
/// `Min_no_of_days <= duration` and `Max_no_of_days >= duration + 2`.
pub fn stay_range(duration_days: u32) -> CityQuery {
    CityQuery::StayRange {
        min_days_at_most: duration_days,
        max_days_at_least: duration_days.saturating_add(STAY_TOLERANCE_DAYS),
    }
}

pub async fn match_cities(
    store: &dyn TravelStore,
    duration_days: u32,
) -> Result<Vec<City>, StoreError> {
    store.find_cities(&stay_range(duration_days), None).await
}
