use crate::db::query::CityQuery;
use crate::db::store::{StoreError, TravelStore};
use crate::models::city::{BudgetTier, City};
use crate::models::itinerary::TripBudget;

/// Daily cost at `tier` × members × days. A trip that ends before it
/// starts costs nothing.
pub fn estimate(city: &City, tier: BudgetTier, members: u32, duration_days: i64) -> TripBudget {
    let budget_per_day = city.budget_per_day(tier);
    let days = duration_days.max(0);
    TripBudget {
        city_name: city.name.clone(),
        budget: tier,
        budget_per_day,
        members,
        duration_in_days: days,
        total_budget: budget_per_day * f64::from(members) * days as f64,
    }
}

/// Estimate for the city named exactly `city_name`, or `None` when there is
/// no such city.
pub async fn trip_budget(
    store: &dyn TravelStore,
    city_name: &str,
    tier: BudgetTier,
    members: u32,
    duration_days: i64,
) -> Result<Option<TripBudget>, StoreError> {
    let city = store
        .find_cities(&CityQuery::Named(city_name.to_string()), Some(1))
        .await?
        .into_iter()
        .next();
    Ok(city.map(|city| estimate(&city, tier, members, duration_days)))
}
