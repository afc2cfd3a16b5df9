use actix_web::{web, HttpResponse};

use crate::db::store::TravelStore;
use crate::error::ApiError;
use crate::models::itinerary::ItineraryRequest;
use crate::services::{budget_service, itinerary_service};

/*
    /api/trip-budget
*/
pub async fn estimate(
    data: web::Data<dyn TravelStore>,
    input: web::Json<ItineraryRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = input.into_inner();
    let city_name = request
        .city_name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("City name is required"))?;
    let details = request
        .trip_details
        .ok_or_else(|| ApiError::bad_request("Trip details are required"))?;
    let tier = details
        .budget
        .ok_or_else(|| ApiError::bad_request("Budget level must be one of low, medium or high"))?;
    let members = details
        .members
        .filter(|members| *members > 0)
        .ok_or_else(|| ApiError::bad_request("Number of members must be a positive whole number"))?;
    let duration = itinerary_service::trip_duration(&details)
        .map_err(|err| ApiError::bad_request(err.to_string()))?;

    match budget_service::trip_budget(data.get_ref(), &city_name, tier, members, duration)
        .await
        .map_err(ApiError::storage("An error occurred while estimating the budget"))?
    {
        Some(budget) => Ok(HttpResponse::Ok().json(budget)),
        None => Err(ApiError::not_found(format!("City '{}' not found", city_name))),
    }
}
