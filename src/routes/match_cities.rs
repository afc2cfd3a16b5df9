use actix_web::{web, HttpResponse};

use crate::db::store::TravelStore;
use crate::error::ApiError;
use crate::models::itinerary::MatchCitiesRequest;
use crate::services::city_match_service;

/*
    /api/match-cities
*/
pub async fn find(
    data: web::Data<dyn TravelStore>,
    input: web::Json<MatchCitiesRequest>,
) -> Result<HttpResponse, ApiError> {
    let duration = input
        .trip_duration
        .filter(|days| *days > 0)
        .and_then(|days| u32::try_from(days).ok())
        .ok_or_else(|| ApiError::bad_request("Trip duration is required"))?;

    let cities = city_match_service::match_cities(data.get_ref(), duration)
        .await
        .map_err(ApiError::storage("An error occurred while matching cities"))?;
    Ok(HttpResponse::Ok().json(cities))
}
