use actix_web::{web, HttpResponse};

use crate::db::store::TravelStore;
use crate::error::ApiError;
use crate::models::itinerary::ItineraryRequest;
use crate::services::itinerary_service;

/*
    /api/itinerary
*/
pub async fn create(
    data: web::Data<dyn TravelStore>,
    input: web::Json<ItineraryRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = input.into_inner();
    let (city_name, trip_details) = match (request.city_name, request.trip_details) {
        (Some(city_name), Some(trip_details)) if !city_name.trim().is_empty() => {
            (city_name, trip_details)
        }
        _ => return Err(ApiError::bad_request("City name and trip details are required")),
    };

    let duration = itinerary_service::trip_duration(&trip_details)
        .map_err(|err| ApiError::bad_request(err.to_string()))?;

    let itinerary = itinerary_service::generate_itinerary(data.get_ref(), &city_name, duration)
        .await
        .map_err(ApiError::storage(
            "An error occurred while generating the itinerary",
        ))?;
    Ok(HttpResponse::Ok().json(itinerary))
}
