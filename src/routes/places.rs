use actix_web::{web, HttpResponse};

use crate::db::store::TravelStore;
use crate::error::ApiError;
use crate::services::text::clean_description;

/*
    /api/places/{city_name}
*/
pub async fn get_places(
    path: web::Path<String>,
    data: web::Data<dyn TravelStore>,
) -> Result<HttpResponse, ApiError> {
    let city_name = path.into_inner();
    if city_name.trim().is_empty() {
        return Err(ApiError::bad_request("City name parameter is required"));
    }

    let mut places = data
        .find_places(&city_name)
        .await
        .map_err(ApiError::storage("An error occurred while fetching places"))?;
    for place in &mut places {
        place.description = clean_description(&place.description);
    }
    Ok(HttpResponse::Ok().json(places))
}
