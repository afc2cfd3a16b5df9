use actix_web::{web, HttpResponse};

use crate::db::store::TravelStore;
use crate::error::ApiError;
use crate::models::submission::CitySubmission;
use crate::services::submission_service;

/*
    /api/submit-city
*/
pub async fn submit(
    data: web::Data<dyn TravelStore>,
    input: web::Json<CitySubmission>,
) -> Result<HttpResponse, ApiError> {
    let submission = input.into_inner();
    submission_service::validate(&submission)
        .map_err(|err| ApiError::bad_request(err.to_string()))?;

    let stored = submission_service::submit_city(data.get_ref(), submission)
        .await
        .map_err(ApiError::storage("Failed to submit city"))?;
    Ok(HttpResponse::Created().json(stored))
}
