use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::db::store::TravelStore;
use crate::error::ApiError;
use crate::services::search_service;

#[derive(Deserialize)]
pub struct QueryParams {
    q: Option<String>,
}

impl QueryParams {
    fn required(&self) -> Result<&str, ApiError> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or_else(|| ApiError::bad_request("Query parameter 'q' is required"))
    }
}

/*
    /api/search?q=
*/
pub async fn search(
    data: web::Data<dyn TravelStore>,
    params: web::Query<QueryParams>,
) -> Result<HttpResponse, ApiError> {
    let query = params.required()?;
    let cities = search_service::search_cities(data.get_ref(), query)
        .await
        .map_err(ApiError::storage("An error occurred while searching for cities"))?;
    log::info!("Search {:?} returned {} cities", query, cities.len());
    Ok(HttpResponse::Ok().json(cities))
}

/*
    /api/autocomplete?q=
*/
pub async fn autocomplete(
    data: web::Data<dyn TravelStore>,
    params: web::Query<QueryParams>,
) -> Result<HttpResponse, ApiError> {
    let prefix = params.required()?;
    let names = search_service::autocomplete(data.get_ref(), prefix)
        .await
        .map_err(ApiError::storage("Server error"))?;
    Ok(HttpResponse::Ok().json(names))
}
