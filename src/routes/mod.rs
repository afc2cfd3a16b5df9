use actix_web::{error::JsonPayloadError, error::QueryPayloadError, web, HttpRequest};

use crate::error::ApiError;

pub mod budget;
pub mod health;
pub mod itinerary;
pub mod match_cities;
pub mod places;
pub mod search;
pub mod submission;

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::bad_request(format!("Invalid request body: {}", err)).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::bad_request(format!("Invalid query string: {}", err)).into()
}

/// Register every route. Handlers expect a `web::Data<dyn TravelStore>` in
/// the app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/search", web::get().to(search::search))
                .route("/autocomplete", web::get().to(search::autocomplete))
                .route("/places/{city_name}", web::get().to(places::get_places))
                .route("/itinerary", web::post().to(itinerary::create))
                .route("/match-cities", web::post().to(match_cities::find))
                .route("/trip-budget", web::post().to(budget::estimate))
                .route("/submit-city", web::post().to(submission::submit)),
        );
}
