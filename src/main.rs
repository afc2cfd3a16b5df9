use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use travel_planner_api::config::AppConfig;
use travel_planner_api::db::mongo::{create_mongo_client, MongoStore};
use travel_planner_api::db::store::TravelStore;
use travel_planner_api::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    log::info!("Connecting to MongoDB database {}", config.database);
    let client = create_mongo_client(&config.mongo_url).await.map_err(|e| {
        log::error!("Failed to connect to MongoDB: {}", e);
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e)
    })?;

    let store = MongoStore::new(client, &config.database, config.collections.clone());
    match store.ping().await {
        Ok(()) => log::info!("MongoDB connection verified with ping"),
        Err(e) => log::warn!("Connected to MongoDB but ping failed: {}", e),
    }
    let store: web::Data<dyn TravelStore> = web::Data::from(Arc::new(store) as Arc<dyn TravelStore>);

    log::info!("Starting HTTP server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(store.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
