//! Main entry point for the campground listings server.
//! This crate wires the PostgreSQL store into the page routes and serves them over HTTP.

use std::sync::Arc;

use actix_web::{App, HttpServer, middleware::Logger, web};
use campground_services::{CampgroundStore, PgCampgroundStore};
use postgres::database::*;
use web_handlers::{MethodOverride, configure_routes};

mod config;
use config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    log::info!("🚀 Starting campground listings server...");

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Create database connection pool
    let pool = match create_connection_pool(&config.database_url, config.max_connections).await {
        Ok(pool) => {
            log::info!("🗃️ Database pool created successfully");

            if let Err(e) = test_connection(&pool).await {
                log::error!("❌ Database connection test failed: {}", e);
            }
            pool
        }
        Err(e) => {
            log::error!("❌ Failed to create database pool: {}", e);
            log::error!("💡 Make sure PostgreSQL is running and DATABASE_URL is correct");
            std::process::exit(1);
        }
    };

    if let Err(e) = ensure_schema(&pool).await {
        log::error!("❌ Failed to prepare database schema: {}", e);
        std::process::exit(1);
    }

    let store: Arc<dyn CampgroundStore> = Arc::new(PgCampgroundStore::new(pool));
    let store = web::Data::from(store);

    log::info!(
        "🌐 Server will be available at: http://{}:{}",
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(MethodOverride)
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
