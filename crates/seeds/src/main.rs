//! Replaces the campgrounds in the configured database with sample listings.

use campground_services::PgCampgroundStore;
use postgres::database::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let database_url = database_url_from_env();
    let pool = match create_connection_pool(&database_url, 1).await {
        Ok(pool) => {
            log::info!("🗃️ Database Connected");
            pool
        }
        Err(e) => {
            log::error!("❌ Failed to connect to {}: {}", database_url, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = ensure_schema(&pool).await {
        log::error!("❌ Failed to prepare database schema: {}", e);
        std::process::exit(1);
    }

    let store = PgCampgroundStore::new(pool.clone());
    let result = seeds::seed_database(&store, &mut rand::rng()).await;
    pool.close().await;

    if let Err(e) = result {
        log::error!("❌ Seeding aborted: {}", e);
        std::process::exit(1);
    }
}
