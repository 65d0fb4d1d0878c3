// One-time fix: populate the publicProfiles collection from existing
// users. Safe to re-run — users that already have a profile are skipped.

use dotenv::dotenv;
use marketplace_migrations::{config::Config, database::MongoDB, migrations::create_public_profiles};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let db = match MongoDB::connect(&config).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("💥 Failed to connect to MongoDB: {}", e);
            std::process::exit(1);
        }
    };

    match create_public_profiles::run(&db).await {
        Ok(summary) => {
            log::info!("📈 Migration summary:");
            log::info!("   ✅ Successfully created: {}", summary.created);
            log::info!("   ⏭️  Skipped (already exists): {}", summary.skipped);
            log::info!("   ❌ Errors: {}", summary.errors);
            log::info!("   📊 Total processed: {}", summary.total);
            log::info!("✨ Migration script finished");
        }
        Err(e) => {
            log::error!("💥 Fatal error during migration: {}", e);
            std::process::exit(1);
        }
    }
}
