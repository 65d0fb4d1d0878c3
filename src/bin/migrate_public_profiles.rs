// Re-runnable migration: merge name/bio/photoUrl from users into
// publicProfiles, preserving whatever else each profile carries.

use dotenv::dotenv;
use marketplace_migrations::{config::Config, database::MongoDB, migrations::migrate_public_profiles};

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

    match migrate_public_profiles::run(&db).await {
        Ok(summary) => {
            log::info!("✅ Migration complete: {} profiles updated", summary.updated);
        }
        Err(e) => {
            log::error!("💥 Migration failed: {}", e);
            std::process::exit(2);
        }
    }
}
