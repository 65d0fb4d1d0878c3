// One-time backfill: populate ownerName on items from users/{ownerId}.
//
// Usage:
//   backfill_owner_names [--uri <connection-string>] [--database <name>]
// Flags fall back to MONGODB_URI / MONGODB_DATABASE.

use clap::Parser;
use dotenv::dotenv;
use marketplace_migrations::{config::Config, database::MongoDB, migrations::backfill_owner_names};

#[derive(Parser)]
#[command(name = "backfill_owner_names")]
#[command(about = "Backfill ownerName on items from the owning user's display name")]
struct Cli {
    /// MongoDB connection string (falls back to MONGODB_URI)
    #[arg(long)]
    uri: Option<String>,

    /// Target database name (falls back to MONGODB_DATABASE)
    #[arg(long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();

    let config = match Config::resolve(cli.uri, cli.database) {
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

    match backfill_owner_names::run(&db).await {
        Ok(summary) => {
            log::info!(
                "✨ Completed. Processed {} items, updated {} in {} batches",
                summary.processed,
                summary.updated,
                summary.batches
            );
        }
        Err(e) => {
            log::error!("💥 Fatal error: {}", e);
            std::process::exit(1);
        }
    }
}
