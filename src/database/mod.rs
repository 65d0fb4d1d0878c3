use anyhow::Result;
use mongodb::{Client, Collection, Database};

use crate::config::Config;

/// MongoDB connection manager shared by the migration scripts
#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    /// Open a client connection and verify it before handing it out.
    pub async fn connect(config: &Config) -> Result<Self> {
        let mut client_options = mongodb::options::ClientOptions::parse(&config.uri).await?;

        // One-shot scripts: a small pool is plenty
        client_options.max_pool_size = Some(10);
        client_options.min_pool_size = Some(1);
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(&config.database);

        // Test the connection before any collection work starts
        db.list_collection_names().await?;

        log::info!("✅ Connected to MongoDB database: {}", config.database);

        Ok(Self { client, db })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_connection() {
        dotenv::dotenv().ok();

        let config = Config::from_env().expect("MONGODB_URI must be set for this test");
        let db = MongoDB::connect(&config).await;
        assert!(db.is_ok());
    }
}
