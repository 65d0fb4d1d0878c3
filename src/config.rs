use anyhow::{bail, Result};
use std::env;

/// Database used when MONGODB_DATABASE is not set.
pub const DEFAULT_DATABASE: &str = "marketplace";

/// Connection settings shared by all migration scripts.
///
/// The connection string carries the credentials, so a missing
/// MONGODB_URI is a fatal configuration error; the scripts refuse
/// to run rather than guess at a localhost default.
#[derive(Debug, Clone)]
pub struct Config {
    pub uri: String,
    pub database: String,
}

impl Config {
    /// Read the configuration from the environment only.
    pub fn from_env() -> Result<Self> {
        Self::resolve(None, None)
    }

    /// Resolve configuration from explicit overrides (CLI flags) with
    /// environment fallback. Flags win over the environment.
    pub fn resolve(uri: Option<String>, database: Option<String>) -> Result<Self> {
        let uri = match uri.or_else(|| env::var("MONGODB_URI").ok()) {
            Some(uri) if !uri.is_empty() => uri,
            _ => bail!("MONGODB_URI is not set — export it or pass --uri"),
        };

        let database = database
            .or_else(|| env::var("MONGODB_DATABASE").ok())
            .filter(|db| !db.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        Ok(Self { uri, database })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_values_win_over_environment() {
        let config = Config::resolve(
            Some("mongodb://flag-host:27017".to_string()),
            Some("flagdb".to_string()),
        )
        .unwrap();

        assert_eq!(config.uri, "mongodb://flag-host:27017");
        assert_eq!(config.database, "flagdb");
    }

    #[test]
    fn database_defaults_when_not_given() {
        let config =
            Config::resolve(Some("mongodb://localhost:27017".to_string()), None).unwrap();
        assert_eq!(config.database, DEFAULT_DATABASE);
    }

    #[test]
    fn empty_database_override_falls_back_to_default() {
        let config = Config::resolve(
            Some("mongodb://localhost:27017".to_string()),
            Some(String::new()),
        )
        .unwrap();
        assert_eq!(config.database, DEFAULT_DATABASE);
    }

    #[test]
    fn empty_uri_is_rejected() {
        let result = Config::resolve(Some(String::new()), None);
        assert!(result.is_err());
    }
}
