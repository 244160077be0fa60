use std::env;

use log::*;

const DEFAULT_DUKAAN_HOST: &str = "0.0.0.0";
const DEFAULT_DUKAAN_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite://data/dukaan.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 25;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// The SQLite connection string. The database file is created on startup if it is missing.
    pub database_url: String,
    /// Upper bound on the size of the database connection pool.
    pub max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_DUKAAN_HOST.to_string(),
            port: DEFAULT_DUKAAN_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("DUKAAN_HOST").ok().unwrap_or_else(|| DEFAULT_DUKAAN_HOST.into());
        let port = env::var("DUKAAN_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for DUKAAN_PORT. {e} Using the default, {DEFAULT_DUKAAN_PORT}, \
                         instead."
                    );
                    DEFAULT_DUKAAN_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_DUKAAN_PORT);
        let database_url = env::var("DUKAAN_DATABASE_URL").ok().unwrap_or_else(|| {
            warn!("🪛️ DUKAAN_DATABASE_URL is not set. Using the default, {DEFAULT_DATABASE_URL}, instead.");
            DEFAULT_DATABASE_URL.to_string()
        });
        let max_connections = env::var("DUKAAN_MAX_CONNECTIONS")
            .map_err(|_| {
                info!("🪛️ DUKAAN_MAX_CONNECTIONS is not set. Using the default value of {DEFAULT_MAX_CONNECTIONS}.")
            })
            .and_then(|s| {
                s.parse::<u32>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| warn!("🪛️ Invalid configuration value for DUKAAN_MAX_CONNECTIONS: {s}"))
            })
            .ok()
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        Self { host, port, database_url, max_connections }
    }
}
