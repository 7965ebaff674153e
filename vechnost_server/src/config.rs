//! Server configuration.
//!
//! Everything is read from environment variables, with sane defaults for
//! local development. `VCN_DATABASE_URL` points at the Sqlite store;
//! relative paths resolve against the working directory of the server
//! process.
use std::env;

use log::*;

const DEFAULT_VCN_HOST: &str = "127.0.0.1";
const DEFAULT_VCN_PORT: u16 = 3190;
const DEFAULT_VCN_DATABASE_URL: &str = "sqlite://data/vechnost.db";
const DEFAULT_MAX_DB_CONNECTIONS: u32 = 25;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Upper bound on the Sqlite connection pool.
    pub max_db_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_VCN_HOST.to_string(),
            port: DEFAULT_VCN_PORT,
            database_url: DEFAULT_VCN_DATABASE_URL.to_string(),
            max_db_connections: DEFAULT_MAX_DB_CONNECTIONS,
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("VCN_HOST").ok().unwrap_or_else(|| DEFAULT_VCN_HOST.into());
        let port = env::var("VCN_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for VCN_PORT. {e} Using the default, {DEFAULT_VCN_PORT}, instead."
                    );
                    DEFAULT_VCN_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_VCN_PORT);
        let database_url = env::var("VCN_DATABASE_URL").ok().unwrap_or_else(|| {
            warn!("🪛️ VCN_DATABASE_URL is not set. Using the default, {DEFAULT_VCN_DATABASE_URL}, instead.");
            DEFAULT_VCN_DATABASE_URL.into()
        });
        let max_db_connections = env::var("VCN_MAX_DB_CONNECTIONS")
            .map(|s| {
                s.parse::<u32>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid value for VCN_MAX_DB_CONNECTIONS. {e} Using the default, \
                         {DEFAULT_MAX_DB_CONNECTIONS}, instead."
                    );
                    DEFAULT_MAX_DB_CONNECTIONS
                })
            })
            .ok()
            .unwrap_or(DEFAULT_MAX_DB_CONNECTIONS);
        Self { host, port, database_url, max_db_connections }
    }
}
