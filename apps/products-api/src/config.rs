//! Configuration for Products API

use core_config::{app_info, env_or_default, env_parse_or, server::ServerConfig, AppInfo, FromEnv};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Default filter level when `RUST_LOG` is unset
    pub log_level: String,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            log_level: env_or_default("LOG_LEVEL", "info"),
            run_migrations: env_parse_or("RUN_MIGRATIONS", true)?,
        })
    }
}
