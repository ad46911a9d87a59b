//! API configuration

use std::time::Duration;

use serde::Deserialize;

use core_kernel::{Timezone, TemporalError};
use domain_delivery::Branding;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// API configuration
///
/// Tokens are issued elsewhere, so only the verification secret lives here.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Secret that bearer tokens are verified against
    pub jwt_secret: String,
    /// Database URL
    pub database_url: String,
    /// Pool size
    pub db_max_connections: u32,
    /// Seconds a request waits for a pooled connection
    pub db_acquire_timeout_secs: u64,
    /// Log level
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Tenant code selecting branding
    pub tenant: String,
    /// IANA timezone report dates are interpreted in
    pub timezone: String,
    /// Apply the reference schema at startup
    pub run_migrations: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: "change-me-in-production".to_string(),
            database_url: "postgres://localhost/nippo".to_string(),
            db_max_connections: 10,
            db_acquire_timeout_secs: 30,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            tenant: "default".to_string(),
            timezone: "Asia/Tokyo".to_string(),
            run_migrations: false,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    /// Loads configuration from a set of environment variables
    ///
    /// Keys are read from `NIPPO_*` and every key has a default.
    /// `DATABASE_URL` is honoured when `NIPPO_DATABASE_URL` is not set.
    pub fn from_vars(vars: config::Map<String, String>) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("jwt_secret", defaults.jwt_secret)?
            .set_default("database_url", defaults.database_url)?
            .set_default("db_max_connections", i64::from(defaults.db_max_connections))?
            .set_default("db_acquire_timeout_secs", defaults.db_acquire_timeout_secs as i64)?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "pretty")?
            .set_default("tenant", defaults.tenant)?
            .set_default("timezone", defaults.timezone)?
            .set_default("run_migrations", defaults.run_migrations)?;

        if let Some(url) = vars.get("DATABASE_URL") {
            builder = builder.set_default("database_url", url.clone())?;
        }

        builder
            .add_source(config::Environment::with_prefix("NIPPO").source(Some(vars)))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_acquire_timeout_secs)
    }

    /// Parses the configured timezone
    pub fn timezone(&self) -> Result<Timezone, TemporalError> {
        self.timezone.parse()
    }

    /// Branding for the configured tenant
    pub fn branding(&self) -> &'static Branding {
        Branding::for_tenant(&self.tenant)
    }
}
