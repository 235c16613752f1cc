use std::fmt;

use duties_core::config::{parse_or, process_env, string_or, ConfigError};

/// PostgreSQL connection settings.
///
/// | Env Var              | Default          |
/// |----------------------|------------------|
/// | `DB_HOST`            | `localhost`      |
/// | `POSTGRES_PORT`      | `5432`           |
/// | `POSTGRES_USER`      | `postgres`       |
/// | `POSTGRES_PASSWORD`  | `postgres`       |
/// | `POSTGRES_DB`        | `duties_list_db` |
/// | `DB_MAX_CONNECTIONS` | `20`             |
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

impl DbConfig {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(process_env)
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: string_or(&lookup, "DB_HOST", "localhost"),
            port: parse_or(&lookup, "POSTGRES_PORT", 5432, "a port number")?,
            user: string_or(&lookup, "POSTGRES_USER", "postgres"),
            password: string_or(&lookup, "POSTGRES_PASSWORD", "postgres"),
            database: string_or(&lookup, "POSTGRES_DB", "duties_list_db"),
            max_connections: parse_or(
                &lookup,
                "DB_MAX_CONNECTIONS",
                20,
                "a positive integer",
            )?,
        })
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
