use std::env;
use std::str::FromStr;

/// Which medium backs the record storage. Chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Postgres,
}

/// Where server-side session state lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionBackend {
    Memory,
    Redis,
}

/// Ten years. Session lifetimes beyond this are treated as a typo.
pub const MAX_SESSION_TTL_SECS: i64 = 315_360_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Argon2Settings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage_backend: StorageBackend,
    pub database_url: Option<String>,
    pub run_migrations: bool,
    pub session_backend: SessionBackend,
    pub redis_url: Option<String>,
    pub session_ttl_secs: i64,
    pub session_cookie_secure: bool,
    pub argon2: Argon2Settings,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// `.env.{RUST_ENV}` is tried first, then `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if dotenvy::from_filename(format!(".env.{rust_env}")).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. Kept separate from
    /// `from_env` so parsing can be tested without touching the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or("PORT", lookup("PORT"), 8080u16)?;

        let database_url = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty());
        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "memory" => StorageBackend::Memory,
                "postgres" | "postgresql" => StorageBackend::Postgres,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "STORAGE_BACKEND",
                        value,
                    })
                }
            },
            None if database_url.is_some() => StorageBackend::Postgres,
            None => StorageBackend::Memory,
        };
        if storage_backend == StorageBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let redis_url = lookup("REDIS_URL").filter(|v| !v.trim().is_empty());
        let session_backend = match lookup("SESSION_BACKEND") {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "memory" => SessionBackend::Memory,
                "redis" => SessionBackend::Redis,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "SESSION_BACKEND",
                        value,
                    })
                }
            },
            None => SessionBackend::Memory,
        };
        if session_backend == SessionBackend::Redis && redis_url.is_none() {
            return Err(ConfigError::Missing("REDIS_URL"));
        }

        let session_ttl_secs = parse_or("SESSION_TTL_SECS", lookup("SESSION_TTL_SECS"), 86_400i64)?;
        if !(1..=MAX_SESSION_TTL_SECS).contains(&session_ttl_secs) {
            return Err(ConfigError::Invalid {
                key: "SESSION_TTL_SECS",
                value: session_ttl_secs.to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            storage_backend,
            database_url,
            run_migrations: parse_bool("RUN_MIGRATIONS", lookup("RUN_MIGRATIONS"), true)?,
            session_backend,
            redis_url,
            session_ttl_secs,
            session_cookie_secure: parse_bool(
                "SESSION_COOKIE_SECURE",
                lookup("SESSION_COOKIE_SECURE"),
                false,
            )?,
            argon2: Argon2Settings {
                memory_kib: parse_or("ARGON2_MEMORY_KIB", lookup("ARGON2_MEMORY_KIB"), 4 * 1024)?,
                iterations: parse_or("ARGON2_ITERATIONS", lookup("ARGON2_ITERATIONS"), 3)?,
                parallelism: parse_or("ARGON2_PARALLELISM", lookup("ARGON2_PARALLELISM"), 1)?,
            },
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn parse_bool(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value }),
        },
    }
}
