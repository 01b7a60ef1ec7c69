// Application configuration loaded from the environment

use thiserror::Error;

/// Deployment environment, read from APP_ENV
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn from_env() -> Self {
        match std::env::var("APP_ENV") {
            Ok(value) if value.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }
}

/// Configuration error for missing or malformed environment variables
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set in environment")]
    MissingVar(&'static str),

    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Runtime configuration, collected once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub environment: Environment,
}

impl AppConfig {
    /// Read configuration from the environment
    ///
    /// DATABASE_URL and JWT_SECRET are required; HOST, PORT and APP_ENV
    /// fall back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        let port = port
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port))?;

        Ok(Self {
            host,
            port,
            database_url,
            jwt_secret,
            environment: Environment::from_env(),
        })
    }

    /// Whether session cookies should carry the Secure attribute
    ///
    /// Only enabled in production, where the app is served over HTTPS.
    pub fn cookie_secure(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
