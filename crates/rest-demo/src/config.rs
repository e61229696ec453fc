//! Server configuration.

use std::env;
use std::path::PathBuf;

use common::{JwtConfig, ServiceConfig};
use domain::{DEFAULT_JWT_EXPIRATION_HOURS, MIN_JWT_SECRET_LENGTH};

/// Development fallback for `JWT_SECRET`
const DEV_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub service: ServiceConfig,
    pub jwt: JwtConfig,
    /// Seed document for the in-memory stores; built-in demo data when unset
    pub seed_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = ServiceConfig::default();

        let secret = match env::var("JWT_SECRET") {
            Ok(secret) if secret.len() >= MIN_JWT_SECRET_LENGTH => secret,
            Ok(_) => {
                tracing::warn!(
                    "JWT_SECRET shorter than {} characters, using insecure development default",
                    MIN_JWT_SECRET_LENGTH
                );
                DEV_JWT_SECRET.to_string()
            }
            Err(_) => {
                tracing::warn!("JWT_SECRET not set, using insecure development default");
                DEV_JWT_SECRET.to_string()
            }
        };

        Self {
            service: ServiceConfig {
                host: env::var("SERVER_HOST").unwrap_or(defaults.host),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.port),
                log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
                service_name: defaults.service_name,
            },
            jwt: JwtConfig {
                secret,
                expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                    .ok()
                    .and_then(|h| h.parse().ok())
                    .unwrap_or(DEFAULT_JWT_EXPIRATION_HOURS),
            },
            seed_path: env::var("SEED_PATH").ok().map(PathBuf::from),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            jwt: JwtConfig {
                secret: DEV_JWT_SECRET.to_string(),
                expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
            },
            seed_path: None,
        }
    }
}
