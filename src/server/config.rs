use std::net::SocketAddr;

use axum::http::HeaderValue;

use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Origins allowed to make cross-origin requests to the admin API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*`, any origin may call the API
    Any,
    /// Only the listed origins may call the API
    List(Vec<HeaderValue>),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub cors_allowed_origins: CorsOrigins,
    /// When set, every `/api/admin` route requires `Authorization: Bearer <token>`
    pub admin_api_token: Option<String>,
}

impl Config {
    /// Reads configuration from the process environment
    ///
    /// # Environment
    /// - `DATABASE_URL` (required)
    /// - `BIND_ADDRESS` (default `0.0.0.0:8080`)
    /// - `CORS_ALLOWED_ORIGINS` (default `*`, otherwise a comma-separated list of origins)
    /// - `ADMIN_API_TOKEN` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds configuration from any variable lookup, blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let database_url =
            get("DATABASE_URL").ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = get("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let cors_allowed_origins = match get("CORS_ALLOWED_ORIGINS") {
            Some(origins) => parse_cors_origins(&origins)?,
            None => CorsOrigins::Any,
        };

        let admin_api_token = get("ADMIN_API_TOKEN").map(|token| token.trim().to_string());

        Ok(Self {
            database_url,
            bind_address,
            cors_allowed_origins,
            admin_api_token,
        })
    }
}

fn parse_cors_origins(value: &str) -> Result<CorsOrigins, ConfigError> {
    if value.trim() == "*" {
        return Ok(CorsOrigins::Any);
    }

    let origins = value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            if origin == "*" {
                return Err(ConfigError::InvalidEnvValue {
                    var: "CORS_ALLOWED_ORIGINS".to_string(),
                    reason: "`*` cannot be combined with other origins".to_string(),
                });
            }

            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvValue {
                var: "CORS_ALLOWED_ORIGINS".to_string(),
                reason: format!("{:?} is not a valid origin: {}", origin, e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsOrigins::List(origins))
}
