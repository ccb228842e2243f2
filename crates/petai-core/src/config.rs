use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can pass a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("PETAI_ENV", "development"))?;

    let bind_addr = or_default("PETAI_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("PETAI_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("PETAI_LOG_LEVEL", "info");

    let places_api_key = lookup("PETAI_PLACES_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty());
    if places_api_key.is_none() && env == Environment::Production {
        return Err(ConfigError::MissingEnvVar("PETAI_PLACES_API_KEY".to_string()));
    }

    let places_base_url = or_default("PETAI_PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL);
    let places_language = or_default("PETAI_PLACES_LANGUAGE", "ja");
    let places_timeout_secs = or_default("PETAI_PLACES_TIMEOUT_SECS", "10")
        .parse::<u64>()
        .map_err(|e| invalid("PETAI_PLACES_TIMEOUT_SECS", e.to_string()))?;

    let search_radius_m = or_default("PETAI_SEARCH_RADIUS_M", "5000")
        .parse::<u32>()
        .map_err(|e| invalid("PETAI_SEARCH_RADIUS_M", e.to_string()))?;
    if search_radius_m == 0 {
        return Err(invalid(
            "PETAI_SEARCH_RADIUS_M",
            "radius must be greater than zero".to_string(),
        ));
    }

    let analytics_path = PathBuf::from(or_default(
        "PETAI_ANALYTICS_PATH",
        "./analytics-data.jsonl",
    ));

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        places_api_key,
        places_base_url,
        places_language,
        places_timeout_secs,
        search_radius_m,
        analytics_path,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PETAI_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
