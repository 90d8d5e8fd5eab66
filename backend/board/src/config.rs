use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

use crate::remote::sheet_url;

pub const SECRETS_DIR: &str = "/run/secrets";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {message}")]
    Invalid { key: &'static str, message: String },
}

pub fn var(key: &str) -> Option<String> {
    env::var(key)
        .map_err(|_| {
            warn!("Environment variable {key} not found");
        })
        .ok()
}

pub fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");

            ConfigError::Invalid {
                key,
                message: e.to_string(),
            }
        })
}

pub fn read_secret(secret_name: &str) -> Option<String> {
    let path = format!("{SECRETS_DIR}/{secret_name}");

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {secret_name} from file: {e}");
        })
        .ok()
}

/// Values URL from `SPREADSHEET_URL`, or built from id, range and API key.
pub fn load_sheet_url() -> Result<String, ConfigError> {
    if let Some(url) = env::var("SPREADSHEET_URL").ok().filter(|url| !url.is_empty()) {
        info!("Using SPREADSHEET_URL override");
        return Ok(url);
    }

    let spreadsheet_id = var("SPREADSHEET_ID").ok_or(ConfigError::Missing("SPREADSHEET_ID"))?;
    let range = var("SPREADSHEET_RANGE").ok_or(ConfigError::Missing("SPREADSHEET_RANGE"))?;
    let api_key = var("SPREADSHEET_API_KEY")
        .or_else(|| read_secret("SPREADSHEET_API_KEY"))
        .ok_or(ConfigError::Missing("SPREADSHEET_API_KEY"))?;

    Ok(sheet_url(&spreadsheet_id, &range, &api_key))
}
