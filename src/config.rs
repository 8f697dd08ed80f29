// ===============================
// src/config.rs
// ===============================
use std::env;
use std::time::Duration;

use dotenvy::dotenv;

use crate::error::CliError;

const DEFAULT_API_URL: &str = "https://api.exchange.com";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API credentials, read once at process start and passed by parameter.
/// Business logic never touches the environment directly.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: Vec<u8>,
}

impl Credentials {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &[u8] {
        &self.api_secret
    }

    #[cfg(test)]
    pub fn from_parts(api_key: &str, api_secret: &[u8]) -> Self {
        Self {
            api_key: api_key.to_string(),
            api_secret: api_secret.to_vec(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub api_url: String,
    pub timeout: Duration,
}

/// Read `.env` plus the environment. Missing or empty credentials are fatal
/// before any request is attempted.
pub fn load() -> Result<(Credentials, Settings), CliError> {
    let _ = dotenv();

    let api_key = require_env("EXCHANGE_API_KEY")?;
    let api_secret = require_env("EXCHANGE_API_SECRET")?.into_bytes();

    let api_url = env::var("EXCHANGE_API_URL")
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
        .trim_end_matches('/')
        .to_string();

    let credentials = Credentials { api_key, api_secret };
    let settings = Settings {
        api_url,
        timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
    };
    Ok((credentials, settings))
}

fn require_env(key: &str) -> Result<String, CliError> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CliError::Config(format!("{key} missing"))),
    }
}
