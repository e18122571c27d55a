use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Field defaults applied while normalizing a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDefaults {
    pub location: String,
    pub date_since_posted: String,
    pub sort_by: String,
    /// Result limit for a single search.
    pub search_limit: u32,
    /// Result limit per item of a batch search.
    pub batch_limit: u32,
    pub page: u32,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            location: "India".to_string(),
            date_since_posted: "past week".to_string(),
            sort_by: "recent".to_string(),
            search_limit: 10,
            batch_limit: 5,
            page: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub provider_url: String,
    pub provider_timeout: Duration,
    pub batch_pacing: Duration,
    pub inbound_rps: u32,
    pub json_logs: bool,
    pub defaults: SearchDefaults,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let fallback = SearchDefaults::default();
        let defaults = SearchDefaults {
            location: get_env_or("DEFAULT_LOCATION", &fallback.location),
            date_since_posted: get_env_or("DEFAULT_DATE_SINCE_POSTED", &fallback.date_since_posted),
            sort_by: get_env_or("DEFAULT_SORT_BY", &fallback.sort_by),
            ..fallback
        };

        Ok(Self {
            host: get_env_or("HOST", "0.0.0.0"),
            port: get_env_parse_or("PORT", 3001)?,
            provider_url: get_env_or("JOB_PROVIDER_URL", "http://localhost:8080"),
            provider_timeout: Duration::from_secs(get_env_parse_or("PROVIDER_TIMEOUT_SECS", 30)?),
            batch_pacing: Duration::from_millis(get_env_parse_or("BATCH_PACING_MS", 500)?),
            inbound_rps: get_env_parse_or("INBOUND_RPS", 20)?,
            json_logs: get_env_or("LOG_FORMAT", "text").eq_ignore_ascii_case("json"),
            defaults,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(default),
    }
}
