//! Service configuration from the environment, with sane defaults.

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::ApiError;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5005";
pub const DEFAULT_PREDICTION_URL: &str = "http://localhost:5000/predict";
pub const DEFAULT_MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search";

/// Runtime settings. Read once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Config {
  pub bind_addr: SocketAddr,
  /// Endpoint of the external clinical prediction service.
  pub prediction_url: String,
  pub prediction_timeout: Duration,
  /// Presentation delay before a symptom assessment is returned. Zero disables it.
  pub symptom_delay: Duration,
  /// Map search base URL used for doctor deep links.
  pub maps_search_base: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: SocketAddr::from(([127, 0, 0, 1], 5005)),
      prediction_url: DEFAULT_PREDICTION_URL.to_string(),
      prediction_timeout: Duration::from_secs(10),
      symptom_delay: Duration::ZERO,
      maps_search_base: DEFAULT_MAPS_SEARCH_BASE.to_string(),
    }
  }
}

impl Config {
  /// Read `SCREENING_*` variables from the process environment.
  pub fn from_env() -> Result<Self, ApiError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build from any key lookup; unset keys keep their defaults.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut cfg = Self::default();

    if let Some(addr) = lookup("SCREENING_BIND_ADDR") {
      cfg.bind_addr = addr
        .parse()
        .map_err(|_| ApiError::config(format!("SCREENING_BIND_ADDR: invalid address {addr}")))?;
    }
    if let Some(url) = lookup("SCREENING_PREDICTION_URL") {
      if url.trim().is_empty() {
        return Err(ApiError::config("SCREENING_PREDICTION_URL: empty"));
      }
      cfg.prediction_url = url;
    }
    if let Some(ms) = lookup("SCREENING_PREDICTION_TIMEOUT_MS") {
      cfg.prediction_timeout = parse_millis("SCREENING_PREDICTION_TIMEOUT_MS", &ms)?;
    }
    if let Some(ms) = lookup("SCREENING_SYMPTOM_DELAY_MS") {
      cfg.symptom_delay = parse_millis("SCREENING_SYMPTOM_DELAY_MS", &ms)?;
    }
    if let Some(base) = lookup("SCREENING_MAPS_SEARCH_BASE") {
      cfg.maps_search_base = base.trim_end_matches('/').to_string();
    }

    Ok(cfg)
  }
}

fn parse_millis(key: &str, raw: &str) -> Result<Duration, ApiError> {
  raw
    .trim()
    .parse::<u64>()
    .map(Duration::from_millis)
    .map_err(|_| ApiError::config(format!("{key}: expected milliseconds, got {raw}")))
}
