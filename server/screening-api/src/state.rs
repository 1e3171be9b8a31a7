//! Shared, read-only handler state.

use std::sync::Arc;

use crate::config::Config;
use crate::error::ApiError;
use crate::predictor::{HttpPredictor, Predictor};

pub struct AppState {
  pub config: Config,
  pub predictor: Arc<dyn Predictor>,
}

impl AppState {
  pub fn new(config: Config, predictor: Arc<dyn Predictor>) -> Self {
    Self { config, predictor }
  }

  /// State backed by the HTTP prediction client described in `config`.
  pub fn from_config(config: Config) -> Result<Self, ApiError> {
    let predictor = HttpPredictor::new(config.prediction_url.clone(), config.prediction_timeout)?;
    Ok(Self::new(config, Arc::new(predictor)))
  }
}
