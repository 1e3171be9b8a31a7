//! Client for the external clinical prediction service.
//!
//! The service is a collaborator: it owns the model and answers
//! `{prediction, probability, contributors?}` for one clinical record.
//! Every failure to obtain that answer maps to `ApiError::PredictionUnavailable`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::ApiError;
use crate::types::{ClinicalRecord, ClinicalResult};

/// Anything that can score a clinical record.
#[async_trait]
pub trait Predictor: Send + Sync {
  async fn predict(&self, record: &ClinicalRecord) -> Result<ClinicalResult, ApiError>;
}

/// Error body the prediction service sends with 4xx/5xx replies.
#[derive(Debug, Deserialize)]
struct ServiceError {
  error: String,
}

/// HTTP implementation: `POST {url}` with the record as JSON.
pub struct HttpPredictor {
  client: Client,
  url: String,
}

impl HttpPredictor {
  pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
    let client = Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|e| ApiError::config(format!("http client: {e}")))?;
    Ok(Self {
      client,
      url: url.into(),
    })
  }
}

#[async_trait]
impl Predictor for HttpPredictor {
  async fn predict(&self, record: &ClinicalRecord) -> Result<ClinicalResult, ApiError> {
    let response = self
      .client
      .post(&self.url)
      .json(record)
      .send()
      .await
      .map_err(|e| {
        if e.is_timeout() {
          ApiError::unavailable(format!("timed out calling {}", self.url))
        } else {
          ApiError::unavailable(format!("failed to reach {}: {e}", self.url))
        }
      })?;

    let status = response.status();
    if !status.is_success() {
      let detail = response
        .json::<ServiceError>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| "no detail".to_string());
      return Err(ApiError::unavailable(format!(
        "prediction service returned {status}: {detail}"
      )));
    }

    response
      .json::<ClinicalResult>()
      .await
      .map_err(|e| ApiError::unavailable(format!("unreadable prediction reply: {e}")))
  }
}
