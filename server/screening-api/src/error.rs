//! Structured error types for the screening API.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },

  /// The prediction service could not produce a usable answer. Never mapped to a risk tier.
  #[error("prediction unavailable: {0}")]
  PredictionUnavailable(String),

  #[error("config: {0}")]
  Config(String),
}

impl ApiError {
  pub fn validation(field: &str, reason: &str) -> Self {
    Self::Validation {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn unavailable(msg: impl Into<String>) -> Self {
    Self::PredictionUnavailable(msg.into())
  }

  pub fn config(msg: impl Into<String>) -> Self {
    Self::Config(msg.into())
  }

  /// Machine-readable discriminator for the UI.
  pub fn kind(&self) -> &'static str {
    match self {
      Self::Validation { .. } => "validation",
      Self::PredictionUnavailable(_) => "prediction_unavailable",
      Self::Config(_) => "config",
    }
  }

  pub fn status(&self) -> StatusCode {
    match self {
      Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
      Self::PredictionUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
      Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// Error body returned to the UI.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub kind: &'static str,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl From<&ApiError> for ErrorOutput {
  fn from(e: &ApiError) -> Self {
    let (message, field) = match e {
      ApiError::Validation { field, reason } => (reason.clone(), Some(field.clone())),
      ApiError::PredictionUnavailable(_) => (
        "Prediction is unavailable right now. Please try again later.".to_string(),
        None,
      ),
      ApiError::Config(_) => ("Service misconfigured.".to_string(), None),
    };
    Self {
      error: true,
      kind: e.kind(),
      message,
      field,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    (self.status(), Json(ErrorOutput::from(&self))).into_response()
  }
}
