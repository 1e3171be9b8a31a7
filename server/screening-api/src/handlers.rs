//! HTTP handlers for the screening API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;
use std::sync::Arc;
use triage_engine::SymptomReport;

use crate::clinical;
use crate::error::ApiError;
use crate::latency::simulate_latency;
use crate::locate;
use crate::state::AppState;
use crate::types::{Assessment, AssessmentEnvelope, SearchLinkRequest, SearchLinkResponse};

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
  payload
    .map(|Json(v)| v)
    .map_err(|e| ApiError::validation("body", &e.body_text()))
}

pub async fn health() -> &'static str {
  "ok"
}

pub async fn assess_symptoms(
  State(state): State<Arc<AppState>>,
  payload: Result<Json<SymptomReport>, JsonRejection>,
) -> Result<Json<AssessmentEnvelope>, ApiError> {
  let report = body(payload)?;
  let result = triage_engine::assess(&report);
  tracing::info!(
    rule = triage_engine::matched_rule(&report),
    tier = %result.risk_tier,
    symptoms = report.total_count(),
    "symptom assessment"
  );

  let result = simulate_latency(state.config.symptom_delay, result).await;
  Ok(Json(AssessmentEnvelope::new(Assessment::Symptom(result))))
}

pub async fn assess_clinical(
  State(state): State<Arc<AppState>>,
  payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AssessmentEnvelope>, ApiError> {
  let record = match body(payload).and_then(clinical::parse_record) {
    Ok(r) => r,
    Err(e) => {
      tracing::info!(error = %e, "clinical record rejected");
      return Err(e);
    }
  };
  if let Err(e) = clinical::validate(&record) {
    tracing::info!(error = %e, "clinical record rejected");
    return Err(e);
  }

  let reply = match state.predictor.predict(&record).await {
    Ok(r) => r,
    Err(e) => {
      tracing::warn!(error = %e, "prediction call failed");
      return Err(e);
    }
  };
  let assessment = clinical::interpret(reply).map_err(|e| {
    tracing::warn!(error = %e, "prediction reply rejected");
    e
  })?;
  tracing::info!(
    positive = assessment.positive,
    confidence = assessment.confidence,
    "clinical assessment"
  );

  Ok(Json(AssessmentEnvelope::new(Assessment::Clinical(assessment))))
}

pub async fn doctor_search_link(
  State(state): State<Arc<AppState>>,
  payload: Result<Json<SearchLinkRequest>, JsonRejection>,
) -> Json<SearchLinkResponse> {
  // A malformed body degrades to the generic link rather than blocking the user.
  let request = body(payload).unwrap_or_default();
  let link = locate::cardiologist_search_link(&state.config.maps_search_base, request.coordinates);
  tracing::debug!(geolocated = link.geolocated, "doctor search link");
  Json(link)
}
