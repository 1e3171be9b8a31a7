//! Request/response types for the screening API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use triage_engine::{RiskTier, TriageResult};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Clinical record (JSON contract shared with the prediction service)
// ---------------------------------------------------------------------------

/// Thirteen clinical fields, named as the prediction service expects them.
///
/// Numbers may arrive as JSON numbers or numeric strings (HTML form values).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalRecord {
  /// Age in years.
  #[serde(deserialize_with = "lenient_int")]
  pub age: i64,
  /// 1 = male, 0 = female.
  #[serde(deserialize_with = "lenient_int")]
  pub sex: i64,
  /// Chest pain type: 0 typical angina, 1 atypical, 2 non-anginal, 3 asymptomatic.
  #[serde(deserialize_with = "lenient_int")]
  pub cp: i64,
  /// Resting blood pressure, mmHg.
  #[serde(deserialize_with = "lenient_int")]
  pub trestbps: i64,
  /// Serum cholesterol, mg/dl.
  #[serde(deserialize_with = "lenient_int")]
  pub chol: i64,
  /// Fasting blood sugar > 120 mg/dl.
  #[serde(deserialize_with = "lenient_int")]
  pub fbs: i64,
  /// Resting ECG: 0 normal, 1 ST-T abnormality, 2 LV hypertrophy.
  #[serde(deserialize_with = "lenient_int")]
  pub restecg: i64,
  /// Maximum heart rate achieved.
  #[serde(deserialize_with = "lenient_int")]
  pub thalach: i64,
  /// Exercise-induced angina.
  #[serde(deserialize_with = "lenient_int")]
  pub exang: i64,
  /// ST depression induced by exercise relative to rest.
  #[serde(deserialize_with = "lenient_float")]
  pub oldpeak: f64,
  /// Slope of peak exercise ST segment: 0 up, 1 flat, 2 down.
  #[serde(deserialize_with = "lenient_int")]
  pub slope: i64,
  /// Major vessels colored by fluoroscopy, 0-3.
  #[serde(deserialize_with = "lenient_int")]
  pub ca: i64,
  /// Thalassemia: 0 normal, 1 fixed defect, 2 reversible defect.
  #[serde(deserialize_with = "lenient_int")]
  pub thal: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
  Int(i64),
  Float(f64),
  Text(String),
}

fn lenient_int<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
  match NumberOrText::deserialize(d)? {
    NumberOrText::Int(v) => Ok(v),
    NumberOrText::Float(v) if v.fract() == 0.0 && v.is_finite() => Ok(v as i64),
    NumberOrText::Float(v) => Err(serde::de::Error::custom(format!("expected integer, got {v}"))),
    NumberOrText::Text(s) => s
      .trim()
      .parse()
      .map_err(|_| serde::de::Error::custom(format!("expected integer, got {s:?}"))),
  }
}

fn lenient_float<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
  match NumberOrText::deserialize(d)? {
    NumberOrText::Int(v) => Ok(v as f64),
    NumberOrText::Float(v) => Ok(v),
    NumberOrText::Text(s) => s
      .trim()
      .parse()
      .map_err(|_| serde::de::Error::custom(format!("expected number, got {s:?}"))),
  }
}

/// Reply from the prediction service. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalResult {
  pub prediction: i64,
  pub probability: f64,
  #[serde(default)]
  pub contributors: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Assessment (output union)
// ---------------------------------------------------------------------------

/// Model-backed result, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalAssessment {
  pub positive: bool,
  pub label: String,
  /// Banner line shown above the guidance.
  pub summary: String,
  /// Probability of disease, 0..1, as returned by the model.
  pub probability: f64,
  /// Confidence in the displayed label, percent with one decimal.
  pub confidence: f64,
  pub contributors: Vec<String>,
  pub guidance: Vec<String>,
}

/// One of the two assessment modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Assessment {
  Clinical(ClinicalAssessment),
  Symptom(TriageResult),
}

impl Assessment {
  /// Whether the UI should offer the "find a cardiologist" action.
  pub fn offers_doctor_search(&self) -> bool {
    match self {
      Self::Clinical(c) => c.positive,
      Self::Symptom(s) => s.risk_tier >= RiskTier::Moderate,
    }
  }
}

/// Response wrapper; built fresh per request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentEnvelope {
  pub assessment_id: Uuid,
  pub assessed_at: DateTime<Utc>,
  pub offer_doctor_search: bool,
  pub assessment: Assessment,
}

impl AssessmentEnvelope {
  pub fn new(assessment: Assessment) -> Self {
    Self {
      assessment_id: Uuid::new_v4(),
      assessed_at: Utc::now(),
      offer_doctor_search: assessment.offers_doctor_search(),
      assessment,
    }
  }
}

// ---------------------------------------------------------------------------
// Doctor search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
  pub latitude: f64,
  pub longitude: f64,
}

/// Coordinates are absent when the device could not (or would not) locate itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchLinkRequest {
  #[serde(default)]
  pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchLinkResponse {
  pub url: String,
  pub geolocated: bool,
}
