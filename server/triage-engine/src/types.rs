//! Input/output types for the triage engine (JSON contract with the UI and the API).

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Input: one symptom checklist. Missing or null keys are `false`; unknown keys are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SymptomReport {
  #[serde(deserialize_with = "null_as_false")]
  pub chest_pain: bool,
  #[serde(deserialize_with = "null_as_false")]
  pub shortness_of_breath: bool,
  #[serde(deserialize_with = "null_as_false")]
  pub palpitations: bool,
  #[serde(deserialize_with = "null_as_false")]
  pub leg_swelling: bool,
  #[serde(deserialize_with = "null_as_false")]
  pub fatigue: bool,
  #[serde(deserialize_with = "null_as_false")]
  pub dizziness: bool,
}

fn null_as_false<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
  Ok(Option::<bool>::deserialize(d)?.unwrap_or(false))
}

impl SymptomReport {
  /// Number of serious symptoms reported (chest pain, shortness of breath, palpitations).
  pub fn serious_count(&self) -> usize {
    [self.chest_pain, self.shortness_of_breath, self.palpitations]
      .iter()
      .filter(|&&b| b)
      .count()
  }

  /// Number of symptoms reported, out of six.
  pub fn total_count(&self) -> usize {
    [
      self.chest_pain,
      self.shortness_of_breath,
      self.palpitations,
      self.leg_swelling,
      self.fatigue,
      self.dizziness,
    ]
    .iter()
    .filter(|&&b| b)
    .count()
  }
}

/// Severity tier. Ordering is by severity: `Low < Moderate < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
  Low,
  Moderate,
  High,
}

impl RiskTier {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Low => "Low",
      Self::Moderate => "Moderate",
      Self::High => "High",
    }
  }
}

impl fmt::Display for RiskTier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Output: one JSON object for the caller to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageResult {
  pub risk_tier: RiskTier,
  pub advice: Vec<String>,
}
