//! Symptom triage: six boolean symptoms in, a risk tier and fixed advice out.
//!
//! The tier comes from an ordered rule table (see [`RULES`]); the advice is looked
//! up per tier. Pure and total over every input combination.

mod advice;
mod rules;
mod types;

pub use advice::advice_for;
pub use rules::{Rule, RULES};
pub use types::{RiskTier, SymptomReport, TriageResult};

/// Name of the rule that decides `report`'s tier.
pub fn matched_rule(report: &SymptomReport) -> &'static str {
  rules::first_match(RULES, report)
    .map(|rule| rule.name)
    .unwrap_or("monitor")
}

/// Tier and advice for `report`.
pub fn assess(report: &SymptomReport) -> TriageResult {
  let risk_tier = rules::first_match(RULES, report)
    .map(|rule| rule.tier)
    .unwrap_or(RiskTier::Low);
  let advice = advice_for(risk_tier)
    .iter()
    .map(|line| line.to_string())
    .collect();

  TriageResult { risk_tier, advice }
}
