//! Ordered triage rule table. Rules are evaluated top to bottom; the first
//! predicate that holds decides the tier. Order is the tie-break.

use crate::types::{RiskTier, SymptomReport};

/// One row of the decision table.
#[derive(Clone, Copy)]
pub struct Rule {
  /// Stable identifier, used in logs and tests.
  pub name: &'static str,
  pub tier: RiskTier,
  pub matches: fn(&SymptomReport) -> bool,
}

fn acute_cardiac(r: &SymptomReport) -> bool {
  r.chest_pain || (r.shortness_of_breath && r.serious_count() >= 2)
}

fn needs_cardiology(r: &SymptomReport) -> bool {
  r.total_count() >= 3 || r.palpitations || r.leg_swelling
}

fn fallback(_: &SymptomReport) -> bool {
  true
}

/// The decision table. The last row always matches.
pub const RULES: &[Rule] = &[
  Rule {
    name: "acute_cardiac",
    tier: RiskTier::High,
    matches: acute_cardiac,
  },
  Rule {
    name: "needs_cardiology",
    tier: RiskTier::Moderate,
    matches: needs_cardiology,
  },
  Rule {
    name: "monitor",
    tier: RiskTier::Low,
    matches: fallback,
  },
];

/// First rule in `rules` that matches `report`.
pub fn first_match<'a>(rules: &'a [Rule], report: &SymptomReport) -> Option<&'a Rule> {
  rules.iter().find(|rule| (rule.matches)(report))
}
