//! Fixed advice lists per tier, most urgent first.

use crate::types::RiskTier;

const HIGH: [&str; 4] = [
  "Seek emergency medical care immediately.",
  "Do not drive yourself to the hospital.",
  "Chew an aspirin if available and not allergic.",
  "Try to stay calm and sit down.",
];

const MODERATE: [&str; 4] = [
  "Consult a cardiologist within 24 hours.",
  "Monitor your blood pressure and heart rate.",
  "Avoid physical exertion until consulted.",
  "Limit salt intake if experiencing swelling.",
];

const LOW: [&str; 4] = [
  "Monitor your symptoms for the next 3 days.",
  "Ensure you are staying well-hydrated.",
  "Maintain a regular sleep schedule.",
  "Reduce caffeine and stress levels.",
];

/// Advice lines for a tier, in display order.
pub fn advice_for(tier: RiskTier) -> &'static [&'static str] {
  match tier {
    RiskTier::High => &HIGH,
    RiskTier::Moderate => &MODERATE,
    RiskTier::Low => &LOW,
  }
}
