//! Clinical record validation and interpretation of prediction replies.

use serde_json::Value;

use crate::error::ApiError;
use crate::types::{ClinicalAssessment, ClinicalRecord, ClinicalResult};

/// Wire names of the thirteen clinical fields, in form order.
pub const FIELDS: [&str; 13] = [
  "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak",
  "slope", "ca", "thal",
];

/// Contributing factors shown for a positive prediction, at most.
pub const MAX_CONTRIBUTORS: usize = 3;

const POSITIVE_SUMMARY: &str = "Immediate Attention Recommended";

const POSITIVE_GUIDANCE: &str =
  "Our analysis suggests a high probability of heart disease. Please consult a specialist immediately.";

const NEGATIVE_SUMMARY: &str =
  "Great news! Your indicators suggest a low risk of heart disease. Keep up the healthy lifestyle.";

const NEGATIVE_GUIDANCE: [&str; 5] = [
  "Maintain a balanced diet rich in fruits and vegetables.",
  "Exercise regularly (at least 30 mins a day).",
  "Avoid smoking and limit alcohol consumption.",
  "Manage stress through yoga or meditation.",
  "Monitor your blood pressure and cholesterol periodically.",
];

fn check_range(field: &str, value: i64, min: i64, max: i64) -> Result<(), ApiError> {
  if value < min || value > max {
    return Err(ApiError::validation(
      field,
      &format!("must be between {min} and {max}, got {value}"),
    ));
  }
  Ok(())
}

/// Decode a request body into a record, naming the first bad field.
///
/// Missing, null and blank values are reported as required; type mismatches carry
/// the field path from the decoder.
pub fn parse_record(body: Value) -> Result<ClinicalRecord, ApiError> {
  let obj = body
    .as_object()
    .ok_or_else(|| ApiError::validation("body", "expected a JSON object"))?;
  for field in FIELDS {
    let blank = match obj.get(field) {
      None | Some(Value::Null) => true,
      Some(Value::String(s)) => s.trim().is_empty(),
      Some(_) => false,
    };
    if blank {
      return Err(ApiError::validation(field, "is required"));
    }
  }

  serde_path_to_error::deserialize::<_, ClinicalRecord>(body).map_err(|err| {
    let path = err.path().to_string();
    let field = if path.is_empty() || path == "." {
      "body".to_string()
    } else {
      path
    };
    ApiError::validation(&field, &err.into_inner().to_string())
  })
}

/// Reject records the prediction service cannot meaningfully score.
pub fn validate(rec: &ClinicalRecord) -> Result<(), ApiError> {
  check_range("age", rec.age, 1, 120)?;
  check_range("sex", rec.sex, 0, 1)?;
  check_range("cp", rec.cp, 0, 3)?;
  check_range("trestbps", rec.trestbps, 1, 300)?;
  check_range("chol", rec.chol, 1, 1000)?;
  check_range("fbs", rec.fbs, 0, 1)?;
  check_range("restecg", rec.restecg, 0, 2)?;
  check_range("thalach", rec.thalach, 1, 250)?;
  check_range("exang", rec.exang, 0, 1)?;
  if !rec.oldpeak.is_finite() || rec.oldpeak < 0.0 || rec.oldpeak > 10.0 {
    return Err(ApiError::validation(
      "oldpeak",
      &format!("must be between 0 and 10, got {}", rec.oldpeak),
    ));
  }
  check_range("slope", rec.slope, 0, 2)?;
  check_range("ca", rec.ca, 0, 3)?;
  check_range("thal", rec.thal, 0, 2)?;
  Ok(())
}

/// Turn a prediction reply into a renderable assessment.
///
/// A malformed reply is a service fault, so it surfaces as `PredictionUnavailable`
/// rather than being guessed into a result.
pub fn interpret(result: ClinicalResult) -> Result<ClinicalAssessment, ApiError> {
  let positive = match result.prediction {
    0 => false,
    1 => true,
    other => {
      return Err(ApiError::unavailable(format!(
        "prediction label {other} is not 0 or 1"
      )))
    }
  };
  if !(0.0..=1.0).contains(&result.probability) {
    return Err(ApiError::unavailable(format!(
      "probability {} outside [0, 1]",
      result.probability
    )));
  }

  let shown = if positive {
    result.probability
  } else {
    1.0 - result.probability
  };
  let confidence = (shown * 1000.0).round() / 10.0;

  let contributors = if positive {
    result
      .contributors
      .unwrap_or_default()
      .into_iter()
      .filter(|c| !c.trim().is_empty())
      .take(MAX_CONTRIBUTORS)
      .collect()
  } else {
    Vec::new()
  };

  let (label, summary, guidance) = if positive {
    (
      "High Risk Detected",
      POSITIVE_SUMMARY,
      vec![POSITIVE_GUIDANCE.to_string()],
    )
  } else {
    (
      "Low Risk Detected",
      NEGATIVE_SUMMARY,
      NEGATIVE_GUIDANCE.iter().map(|s| s.to_string()).collect(),
    )
  };

  Ok(ClinicalAssessment {
    positive,
    label: label.to_string(),
    summary: summary.to_string(),
    probability: result.probability,
    confidence,
    contributors,
    guidance,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_record() -> ClinicalRecord {
    ClinicalRecord {
      age: 63,
      sex: 1,
      cp: 3,
      trestbps: 145,
      chol: 233,
      fbs: 1,
      restecg: 0,
      thalach: 150,
      exang: 0,
      oldpeak: 2.3,
      slope: 0,
      ca: 0,
      thal: 1,
    }
  }

  fn form_body() -> Value {
    serde_json::json!({
      "age": "63", "sex": "1", "cp": "3", "trestbps": "145", "chol": "233",
      "fbs": "1", "restecg": "0", "thalach": "150", "exang": "0",
      "oldpeak": "2.3", "slope": "0", "ca": "0", "thal": "1"
    })
  }

  fn field_of(err: ApiError) -> String {
    match err {
      ApiError::Validation { field, .. } => field,
      other => panic!("expected validation error, got {other:?}"),
    }
  }

  #[test]
  fn form_body_parses() {
    assert_eq!(parse_record(form_body()).unwrap(), sample_record());
  }

  #[test]
  fn blank_form_value_names_its_field() {
    let mut body = form_body();
    body["age"] = "".into();
    assert_eq!(field_of(parse_record(body).unwrap_err()), "age");

    let mut body = form_body();
    body["oldpeak"] = "  ".into();
    assert_eq!(field_of(parse_record(body).unwrap_err()), "oldpeak");
  }

  #[test]
  fn missing_or_null_key_names_its_field() {
    let mut body = form_body();
    body.as_object_mut().unwrap().remove("thal");
    assert_eq!(field_of(parse_record(body).unwrap_err()), "thal");

    let mut body = form_body();
    body["chol"] = Value::Null;
    assert_eq!(field_of(parse_record(body).unwrap_err()), "chol");
  }

  #[test]
  fn non_numeric_value_names_its_field() {
    let mut body = form_body();
    body["thalach"] = "fast".into();
    let err = parse_record(body).unwrap_err();
    assert!(err.to_string().contains("fast"));
    assert_eq!(field_of(err), "thalach");
  }

  #[test]
  fn non_object_body_is_rejected() {
    assert_eq!(field_of(parse_record(serde_json::json!([1, 2])).unwrap_err()), "body");
  }

  #[test]
  fn valid_record_passes() {
    assert!(validate(&sample_record()).is_ok());
  }

  fn assert_rejects(field: &str, mutate: impl Fn(&mut ClinicalRecord)) {
    let mut rec = sample_record();
    mutate(&mut rec);
    match validate(&rec) {
      Err(ApiError::Validation { field: f, .. }) => assert_eq!(f, field),
      other => panic!("{field}: expected validation error, got {other:?}"),
    }
  }

  #[test]
  fn each_out_of_range_field_is_named() {
    assert_rejects("age", |r| r.age = 0);
    assert_rejects("sex", |r| r.sex = 2);
    assert_rejects("cp", |r| r.cp = 4);
    assert_rejects("trestbps", |r| r.trestbps = -1);
    assert_rejects("chol", |r| r.chol = 5000);
    assert_rejects("fbs", |r| r.fbs = 3);
    assert_rejects("restecg", |r| r.restecg = 3);
    assert_rejects("thalach", |r| r.thalach = 0);
    assert_rejects("exang", |r| r.exang = -1);
    assert_rejects("oldpeak", |r| r.oldpeak = f64::NAN);
    assert_rejects("oldpeak", |r| r.oldpeak = -0.5);
    assert_rejects("slope", |r| r.slope = 3);
    assert_rejects("ca", |r| r.ca = 4);
    assert_rejects("thal", |r| r.thal = 3);
  }

  #[test]
  fn positive_keeps_top_three_contributors() {
    let out = interpret(ClinicalResult {
      prediction: 1,
      probability: 0.876,
      contributors: Some(vec![
        "Chest Pain".into(),
        "Thalassemia".into(),
        "Major Vessels".into(),
        "Age".into(),
      ]),
    })
    .unwrap();
    assert!(out.positive);
    assert_eq!(out.label, "High Risk Detected");
    assert_eq!(out.confidence, 87.6);
    assert_eq!(out.contributors, vec!["Chest Pain", "Thalassemia", "Major Vessels"]);
    assert_eq!(out.summary, "Immediate Attention Recommended");
    assert_eq!(out.guidance.len(), 1);
  }

  #[test]
  fn negative_shows_complement_and_drops_contributors() {
    let out = interpret(ClinicalResult {
      prediction: 0,
      probability: 0.2,
      contributors: Some(vec!["Age".into()]),
    })
    .unwrap();
    assert!(!out.positive);
    assert_eq!(out.label, "Low Risk Detected");
    assert_eq!(out.confidence, 80.0);
    assert!(out.contributors.is_empty());
    assert!(out.summary.starts_with("Great news!"));
    assert_eq!(
      out.guidance,
      vec![
        "Maintain a balanced diet rich in fruits and vegetables.",
        "Exercise regularly (at least 30 mins a day).",
        "Avoid smoking and limit alcohol consumption.",
        "Manage stress through yoga or meditation.",
        "Monitor your blood pressure and cholesterol periodically.",
      ]
    );
  }

  #[test]
  fn malformed_reply_is_unavailable() {
    let bad_prob = interpret(ClinicalResult {
      prediction: 1,
      probability: 1.5,
      contributors: None,
    })
    .unwrap_err();
    assert_eq!(bad_prob.kind(), "prediction_unavailable");

    let bad_label = interpret(ClinicalResult {
      prediction: 2,
      probability: 0.5,
      contributors: None,
    })
    .unwrap_err();
    assert_eq!(bad_label.kind(), "prediction_unavailable");
  }
}
