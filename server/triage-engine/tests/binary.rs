//! End-to-end tests for the `triage-engine` subprocess contract.

use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
  Command::cargo_bin("triage-engine").unwrap()
}

#[test]
fn report_on_stdin_yields_result_on_stdout() {
  let out = cmd()
    .write_stdin(r#"{"shortnessOfBreath": true, "palpitations": true}"#)
    .assert()
    .success()
    .get_output()
    .stdout
    .clone();

  let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
  assert_eq!(json["riskTier"], "High");
  assert_eq!(json["advice"][0], "Seek emergency medical care immediately.");
  assert_eq!(json["advice"].as_array().unwrap().len(), 4);
}

#[test]
fn empty_object_is_low() {
  cmd()
    .write_stdin("{}")
    .assert()
    .success()
    .stdout(contains(r#""riskTier":"Low""#));
}

#[test]
fn malformed_input_exits_with_failure() {
  cmd()
    .write_stdin("{not json")
    .assert()
    .code(1)
    .stdout("")
    .stderr(contains("invalid symptom report"));
}
