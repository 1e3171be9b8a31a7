//! `triage-engine` subprocess: one SymptomReport JSON object on stdin, one TriageResult on stdout.
//!
//! Exit status 1 with a message on stderr when stdin is not a symptom report.

use std::io::{self, Write};
use std::process::ExitCode;

use triage_engine::{assess, SymptomReport};

fn main() -> ExitCode {
  let report: SymptomReport = match serde_json::from_reader(io::stdin().lock()) {
    Ok(r) => r,
    Err(e) => {
      eprintln!("triage-engine: invalid symptom report: {e}");
      return ExitCode::FAILURE;
    }
  };

  let mut stdout = io::stdout().lock();
  let written = serde_json::to_writer(&mut stdout, &assess(&report))
    .map_err(io::Error::from)
    .and_then(|()| stdout.flush());
  match written {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("triage-engine: write failed: {e}");
      ExitCode::FAILURE
    }
  }
}
