//! Heart Screening API
//!
//! HTTP service that hosts the symptom triage engine, relays clinical records
//! to the external prediction service, and builds "find a cardiologist" links.
//! Stateless; bind to 127.0.0.1 by default (the UI's backend, not public).

pub mod clinical;
pub mod config;
pub mod error;
pub mod handlers;
pub mod latency;
pub mod locate;
pub mod predictor;
pub mod state;
pub mod types;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use config::Config;
pub use error::ApiError;
pub use predictor::{HttpPredictor, Predictor};
pub use state::AppState;
pub use types::{Assessment, AssessmentEnvelope, ClinicalAssessment, ClinicalRecord, ClinicalResult};

/// All routes, with permissive CORS for the browser UI.
pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(handlers::health))
    .route("/assess/symptoms", post(handlers::assess_symptoms))
    .route("/assess/clinical", post(handlers::assess_clinical))
    .route("/doctors/search-link", post(handlers::doctor_search_link))
    .layer(CorsLayer::permissive())
    .with_state(state)
}
