//! Binary entrypoint for the screening API.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use screening_api::{AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("screening_api=info".parse()?),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config = Config::from_env()?;
  let addr = config.bind_addr;
  tracing::info!(
    prediction_url = %config.prediction_url,
    symptom_delay_ms = config.symptom_delay.as_millis() as u64,
    "configuration loaded"
  );

  let state = Arc::new(AppState::from_config(config)?);
  let app = screening_api::router(state);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  tracing::info!("screening-api listening on http://{}", addr);
  axum::serve(listener, app).await?;

  Ok(())
}
