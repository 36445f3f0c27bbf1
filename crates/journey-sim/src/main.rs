//! Journey Through Scripture session driver entry point.

use std::io::Write;

use journey_core::clock::SystemClock;
use journey_core::rng::SeededRng;
use journey_sim::config::SimConfig;
use journey_sim::error::AppError;
use journey_sim::session::run_session;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Journey Through Scripture session");

    let config = SimConfig::from_env()?;
    let mut rng = match config.rng_seed {
        Some(seed) => SeededRng::from_seed_u64(seed),
        None => SeededRng::from_entropy(),
    };

    let report = run_session(&config, &SystemClock, &mut rng).await?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;
    Ok(())
}
