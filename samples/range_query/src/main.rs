//! Range Query Sample Entry Point
//!
//! Runs the sum and product demonstrations, then the differential check
//! against a brute-force fold.
//!
//! ```bash
//! RUST_LOG=range_query=debug RANGE_QUERY_MAX_LENGTH=40 cargo run
//! ```

use std::process::ExitCode;

use range_query::config::DemoConfig;
use range_query::demo::{run_differential_check, run_product_demo, run_sum_demo};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,range_query=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match DemoConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                "Configuration loaded: max_length={}, update_offset={}",
                config.max_length,
                config.update_offset
            );
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            DemoConfig::default()
        }
    };

    let outcome = run_sum_demo()
        .and_then(|_| run_product_demo())
        .and_then(|_| run_differential_check(&config));

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Range query sample failed: {e}");
            ExitCode::FAILURE
        }
    }
}
