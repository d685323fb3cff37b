//! Tracing setup for the host binary.
use anyhow::{Result, anyhow};

/// Install a stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// Stdout stays reserved for scene views.
pub fn setup_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
