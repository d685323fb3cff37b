//! `doggo`: runs the pet behavior controller against a simulated scene.
//!
//! Scene views go to stdout as JSON lines; logs go to stderr.
use anyhow::Result;

use pet_client::{ClientConfig, Session, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::setup_logging()?;

    let config = ClientConfig::from_env();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let summary = Session::new(config).run(&mut out).await?;
    tracing::info!(?summary, "doggo exiting");

    Ok(())
}
