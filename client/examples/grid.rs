//! Grid Example
//!
//! Loads the first page of Pokemon and writes the rendered grid as HTML.
//!
//! Usage: `cargo run --example grid [OUTPUT]` (stdout when OUTPUT is omitted).
//! Configuration is read from `POKEGRID_*` environment variables.

use anyhow::Result;
use pokegrid_client::{Pokedex, PokedexConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = PokedexConfig::from_env()?;
    let pokedex = Pokedex::new(config);

    if let Err(e) = pokedex.load().await {
        eprintln!("Load failed: {}", e);
    }
    eprintln!("{}", pokedex.snapshot().status());

    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::write(&path, pokedex.to_html())?;
            tracing::info!(path = %path, "Grid written");
        }
        None => print!("{}", pokedex.to_html()),
    }

    Ok(())
}
