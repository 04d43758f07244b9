//! Shuffle Example
//!
//! Lists every Pokemon once, renders 25 at random, then reshuffles on each
//! line read from stdin. The page is rewritten after every cycle.
//!
//! Usage: `cargo run --example shuffle [OUTPUT]` (default: pokedex.html)

use std::sync::Arc;

use anyhow::Result;
use pokegrid_client::{CycleOutcome, Pokedex, PokedexConfig};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "pokedex.html".to_string());
    let config = PokedexConfig::shuffle().overlay_env()?;
    let pokedex = Arc::new(Pokedex::new(config));

    report(&pokedex, pokedex.load().await, &output)?;
    if pokedex.retained().is_none() {
        return Ok(());
    }

    println!("Press Enter to shuffle, Ctrl-D to quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let mut triggers = Vec::new();
    while lines.next_line().await?.is_some() {
        // Each trigger runs on its own task; a newer one supersedes the older
        let pokedex = Arc::clone(&pokedex);
        let output = output.clone();
        triggers.push(tokio::spawn(async move {
            let outcome = pokedex.shuffle().await;
            if let Err(e) = report(&pokedex, outcome, &output) {
                tracing::error!(error = %e, "Failed to write page");
            }
        }));
    }

    // Let in-flight reshuffles write their page before the runtime shuts down
    for trigger in triggers {
        trigger.await?;
    }

    Ok(())
}

fn report(
    pokedex: &Pokedex,
    outcome: Result<CycleOutcome, pokegrid_client::FetchError>,
    output: &str,
) -> Result<()> {
    match outcome.as_ref().map(CycleOutcome::rendered) {
        Ok(None) => return Ok(()),
        Ok(Some(count)) => tracing::debug!(count, "Reshuffle rendered"),
        Err(e) => eprintln!("Load failed: {}", e),
    }

    std::fs::write(output, pokedex.to_html())?;
    println!("{} -> {}", pokedex.snapshot().status(), output);
    Ok(())
}
