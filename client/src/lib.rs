//! Async PokeAPI client that loads Pokemon into a rendered card grid.
//!
//! A [`Pokedex`] runs load cycles: fetch the listing, fetch the selected
//! details concurrently, render them in list order and update the status line.
//!
//! ```ignore
//! let pokedex = Pokedex::new(PokedexConfig::shuffle());
//! pokedex.load().await?;
//! pokedex.shuffle().await?;
//! std::fs::write("pokedex.html", pokedex.to_html())?;
//! ```

pub mod config;
mod error;
pub mod fetch;
mod pokedex;
pub mod sample;
mod transport;

pub use config::{DEFAULT_PAGE_SIZE, DEFAULT_SAMPLE_SIZE, FETCH_ALL_LIMIT, PokedexConfig, Selection};
pub use error::{BadResponse, ConfigError, FetchError};
pub use pokedex::{CycleOutcome, Pokedex};
pub use transport::{HttpResponse, HttpTransport, Transport};

pub use pokegrid_card::{Card, Grid, Locale, Page, RenderOptions};
pub use pokegrid_protocol::{EntityRecord, ListEntry, ListPage};
