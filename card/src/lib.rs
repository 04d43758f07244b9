//! Card rendering and page model for the Pokemon grid.
//!
//! This crate turns fetched records into HTML fragments and keeps the
//! document they are appended to.
//!
//! # Overview
//!
//! `pokegrid-card` sits between `pokegrid-protocol` (wire format) and the
//! fetching client:
//!
//! ```text
//! pokegrid-protocol (wire format + EntityRecord)
//!        │
//!        ▼
//! pokegrid-card (formatting + render + page) ← THIS CRATE
//!        │
//!        ▼
//! pokegrid-client (fetch + orchestration)
//! ```
//!
//! # Main Types
//!
//! - [`Card`] - One rendered fragment
//! - [`RenderOptions`] - What a card shows and where its link points
//! - [`Grid`] - The `#grid` container cards are appended to
//! - [`Page`] - Grid, `#status` line and optional `#shuffle` trigger
//! - [`Locale`] - Status and label strings
//! - [`Type`] - Known Pokemon types, used for badge colours
//!
//! # Example Usage
//!
//! ```ignore
//! use pokegrid_card::{Locale, Page, RenderOptions, render_card};
//!
//! let mut page = Page::new(Locale::English, false);
//! page.grid_mut().append(render_card(&record, &RenderOptions::default()));
//! page.set_status(Locale::English.loaded(1));
//! std::fs::write("grid.html", page.to_html())?;
//! ```

pub mod format;
pub mod locale;
pub mod page;
pub mod pokemon_type;
pub mod render;

pub use format::{decimetric, escape_html, title_case};
pub use locale::Locale;
pub use page::{Grid, Page};
pub use pokemon_type::Type;
pub use render::{Card, RenderOptions, image_url, render_card};

// Re-export the record the renderer consumes
pub use pokegrid_protocol::{EntityRecord, Sprites};
