use thiserror::Error;

pub mod endpoint;
pub mod list;
pub mod pokemon;

pub use endpoint::{DEFAULT_API_BASE, FALLBACK_SPRITE_BASE, fallback_sprite_url, list_url, pokemon_url};
pub use list::{ListEntry, ListPage, parse_list_page};
pub use pokemon::{ApiPokemon, EntityRecord, Sprites, parse_entity_record};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}
