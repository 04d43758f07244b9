//! URL construction for the PokeAPI resources the grid reads.

/// Public PokeAPI v2 root
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// Raw sprite repository used when a record carries no official artwork
pub const FALLBACK_SPRITE_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Listing endpoint: `{base}/pokemon?limit={limit}&offset={offset}`
pub fn list_url(api_base: &str, limit: u32, offset: u32) -> String {
    format!(
        "{}/pokemon?limit={}&offset={}",
        api_base.trim_end_matches('/'),
        limit,
        offset
    )
}

/// Detail resource for a single Pokemon id
pub fn pokemon_url(api_base: &str, id: u32) -> String {
    format!("{}/pokemon/{}", api_base.trim_end_matches('/'), id)
}

/// Sprite URL built from the Pokemon id alone
pub fn fallback_sprite_url(id: u32) -> String {
    format!("{}/{}.png", FALLBACK_SPRITE_BASE, id)
}
