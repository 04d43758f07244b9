//! Load-cycle configuration: presets plus environment overrides.
use std::env;
use std::str::FromStr;

use pokegrid_card::{Locale, RenderOptions};
use pokegrid_protocol::DEFAULT_API_BASE;

use crate::error::ConfigError;

/// Size of the random subset drawn by the shuffle preset
pub const DEFAULT_SAMPLE_SIZE: usize = 25;

/// Page size of the grid preset
pub const DEFAULT_PAGE_SIZE: u32 = 24;

/// Limit large enough to list every Pokemon in one request
pub const FETCH_ALL_LIMIT: u32 = 100_000;

/// Which list entries a load cycle fetches details for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Every entry, appended after the cards already on the page
    All,
    /// `n` distinct entries drawn at random, replacing the grid
    Random(usize),
}

impl Selection {
    pub fn is_random(&self) -> bool {
        matches!(self, Selection::Random(_))
    }
}

/// Configuration of a [`Pokedex`](crate::Pokedex)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokedexConfig {
    pub api_base: String,
    pub limit: u32,
    pub offset: u32,
    pub selection: Selection,
    pub locale: Locale,
    pub show_measurements: bool,
    pub show_abilities: bool,
    /// Fixed seed for the subset sampler; entropy when `None`
    pub seed: Option<u64>,
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self::grid()
    }
}

impl PokedexConfig {
    /// First page of 24, appended in list order
    pub fn grid() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
            selection: Selection::All,
            locale: Locale::English,
            show_measurements: false,
            show_abilities: false,
            seed: None,
        }
    }

    /// Whole listing, 25 random entries per cycle, Spanish labels
    pub fn shuffle() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            limit: FETCH_ALL_LIMIT,
            offset: 0,
            selection: Selection::Random(DEFAULT_SAMPLE_SIZE),
            locale: Locale::Spanish,
            show_measurements: true,
            show_abilities: false,
            seed: None,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_page(mut self, limit: u32, offset: u32) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_measurements(mut self, show: bool) -> Self {
        self.show_measurements = show;
        self
    }

    pub fn with_abilities(mut self, show: bool) -> Self {
        self.show_abilities = show;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Subset size used by a shuffle, even when the configured selection is `All`
    pub fn sample_size(&self) -> usize {
        match self.selection {
            Selection::Random(n) => n,
            Selection::All => DEFAULT_SAMPLE_SIZE,
        }
    }

    /// Options handed to the card renderer
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            locale: self.locale,
            show_measurements: self.show_measurements,
            show_abilities: self.show_abilities,
            link_base: self.api_base.clone(),
        }
    }

    /// Default preset overlaid with process environment variables.
    ///
    /// Environment variables:
    /// - `POKEGRID_API_BASE` - API root (default: https://pokeapi.co/api/v2)
    /// - `POKEGRID_LIMIT` - List page size (default: 24)
    /// - `POKEGRID_OFFSET` - List offset (default: 0)
    /// - `POKEGRID_SAMPLE` - Random subset size, `0` renders the whole page
    /// - `POKEGRID_LOCALE` - `en` or `es` (default: en)
    /// - `POKEGRID_MEASUREMENTS` - Show height/weight (default: false)
    /// - `POKEGRID_ABILITIES` - Show abilities (default: false)
    /// - `POKEGRID_SEED` - Fixed sampler seed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().overlay_env()
    }

    /// Apply environment overrides on top of `self`
    pub fn overlay_env(self) -> Result<Self, ConfigError> {
        self.overlay(|key| env::var(key).ok())
    }

    fn overlay(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(api_base) = lookup("POKEGRID_API_BASE") {
            let api_base = api_base.trim();
            if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    key: "POKEGRID_API_BASE",
                    value: api_base.to_string(),
                    reason: "expected an http(s) URL".to_string(),
                });
            }
            self.api_base = api_base.to_string();
        }

        if let Some(limit) = parse_var::<u32>(&lookup, "POKEGRID_LIMIT")? {
            self.limit = limit;
        }

        if let Some(offset) = parse_var::<u32>(&lookup, "POKEGRID_OFFSET")? {
            self.offset = offset;
        }

        if let Some(sample) = parse_var::<usize>(&lookup, "POKEGRID_SAMPLE")? {
            self.selection = match sample {
                0 => Selection::All,
                n => Selection::Random(n),
            };
        }

        if let Some(code) = lookup("POKEGRID_LOCALE") {
            self.locale = Locale::from_code(&code).ok_or_else(|| ConfigError::InvalidValue {
                key: "POKEGRID_LOCALE",
                value: code.clone(),
                reason: "expected \"en\" or \"es\"".to_string(),
            })?;
        }

        if let Some(show) = parse_var::<bool>(&lookup, "POKEGRID_MEASUREMENTS")? {
            self.show_measurements = show;
        }

        if let Some(show) = parse_var::<bool>(&lookup, "POKEGRID_ABILITIES")? {
            self.show_abilities = show;
        }

        if let Some(seed) = parse_var::<u64>(&lookup, "POKEGRID_SEED")? {
            self.seed = Some(seed);
        }

        Ok(self)
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };

    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value,
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_presets() {
        let grid = PokedexConfig::grid();
        assert_eq!(grid.limit, 24);
        assert_eq!(grid.selection, Selection::All);
        assert_eq!(grid.locale, Locale::English);

        let shuffle = PokedexConfig::shuffle();
        assert_eq!(shuffle.limit, 100_000);
        assert_eq!(shuffle.selection, Selection::Random(25));
        assert_eq!(shuffle.locale, Locale::Spanish);
        assert!(shuffle.show_measurements);
    }

    #[test]
    fn test_overlay_empty_keeps_preset() {
        let config = PokedexConfig::shuffle().overlay(lookup(&[])).unwrap();

        assert_eq!(config, PokedexConfig::shuffle());
    }

    #[test]
    fn test_overlay_values() {
        let config = PokedexConfig::grid()
            .overlay(lookup(&[
                ("POKEGRID_API_BASE", "http://localhost:9000/api/v2"),
                ("POKEGRID_LIMIT", "48"),
                ("POKEGRID_OFFSET", "24"),
                ("POKEGRID_SAMPLE", "10"),
                ("POKEGRID_LOCALE", "es"),
                ("POKEGRID_MEASUREMENTS", "true"),
                ("POKEGRID_SEED", "99"),
            ]))
            .unwrap();

        assert_eq!(config.api_base, "http://localhost:9000/api/v2");
        assert_eq!((config.limit, config.offset), (48, 24));
        assert_eq!(config.selection, Selection::Random(10));
        assert_eq!(config.locale, Locale::Spanish);
        assert!(config.show_measurements);
        assert!(!config.show_abilities);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_overlay_sample_zero_disables_random() {
        let config = PokedexConfig::shuffle()
            .overlay(lookup(&[("POKEGRID_SAMPLE", "0")]))
            .unwrap();

        assert_eq!(config.selection, Selection::All);
        assert_eq!(config.sample_size(), DEFAULT_SAMPLE_SIZE);
    }

    #[test]
    fn test_overlay_invalid_values() {
        let result = PokedexConfig::grid().overlay(lookup(&[("POKEGRID_LIMIT", "lots")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: "POKEGRID_LIMIT", .. })
        ));

        let result = PokedexConfig::grid().overlay(lookup(&[("POKEGRID_LOCALE", "fr")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: "POKEGRID_LOCALE", .. })
        ));

        let result = PokedexConfig::grid().overlay(lookup(&[("POKEGRID_API_BASE", "pokeapi.co")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: "POKEGRID_API_BASE", .. })
        ));
    }

    #[test]
    fn test_render_options() {
        let options = PokedexConfig::shuffle()
            .with_api_base("http://mock")
            .with_abilities(true)
            .render_options();

        assert_eq!(options.locale, Locale::Spanish);
        assert!(options.show_measurements);
        assert!(options.show_abilities);
        assert_eq!(options.link_base, "http://mock");
    }
}
