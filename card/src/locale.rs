//! Status line and label strings

/// Language of the status line and card labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

impl Locale {
    /// Parse a language code ("en", "es") or name (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Locale::English),
            "es" | "spanish" | "español" | "espanol" => Some(Locale::Spanish),
            _ => None,
        }
    }

    /// `lang` attribute of the rendered document
    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Spanish => "es",
        }
    }

    pub fn loading(&self) -> &'static str {
        match self {
            Locale::English => "Loading Pokémon...",
            Locale::Spanish => "Cargando pokemones",
        }
    }

    /// Completion message; the English form ends with the count
    pub fn loaded(&self, count: usize) -> String {
        match self {
            Locale::English => format!("Pokémon loaded: {}", count),
            Locale::Spanish => format!("Se han cargado {} Pokemones", count),
        }
    }

    pub fn failed(&self) -> &'static str {
        match self {
            Locale::English => "Error loading Pokémon. Try again.",
            Locale::Spanish => "Error cargando Pokemones. Intenta de nuevo.",
        }
    }

    /// Screen-reader label of a card's thumbnail link
    pub fn open_resource(&self, display_name: &str) -> String {
        match self {
            Locale::English => format!("Open {} on PokeAPI", display_name),
            Locale::Spanish => format!("Abrir {} en PokeAPI", display_name),
        }
    }

    pub fn height(&self) -> &'static str {
        match self {
            Locale::English => "Height",
            Locale::Spanish => "Altura",
        }
    }

    pub fn weight(&self) -> &'static str {
        match self {
            Locale::English => "Weight",
            Locale::Spanish => "Peso",
        }
    }

    pub fn abilities(&self) -> &'static str {
        match self {
            Locale::English => "Abilities",
            Locale::Spanish => "Habilidades",
        }
    }

    pub fn shuffle(&self) -> &'static str {
        match self {
            Locale::English => "Shuffle",
            Locale::Spanish => "Mezclar",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
