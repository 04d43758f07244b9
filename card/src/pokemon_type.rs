//! Pokemon types as they appear in PokeAPI payloads, with badge colours

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl Type {
    /// All 18 Pokemon types
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Parse a PokeAPI type name (case-insensitive)
    pub fn from_api(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.api_name().eq_ignore_ascii_case(name))
    }

    /// Lowercase name used by PokeAPI and in badge CSS classes
    pub fn api_name(&self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Steel => "steel",
            Type::Fairy => "fairy",
        }
    }

    /// Badge background colour
    pub fn color(&self) -> &'static str {
        match self {
            Type::Normal => "#A8A77A",
            Type::Fire => "#EE8130",
            Type::Water => "#6390F0",
            Type::Electric => "#F7D02C",
            Type::Grass => "#7AC74C",
            Type::Ice => "#96D9D6",
            Type::Fighting => "#C22E28",
            Type::Poison => "#A33EA1",
            Type::Ground => "#E2BF65",
            Type::Flying => "#A98FF3",
            Type::Psychic => "#F95587",
            Type::Bug => "#A6B91A",
            Type::Rock => "#B6A136",
            Type::Ghost => "#735797",
            Type::Dragon => "#6F35FC",
            Type::Dark => "#705746",
            Type::Steel => "#B7B7CE",
            Type::Fairy => "#D685AD",
        }
    }

    /// CSS class carried by badges of this type
    pub fn css_class(&self) -> String {
        format!("type-{}", self.api_name())
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.api_name())
    }
}
