//! Pokemon detail resource: wire shape and the flattened record the grid renders.

use serde::Deserialize;

use crate::ParseError;

/// Detail response as served by `GET /pokemon/{id}`.
///
/// Only the fields the grid needs are modelled; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: ApiSprites,
    #[serde(default)]
    pub types: Vec<ApiTypeSlot>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub abilities: Vec<ApiAbilitySlot>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSprites {
    #[serde(default)]
    pub other: Option<ApiSpritesOther>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSpritesOther {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<ApiArtwork>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiArtwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiAbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Image references carried by a record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sprites {
    /// Official artwork; `None` when absent, null or empty in the payload
    pub official_artwork: Option<String>,
}

/// One Pokemon, flattened from [`ApiPokemon`].
///
/// `types` and `abilities` keep the order the server sent them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
    pub types: Vec<String>,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub abilities: Vec<String>,
}

impl TryFrom<ApiPokemon> for EntityRecord {
    type Error = ParseError;

    fn try_from(api: ApiPokemon) -> Result<Self, Self::Error> {
        if api.id == 0 {
            return Err(ParseError::InvalidField {
                field: "id",
                reason: "must be a positive integer".to_string(),
            });
        }

        let official_artwork = api
            .sprites
            .other
            .and_then(|other| other.official_artwork)
            .and_then(|artwork| artwork.front_default)
            .filter(|url| !url.is_empty());

        Ok(Self {
            id: api.id,
            name: api.name,
            sprites: Sprites { official_artwork },
            types: api.types.into_iter().map(|slot| slot.kind.name).collect(),
            height: api.height,
            weight: api.weight,
            abilities: api
                .abilities
                .into_iter()
                .map(|slot| slot.ability.name)
                .collect(),
        })
    }
}

/// Parse a detail response body into an [`EntityRecord`]
pub fn parse_entity_record(body: &str) -> Result<EntityRecord, ParseError> {
    let api: ApiPokemon = serde_json::from_str(body)?;
    EntityRecord::try_from(api)
}

#[cfg(test)]
mod tests {
    use super::*;

    const IVYSAUR: &str = r#"{
        "id": 2,
        "name": "ivysaur",
        "height": 10,
        "weight": 130,
        "base_experience": 142,
        "sprites": {
            "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/2.png",
            "other": {
                "dream_world": {"front_default": null},
                "official-artwork": {
                    "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/2.png",
                    "front_shiny": null
                }
            }
        },
        "types": [
            {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}},
            {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}}
        ],
        "abilities": [
            {"ability": {"name": "overgrow", "url": "https://pokeapi.co/api/v2/ability/65/"}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "chlorophyll", "url": "https://pokeapi.co/api/v2/ability/34/"}, "is_hidden": true, "slot": 3}
        ]
    }"#;

    #[test]
    fn test_parse_entity_record() {
        let record = parse_entity_record(IVYSAUR).unwrap();

        assert_eq!(record.id, 2);
        assert_eq!(record.name, "ivysaur");
        assert_eq!(record.height, 10);
        assert_eq!(record.weight, 130);
        assert_eq!(record.types, vec!["grass", "poison"]);
        assert_eq!(record.abilities, vec!["overgrow", "chlorophyll"]);
        assert!(
            record
                .sprites
                .official_artwork
                .as_deref()
                .unwrap()
                .ends_with("official-artwork/2.png")
        );
    }

    #[test]
    fn test_null_artwork() {
        let body = r#"{
            "id": 10001, "name": "deoxys-attack", "height": 17, "weight": 608,
            "sprites": {"front_default": null, "other": {"official-artwork": {"front_default": null}}},
            "types": [{"slot": 1, "type": {"name": "psychic"}}],
            "abilities": []
        }"#;
        let record = parse_entity_record(body).unwrap();

        assert_eq!(record.sprites, Sprites::default());
    }

    #[test]
    fn test_front_sprite_is_not_artwork() {
        let body = r#"{
            "id": 4, "name": "charmander", "height": 6, "weight": 85,
            "sprites": {
                "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/4.png",
                "other": {"official-artwork": {"front_default": null}}
            }
        }"#;
        let record = parse_entity_record(body).unwrap();

        assert_eq!(record.sprites, Sprites { official_artwork: None });
    }

    #[test]
    fn test_missing_sprites_and_empty_artwork() {
        let missing = r#"{"id": 1, "name": "bulbasaur", "height": 7, "weight": 69}"#;
        let record = parse_entity_record(missing).unwrap();
        assert!(record.sprites.official_artwork.is_none());
        assert!(record.types.is_empty());

        let empty = r#"{
            "id": 1, "name": "bulbasaur", "height": 7, "weight": 69,
            "sprites": {"other": {"official-artwork": {"front_default": ""}}}
        }"#;
        let record = parse_entity_record(empty).unwrap();
        assert!(record.sprites.official_artwork.is_none());
    }

    #[test]
    fn test_zero_id_rejected() {
        let body = r#"{"id": 0, "name": "missingno", "height": 10, "weight": 100}"#;
        let result = parse_entity_record(body);

        assert!(matches!(
            result,
            Err(ParseError::InvalidField { field: "id", .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        let result = parse_entity_record("<html>rate limited</html>");

        assert!(matches!(result, Err(ParseError::Json(_))));
    }
}
