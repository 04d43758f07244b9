//! Record to HTML fragment

use pokegrid_protocol::{DEFAULT_API_BASE, EntityRecord, fallback_sprite_url, pokemon_url};

use crate::format::{decimetric, escape_html, title_case};
use crate::locale::Locale;
use crate::pokemon_type::Type;

/// One rendered card, ready to be appended to the grid
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Card {
    pub id: u32,
    /// Display name, already title-cased
    pub name: String,
    pub html: String,
}

/// What a card shows and where its thumbnail links to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub locale: Locale,
    /// Height/weight line, in metres and kilograms
    pub show_measurements: bool,
    pub show_abilities: bool,
    /// API root the thumbnail link points into
    pub link_base: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            show_measurements: false,
            show_abilities: false,
            link_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

/// Official artwork when present, otherwise the raw sprite keyed by id
pub fn image_url(record: &EntityRecord) -> String {
    match record.sprites.official_artwork.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => fallback_sprite_url(record.id),
    }
}

fn type_badge(name: &str) -> String {
    let class = match Type::from_api(name) {
        Some(t) => format!("type {}", t.css_class()),
        None => "type".to_string(),
    };
    format!("<span class=\"{}\">{}</span>", class, escape_html(name))
}

/// Render a record into a card fragment. Pure; appending is up to the caller.
pub fn render_card(record: &EntityRecord, options: &RenderOptions) -> Card {
    let locale = options.locale;
    let name = title_case(&record.name);
    let escaped_name = escape_html(&name);
    let badges: String = record.types.iter().map(|t| type_badge(t)).collect();

    let mut html = format!("<article class=\"card\" data-id=\"{}\">\n", record.id);
    html.push_str(&format!(
        "  <a class=\"thumb\" href=\"{}\" target=\"_blank\" rel=\"noreferrer\">\n",
        escape_html(&pokemon_url(&options.link_base, record.id))
    ));
    html.push_str(&format!(
        "    <img alt=\"{}\" src=\"{}\" loading=\"lazy\" />\n",
        escaped_name,
        escape_html(&image_url(record))
    ));
    html.push_str(&format!(
        "    <span class=\"sr-only\">{}</span>\n  </a>\n",
        escape_html(&locale.open_resource(&name))
    ));
    html.push_str(&format!(
        "  <h2>{} <small>#{}</small></h2>\n",
        escaped_name, record.id
    ));
    html.push_str(&format!("  <p class=\"meta\">{}</p>\n", badges));

    if options.show_measurements {
        html.push_str(&format!(
            "  <p class=\"meta\">{}: {} m | {}: {} kg</p>\n",
            locale.height(),
            decimetric(record.height),
            locale.weight(),
            decimetric(record.weight)
        ));
    }

    if options.show_abilities && !record.abilities.is_empty() {
        let abilities: Vec<String> = record.abilities.iter().map(|a| escape_html(a)).collect();
        html.push_str(&format!(
            "  <p class=\"meta abilities\">{}: {}</p>\n",
            locale.abilities(),
            abilities.join(", ")
        ));
    }

    html.push_str("</article>");

    Card {
        id: record.id,
        name,
        html,
    }
}
