//! The document cards are rendered into: `#grid`, `#status` and `#shuffle`

use crate::format::escape_html;
use crate::locale::Locale;
use crate::pokemon_type::Type;
use crate::render::Card;

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; margin: 2rem; background: #f4f4f8; }
#status { margin-bottom: 1rem; color: #444; }
#grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 1rem; }
.card { background: #fff; border-radius: 12px; padding: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,.12); }
.card img { width: 100%; aspect-ratio: 1; object-fit: contain; }
.card h2 { font-size: 1.1rem; margin: .5rem 0; }
.meta { margin: .25rem 0; font-size: .85rem; }
.type { display: inline-block; padding: 0 .5rem; margin-right: .25rem; border-radius: 999px; background: #999; color: #fff; }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0 0 0 0); }
";

/// Ordered container of rendered cards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    cards: Vec<Card>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card after the ones already rendered
    pub fn append(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Ids of the rendered cards, in render order
    pub fn ids(&self) -> Vec<u32> {
        self.cards.iter().map(|card| card.id).collect()
    }

    /// The `#grid` element with every card inside it
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div id=\"grid\">\n");
        for card in &self.cards {
            html.push_str(&card.html);
            html.push('\n');
        }
        html.push_str("</div>");
        html
    }
}

/// In-memory document: grid container, status line and optional shuffle trigger
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Page {
    locale: Locale,
    grid: Grid,
    status: String,
    shuffle_enabled: bool,
}

impl Page {
    pub fn new(locale: Locale, shuffle_enabled: bool) -> Self {
        Self {
            locale,
            grid: Grid::new(),
            status: String::new(),
            shuffle_enabled,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn shuffle_enabled(&self) -> bool {
        self.shuffle_enabled
    }

    /// Serialize to a standalone HTML document
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<!doctype html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\" />\n<title>Pokédex</title>\n<style>\n{}",
            self.locale.code(),
            STYLE
        );
        for t in Type::ALL {
            html.push_str(&format!(".{} {{ background: {}; }}\n", t.css_class(), t.color()));
        }
        html.push_str("</style>\n</head>\n<body>\n");

        if self.shuffle_enabled {
            html.push_str(&format!(
                "<button id=\"shuffle\" type=\"button\">{}</button>\n",
                self.locale.shuffle()
            ));
        }

        html.push_str(&format!(
            "<div id=\"status\">{}</div>\n",
            escape_html(&self.status)
        ));
        html.push_str(&self.grid.to_html());
        html.push_str("\n</body>\n</html>\n");
        html
    }
}
