use serde::Deserialize;

use crate::ParseError;

/// A name/URL reference to a detail resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListEntry {
    pub name: String,
    pub url: String,
}

/// Listing envelope returned by `GET /pokemon?limit=..&offset=..`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListPage {
    /// Total number of resources on the server, not the page length
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<ListEntry>,
}

impl ListPage {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Parse a listing response body
pub fn parse_list_page(body: &str) -> Result<ListPage, ParseError> {
    let page: ListPage = serde_json::from_str(body)?;

    if let Some(entry) = page.results.iter().find(|entry| entry.url.is_empty()) {
        return Err(ParseError::InvalidField {
            field: "results.url",
            reason: format!("entry {:?} has an empty url", entry.name),
        });
    }

    Ok(page)
}
