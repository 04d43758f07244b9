//! List and detail fetchers

use futures_util::future::try_join_all;
use pokegrid_protocol::{EntityRecord, ListEntry, ListPage, list_url, parse_entity_record, parse_list_page};

use crate::error::FetchError;
use crate::transport::Transport;

/// GET a URL and return the body of a 2xx response
async fn get_success<T: Transport + ?Sized>(transport: &T, url: &str) -> Result<String, FetchError> {
    let response = transport.get(url).await?;

    if !response.is_success() {
        tracing::warn!(url, status = response.status, "Non-success response");
        return Err(FetchError::status(url, response.status));
    }

    Ok(response.body)
}

/// Fetch one page of the Pokemon listing
pub async fn fetch_list<T: Transport + ?Sized>(
    transport: &T,
    api_base: &str,
    limit: u32,
    offset: u32,
) -> Result<ListPage, FetchError> {
    let url = list_url(api_base, limit, offset);
    tracing::debug!(url = %url, "Fetching list");

    let body = get_success(transport, &url).await?;
    let page = parse_list_page(&body).map_err(|e| FetchError::malformed(&url, e))?;

    tracing::info!(
        total = page.count,
        received = page.len(),
        has_next = page.next.is_some(),
        "List fetched"
    );
    Ok(page)
}

/// Fetch a single record from an absolute detail URL
pub async fn fetch_entity<T: Transport + ?Sized>(
    transport: &T,
    url: &str,
) -> Result<EntityRecord, FetchError> {
    tracing::debug!(url, "Fetching detail");

    let body = get_success(transport, url).await?;
    parse_entity_record(&body).map_err(|e| FetchError::malformed(url, e))
}

/// Fetch every entry concurrently.
///
/// Results come back in input order. The first failure fails the whole batch
/// and drops the requests still in flight.
pub async fn fetch_entities<T: Transport + ?Sized>(
    transport: &T,
    entries: &[ListEntry],
) -> Result<Vec<EntityRecord>, FetchError> {
    try_join_all(
        entries
            .iter()
            .map(|entry| fetch_entity(transport, &entry.url)),
    )
    .await
}
