//! HTTP client for the case feed (native only).
//!
//! One attempt per call. A failed or superseded fetch simply produces no
//! dataset; retrying is left to whoever drives the fetch.

use crate::error::{DataError, Result};
use crate::raw_record::{parse_feed, RawRecord};
use log::{info, warn};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Build a client with the timeout used for feed requests.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?)
}

/// Fetch and decode the feed at `url`.
pub async fn fetch_feed(client: &Client, url: &str) -> Result<Vec<RawRecord>> {
    info!("Fetching case feed from {}", url);
    let response = client.get(url).send().await?;
    if response.status() != StatusCode::OK {
        warn!("Bad response status from {}: {}", url, response.status());
        return Err(DataError::HttpStatus(response.status().as_u16()));
    }
    let body = response.text().await?;
    let records = parse_feed(&body)?;
    info!("Fetched {} feed records", records.len());
    Ok(records)
}
