use anyhow::{Context, Result};
use tracing::info;

use crate::api::HttpCollectionsApi;
use crate::configuration::Configuration;
use crate::fetcher::{BlockingThrottle, PagedCollectionFetcher, PAGE_DELAY};
use crate::filter::Filter;
use crate::types::CollectionRecord;

/// Verification statuses that put a collection on the verified listing.
const VERIFIED_STATUSES: [&str; 2] = ["verified", "verified_trusted"];

/// Only plain erc721 collections are listed.
const TOKEN_TYPES: [&str; 1] = ["erc721"];

/// Walk the whole listing and return the verified collections, projected to
/// the configured fields.
pub fn run(config: &Configuration) -> Result<Vec<CollectionRecord>> {
    let filters = Filter::new()
        .allow("verified", VERIFIED_STATUSES)
        .allow("type", TOKEN_TYPES);

    let api = HttpCollectionsApi::new(config.url.clone(), config.timeout)?;
    let throttle = BlockingThrottle::new(PAGE_DELAY);
    let fetcher = PagedCollectionFetcher::new(&api, &throttle);

    info!("fetching verified collections from {}", config.url);
    let collections = fetcher
        .fetch(&config.fields, &filters)
        .context("fetching verified collections")?;
    info!("fetched {} verified collections", collections.len());

    Ok(collections)
}
