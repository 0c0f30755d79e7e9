use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::api::CollectionsApi;
use crate::filter::{self, Filter};
use crate::types::{CollectionRecord, FetchError};

/// Fixed pause between page requests, as a courtesy to the remote side.
pub const PAGE_DELAY: Duration = Duration::from_secs(5);

/// Blocking pause between page requests. Injected so the pagination loop can
/// run under test without wall-clock delay.
pub trait Throttle {
    fn pause(&self);
}

/// Sleeps the calling thread for a fixed delay.
pub struct BlockingThrottle {
    delay: Duration,
}

impl BlockingThrottle {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Throttle for BlockingThrottle {
    fn pause(&self) {
        thread::sleep(self.delay);
    }
}

/// Walks the paginated listing until the server returns an empty page,
/// filtering and projecting records along the way.
pub struct PagedCollectionFetcher<'a, C: CollectionsApi + ?Sized, T: Throttle + ?Sized> {
    api: &'a C,
    throttle: &'a T,
}

impl<'a, C: CollectionsApi + ?Sized, T: Throttle + ?Sized> PagedCollectionFetcher<'a, C, T> {
    pub fn new(api: &'a C, throttle: &'a T) -> Self {
        Self { api, throttle }
    }

    /// Aggregate every record that passes `filters`, projected to `fields`,
    /// across all pages, preserving page order.
    ///
    /// The loop stops on the first page the server returns empty. A page
    /// that filters down to nothing keeps the loop going: only the raw page
    /// size decides termination. Any error aborts the whole fetch and
    /// discards the pages accumulated so far.
    pub fn fetch(
        &self,
        fields: &[String],
        filters: &Filter,
    ) -> Result<Vec<CollectionRecord>, FetchError> {
        let mut collections = Vec::new();
        let mut page_num = 1u32;

        loop {
            let page = self.api.fetch_page(page_num)?;
            if page.is_empty() {
                debug!("page {} empty, listing exhausted", page_num);
                return Ok(collections);
            }

            let raw_len = page.len();
            let before = collections.len();
            for record in &page {
                if filters.matches(record) {
                    collections.push(filter::project(record, fields, page_num)?);
                }
            }
            info!(
                "page {}: kept {} of {} records",
                page_num,
                collections.len() - before,
                raw_len
            );

            self.throttle.pause();
            page_num += 1;
        }
    }
}
