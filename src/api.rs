use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use url::Url;

use crate::types::{CollectionRecord, FetchError};

/// Records per page requested from the listing endpoint.
pub const PAGE_SIZE: u32 = 100;

/// The paginated collections listing. Implementations are injected into the
/// fetcher so the pagination loop can run against an in-process stub.
pub trait CollectionsApi {
    /// Fetch page `page_num` (1-indexed). An empty page means the listing is
    /// exhausted.
    fn fetch_page(&self, page_num: u32) -> Result<Vec<CollectionRecord>, FetchError>;
}

/// Production client for the marketplace listing endpoint.
pub struct HttpCollectionsApi {
    client: Client,
    base_url: Url,
}

impl HttpCollectionsApi {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;
        Ok(Self { client, base_url })
    }
}

impl CollectionsApi for HttpCollectionsApi {
    fn fetch_page(&self, page_num: u32) -> Result<Vec<CollectionRecord>, FetchError> {
        let url = page_url(&self.base_url, page_num, PAGE_SIZE);

        let response = self
            .client
            .get(url)
            .header(
                USER_AGENT,
                concat!("joepegs-collections/", env!("CARGO_PKG_VERSION")),
            )
            .send()
            .map_err(|e| FetchError::RemoteRequest {
                page: page_num,
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::RemoteRequest {
                page: page_num,
                reason: format!("HTTP {status}"),
            });
        }

        let body = response.text().map_err(|e| FetchError::RemoteRequest {
            page: page_num,
            reason: e.to_string(),
        })?;
        decode_page(page_num, &body)
    }
}

/// Decode a response body into one page of records.
fn decode_page(page_num: u32, body: &str) -> Result<Vec<CollectionRecord>, FetchError> {
    serde_json::from_str::<Vec<CollectionRecord>>(body).map_err(|e| FetchError::RemoteResponse {
        page: page_num,
        reason: e.to_string(),
    })
}

fn page_url(base: &Url, page_num: u32, page_size: u32) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("pageSize", &page_size.to_string())
        .append_pair("pageNum", &page_num.to_string());
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_carries_size_and_number() {
        let base = Url::parse("https://barn.joepegs.com/v2/collections").unwrap();
        let url = page_url(&base, 3, 100);
        assert_eq!(
            url.as_str(),
            "https://barn.joepegs.com/v2/collections?pageSize=100&pageNum=3"
        );
    }

    #[test]
    fn decode_accepts_an_array_of_objects() {
        let page =
            decode_page(1, r#"[{"address":"0xA","name":"Apes"},{"address":"0xB"}]"#).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0]["address"], "0xA");
    }

    #[test]
    fn decode_accepts_an_empty_array() {
        let page = decode_page(7, "[]").unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn decode_rejects_non_json() {
        let err = decode_page(1, "<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, FetchError::RemoteResponse { page: 1, .. }));
    }

    #[test]
    fn decode_rejects_a_json_object() {
        let err = decode_page(2, r#"{"collections": []}"#).unwrap_err();
        assert!(matches!(err, FetchError::RemoteResponse { page: 2, .. }));
    }

    #[test]
    fn decode_rejects_an_array_of_non_objects() {
        let err = decode_page(1, "[1, 2, 3]").unwrap_err();
        assert!(matches!(err, FetchError::RemoteResponse { page: 1, .. }));
    }
}
