use thiserror::Error;

/// Everything that can abort a listing fetch. There is no local recovery:
/// any of these discards the pages accumulated so far and propagates to the
/// caller unchanged.
#[derive(Debug, Error, PartialEq)]
pub enum FetchError {
    #[error("request for page {page} failed: {reason}")]
    RemoteRequest { page: u32, reason: String },
    #[error("page {page} is not a JSON array of collections: {reason}")]
    RemoteResponse { page: u32, reason: String },
    #[error("collection on page {page} has no `{field}` attribute")]
    Projection { page: u32, field: String },
}
