mod fetch_error;
mod record;

pub use fetch_error::FetchError;
pub use record::CollectionRecord;
