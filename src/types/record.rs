use serde_json::{Map, Value};

/// One collection as returned by the listing endpoint.
///
/// The schema is controlled by the remote side and only a subset of the
/// attributes is ever consumed, so records stay an ordered name/value
/// mapping instead of a typed struct.
pub type CollectionRecord = Map<String, Value>;
