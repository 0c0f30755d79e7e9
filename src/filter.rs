use std::collections::BTreeMap;

use serde_json::Value;

use crate::types::{CollectionRecord, FetchError};

/// Attribute allow-lists. A record passes when, for every constrained
/// attribute, the record's value is a member of the allowed set. Attributes
/// not mentioned here are unconstrained.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    allowed: BTreeMap<String, Vec<Value>>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain `attr` to the given set of acceptable values.
    pub fn allow<I, V>(mut self, attr: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.allowed
            .insert(attr.to_string(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Membership test over every constrained attribute. A record that lacks
    /// a constrained attribute fails the test.
    pub fn matches(&self, record: &CollectionRecord) -> bool {
        self.allowed
            .iter()
            .all(|(attr, values)| record.get(attr).is_some_and(|v| values.contains(v)))
    }
}

/// Reduce `record` to exactly `fields`, in field order. Every requested
/// field must be present on the record.
pub fn project(
    record: &CollectionRecord,
    fields: &[String],
    page: u32,
) -> Result<CollectionRecord, FetchError> {
    let mut out = CollectionRecord::new();
    for field in fields {
        let value = record.get(field).ok_or_else(|| FetchError::Projection {
            page,
            field: field.clone(),
        })?;
        out.insert(field.clone(), value.clone());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> CollectionRecord {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn empty_filter_admits_everything() {
        let filter = Filter::new();
        assert!(filter.matches(&record(json!({"address": "0xA"}))));
        assert!(filter.matches(&record(json!({}))));
    }

    #[test]
    fn constrained_attribute_must_be_a_member() {
        let filter = Filter::new().allow("verified", ["verified", "verified_trusted"]);
        assert!(filter.matches(&record(json!({"verified": "verified"}))));
        assert!(filter.matches(&record(json!({"verified": "verified_trusted"}))));
        assert!(!filter.matches(&record(json!({"verified": "unverified"}))));
    }

    #[test]
    fn all_constraints_must_hold() {
        let filter = Filter::new()
            .allow("verified", ["verified"])
            .allow("type", ["erc721"]);
        assert!(filter.matches(&record(
            json!({"verified": "verified", "type": "erc721", "name": "x"})
        )));
        assert!(!filter.matches(&record(json!({"verified": "verified", "type": "erc1155"}))));
    }

    #[test]
    fn record_without_constrained_attribute_fails() {
        let filter = Filter::new().allow("verified", ["verified"]);
        assert!(!filter.matches(&record(json!({"address": "0xA"}))));
    }

    #[test]
    fn projection_keeps_exactly_the_requested_fields_in_order() {
        let rec = record(json!({
            "address": "0xA",
            "name": "Apes",
            "verified": "verified",
            "floor": 12
        }));
        let fields = vec!["name".to_string(), "address".to_string()];

        let projected = project(&rec, &fields, 1).unwrap();

        let keys: Vec<&String> = projected.keys().collect();
        assert_eq!(keys, ["name", "address"]);
        assert_eq!(projected["name"], json!("Apes"));
        assert_eq!(projected["address"], json!("0xA"));
    }

    #[test]
    fn projecting_a_missing_field_is_an_error() {
        let rec = record(json!({"address": "0xA"}));
        let fields = vec!["address".to_string(), "name".to_string()];

        let err = project(&rec, &fields, 3).unwrap_err();

        assert_eq!(
            err,
            FetchError::Projection {
                page: 3,
                field: "name".to_string()
            }
        );
    }
}
