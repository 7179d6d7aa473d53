//! # Public-Signal Schema
//!
//! A circuit's public outputs arrive as a flat array; the schema names each
//! position. Schemas are published as JSON objects such as
//! `{"challenge":0,"userState":1,"userID":2}` and are parsed here into an
//! ordered list. Positions must cover `0..n` exactly once.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::RegistryError;

// Entries of a schema document in document order, repeated keys included.
struct SchemaEntries(Vec<(String, usize)>);

impl<'de> Deserialize<'de> for SchemaEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = SchemaEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping signal names to positions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, usize>()? {
                    entries.push(entry);
                }
                Ok(SchemaEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Ordered mapping from public-signal name to array position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicSignalSchema {
    // Sorted by position; entry `i` has position `i`.
    signals: Vec<String>,
}

impl PublicSignalSchema {
    /// Build a schema from `(name, position)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidSchema`] for duplicate names,
    /// duplicate positions or gaps in the position range.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (&'a str, usize)>,
    {
        let mut by_position: BTreeMap<usize, String> = BTreeMap::new();
        for (name, position) in pairs {
            if by_position.values().any(|n| n == name) {
                return Err(RegistryError::InvalidSchema(format!(
                    "duplicate signal name \"{name}\""
                )));
            }
            if let Some(existing) = by_position.insert(position, name.to_string()) {
                return Err(RegistryError::InvalidSchema(format!(
                    "signals \"{existing}\" and \"{name}\" share position {position}"
                )));
            }
        }
        for (expected, position) in by_position.keys().enumerate() {
            if *position != expected {
                return Err(RegistryError::InvalidSchema(format!(
                    "no signal at position {expected}"
                )));
            }
        }
        Ok(Self {
            signals: by_position.into_values().collect(),
        })
    }

    /// Parse a schema from its JSON object form.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let SchemaEntries(entries) =
            serde_json::from_str(json).map_err(|e| RegistryError::InvalidSchema(e.to_string()))?;
        Self::from_pairs(entries.iter().map(|(name, position)| (name.as_str(), *position)))
    }

    /// Number of public signals.
    pub fn arity(&self) -> usize {
        self.signals.len()
    }

    /// Position of the named signal, if declared.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.signals.iter().position(|n| n == name)
    }

    /// Name of the signal at `position`, if any.
    pub fn name_at(&self, position: usize) -> Option<&str> {
        self.signals.get(position).map(String::as_str)
    }

    /// `(name, position)` pairs in position order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.signals
            .iter()
            .enumerate()
            .map(|(position, name)| (name.as_str(), position))
    }

    /// The schema in its JSON object form.
    pub fn to_json(&self) -> String {
        let map: serde_json::Map<String, serde_json::Value> = self
            .iter()
            .map(|(name, position)| (name.to_string(), serde_json::Value::from(position)))
            .collect();
        serde_json::Value::Object(map).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTH_SCHEMA: &str = r#"{"challenge":0,"userState":1,"userID":2}"#;

    #[test]
    fn parses_auth_schema_in_position_order() {
        let schema = PublicSignalSchema::from_json(AUTH_SCHEMA).unwrap();
        assert_eq!(schema.arity(), 3);
        let pairs: Vec<_> = schema.iter().collect();
        assert_eq!(
            pairs,
            vec![("challenge", 0), ("userState", 1), ("userID", 2)]
        );
        assert_eq!(schema.position("userID"), Some(2));
        assert_eq!(schema.name_at(1), Some("userState"));
        assert_eq!(schema.position("missing"), None);
    }

    #[test]
    fn json_roundtrip_preserves_mapping() {
        let schema = PublicSignalSchema::from_json(AUTH_SCHEMA).unwrap();
        let again = PublicSignalSchema::from_json(&schema.to_json()).unwrap();
        assert_eq!(again, schema);
    }

    #[test]
    fn rejects_gap() {
        let err = PublicSignalSchema::from_pairs([("a", 0), ("b", 2)]).unwrap_err();
        assert!(format!("{err}").contains("no signal at position 1"));
    }

    #[test]
    fn rejects_shared_position() {
        let err = PublicSignalSchema::from_pairs([("a", 0), ("b", 0)]).unwrap_err();
        assert!(format!("{err}").contains("share position 0"));
    }

    #[test]
    fn rejects_duplicate_name() {
        let err = PublicSignalSchema::from_pairs([("a", 0), ("a", 1)]).unwrap_err();
        assert!(format!("{err}").contains("duplicate signal name"));
    }

    #[test]
    fn rejects_repeated_key_in_document() {
        let err = PublicSignalSchema::from_json(r#"{"a":0,"b":1,"a":0}"#).unwrap_err();
        assert!(format!("{err}").contains("duplicate signal name \"a\""));
    }

    #[test]
    fn rejects_non_object_json() {
        assert!(PublicSignalSchema::from_json("[0,1]").is_err());
        assert!(PublicSignalSchema::from_json(r#"{"a":-1}"#).is_err());
    }

    #[test]
    fn empty_schema_has_zero_arity() {
        let schema = PublicSignalSchema::from_json("{}").unwrap();
        assert_eq!(schema.arity(), 0);
    }
}
