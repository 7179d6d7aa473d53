//! # Public-Signal Decoding
//!
//! [`PublicSignals`] pairs the prover's output array with a circuit schema.
//! Construction checks the arity; typed accessors then parse the signal at
//! a named position, reporting the position, name and raw value on failure.

use idzk_core::{parse_decimal, BigUint, Hash, Id, ValidationError};

use crate::error::DecodeError;
use crate::schema::PublicSignalSchema;

/// Parse a public-signal document: a JSON array of decimal strings.
pub fn parse_signal_array(data: &[u8]) -> Result<Vec<String>, DecodeError> {
    Ok(serde_json::from_slice(data)?)
}

/// A public-signal array validated against a schema's arity.
#[derive(Debug, Clone, Copy)]
pub struct PublicSignals<'a> {
    schema: &'a PublicSignalSchema,
    values: &'a [String],
}

impl<'a> PublicSignals<'a> {
    /// Pair `values` with `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::ArityMismatch`] unless `values` has exactly
    /// as many entries as the schema declares.
    pub fn new(schema: &'a PublicSignalSchema, values: &'a [String]) -> Result<Self, DecodeError> {
        if values.len() != schema.arity() {
            tracing::warn!(
                expected = schema.arity(),
                actual = values.len(),
                "public signal arity mismatch"
            );
            return Err(DecodeError::ArityMismatch {
                expected: schema.arity(),
                actual: values.len(),
            });
        }
        Ok(Self { schema, values })
    }

    /// Raw string and position of the named signal.
    pub fn raw(&self, name: &str) -> Result<(usize, &'a str), DecodeError> {
        let position = self
            .schema
            .position(name)
            .ok_or_else(|| DecodeError::UnknownSignal(name.to_string()))?;
        Ok((position, self.values[position].as_str()))
    }

    /// The named signal as an unsigned big integer.
    pub fn big_int(&self, name: &str) -> Result<BigUint, DecodeError> {
        self.parse(name, parse_decimal)
    }

    /// The named signal as a Merkle hash.
    pub fn hash(&self, name: &str) -> Result<Hash, DecodeError> {
        self.parse(name, Hash::from_decimal_str)
    }

    /// The named signal as an identity identifier.
    pub fn id(&self, name: &str) -> Result<Id, DecodeError> {
        self.parse(name, Id::from_decimal_str)
    }

    fn parse<T>(
        &self,
        name: &str,
        parser: impl FnOnce(&str) -> Result<T, ValidationError>,
    ) -> Result<T, DecodeError> {
        let (position, value) = self.raw(name)?;
        parser(value).map_err(|e| {
            tracing::warn!(position, signal = name, value, error = %e, "malformed public signal");
            DecodeError::MalformedSignal {
                position,
                name: name.to_string(),
                value: value.to_string(),
                reason: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> PublicSignalSchema {
        PublicSignalSchema::from_pairs([("a", 0), ("b", 1)]).unwrap()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn arity_must_match() {
        let s = schema();
        let short = strings(&["1"]);
        let long = strings(&["1", "2", "3"]);
        assert!(matches!(
            PublicSignals::new(&s, &short),
            Err(DecodeError::ArityMismatch { expected: 2, actual: 1 })
        ));
        assert!(matches!(
            PublicSignals::new(&s, &long),
            Err(DecodeError::ArityMismatch { expected: 2, actual: 3 })
        ));
    }

    #[test]
    fn typed_access_by_name() {
        let s = schema();
        let values = strings(&["7", "8"]);
        let signals = PublicSignals::new(&s, &values).unwrap();
        assert_eq!(signals.big_int("b").unwrap(), BigUint::from(8u32));
        assert_eq!(signals.hash("a").unwrap().to_string(), "7");
        assert_eq!(signals.raw("a").unwrap(), (0, "7"));
    }

    #[test]
    fn malformed_value_reports_position() {
        let s = schema();
        let values = strings(&["7", "eight"]);
        let signals = PublicSignals::new(&s, &values).unwrap();
        match signals.big_int("b").unwrap_err() {
            DecodeError::MalformedSignal {
                position,
                name,
                value,
                ..
            } => {
                assert_eq!(position, 1);
                assert_eq!(name, "b");
                assert_eq!(value, "eight");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let s = schema();
        let values = strings(&["7", "8"]);
        let signals = PublicSignals::new(&s, &values).unwrap();
        assert!(matches!(signals.hash("c"), Err(DecodeError::UnknownSignal(_))));
    }

    #[test]
    fn signal_array_document_parses() {
        let values = parse_signal_array(br#"["1","2"]"#).unwrap();
        assert_eq!(values, vec!["1", "2"]);
        assert!(matches!(
            parse_signal_array(br#"[1,2]"#),
            Err(DecodeError::InvalidJson(_))
        ));
    }
}
