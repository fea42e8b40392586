//! Tagged value tree stored in property-list documents
//!
//! `PlistValue` is the closed set of shapes a document entry may take.
//! Typed accessors convert to and from it through [`crate::PlistConvertible`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A string-keyed document of tagged values
pub type Document = BTreeMap<String, PlistValue>;

// =============================================================================
// PLIST VALUE - Closed tagged union
// =============================================================================

/// Any value that can be stored in a property-list document
///
/// Arrays and dictionaries may hold values of mixed variants. Serializes
/// untagged, so a document maps directly onto TOML or JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlistValue {
    String(String),
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Array(Vec<PlistValue>),
    Dictionary(BTreeMap<String, PlistValue>),
}

impl PlistValue {
    /// Variant name, used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            PlistValue::String(_) => "string",
            PlistValue::Integer(_) => "integer",
            PlistValue::Real(_) => "real",
            PlistValue::Boolean(_) => "boolean",
            PlistValue::Array(_) => "array",
            PlistValue::Dictionary(_) => "dictionary",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PlistValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PlistValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            PlistValue::Real(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PlistValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[PlistValue]> {
        match self {
            PlistValue::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&BTreeMap<String, PlistValue>> {
        match self {
            PlistValue::Dictionary(d) => Some(d),
            _ => None,
        }
    }
}

// =============================================================================
// FROM IMPLS - Scalar construction
// =============================================================================

impl From<&str> for PlistValue {
    fn from(s: &str) -> Self {
        PlistValue::String(s.to_string())
    }
}

impl From<String> for PlistValue {
    fn from(s: String) -> Self {
        PlistValue::String(s)
    }
}

impl From<i64> for PlistValue {
    fn from(i: i64) -> Self {
        PlistValue::Integer(i)
    }
}

impl From<f64> for PlistValue {
    fn from(r: f64) -> Self {
        PlistValue::Real(r)
    }
}

impl From<bool> for PlistValue {
    fn from(b: bool) -> Self {
        PlistValue::Boolean(b)
    }
}

impl From<Vec<PlistValue>> for PlistValue {
    fn from(values: Vec<PlistValue>) -> Self {
        PlistValue::Array(values)
    }
}

impl From<BTreeMap<String, PlistValue>> for PlistValue {
    fn from(entries: BTreeMap<String, PlistValue>) -> Self {
        PlistValue::Dictionary(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_only_their_variant() {
        let value = PlistValue::Integer(7);
        assert_eq!(value.as_integer(), Some(7));
        assert_eq!(value.as_real(), None);
        assert_eq!(value.as_str(), None);
        assert_eq!(value.type_name(), "integer");
    }

    #[test]
    fn test_integer_and_real_are_distinct() {
        assert_ne!(PlistValue::Integer(1), PlistValue::Real(1.0));
    }

    #[test]
    fn test_untagged_json_shape() {
        let mut doc = Document::new();
        doc.insert("CFBundleVersion".to_string(), PlistValue::from("1.2.3"));
        doc.insert("LSUIElement".to_string(), PlistValue::from(true));
        doc.insert("Build".to_string(), PlistValue::from(42_i64));
        doc.insert("Scale".to_string(), PlistValue::from(1.5));

        let json = serde_json::to_string(&doc).unwrap_or_default();
        assert_eq!(
            json,
            r#"{"Build":42,"CFBundleVersion":"1.2.3","LSUIElement":true,"Scale":1.5}"#
        );

        let parsed: Result<Document, _> = serde_json::from_str(&json);
        assert!(parsed.is_ok_and(|p| p == doc));
    }

    #[test]
    fn test_heterogeneous_array() {
        let value = PlistValue::from(vec![PlistValue::from("a"), PlistValue::from(1_i64)]);
        assert_eq!(value.as_array().map(<[PlistValue]>::len), Some(2));
    }
}
