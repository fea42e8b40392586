//! Conversion between native values and [`PlistValue`]
//!
//! Decoding is best-effort: a value of the wrong shape decodes to `None`
//! rather than an error. Collections decode element by element and drop
//! whatever fails, so one bad entry never discards the whole collection.

use crate::value::PlistValue;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A native type that can be stored in a property-list document
///
/// Implementations must satisfy `from_value(&x.to_value()) == Some(x)`.
pub trait PlistConvertible: Sized {
    fn to_value(&self) -> PlistValue;

    /// Returns `None` when `value` does not have the expected shape
    fn from_value(value: &PlistValue) -> Option<Self>;
}

impl PlistConvertible for String {
    fn to_value(&self) -> PlistValue {
        PlistValue::String(self.clone())
    }

    fn from_value(value: &PlistValue) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl PlistConvertible for i64 {
    fn to_value(&self) -> PlistValue {
        PlistValue::Integer(*self)
    }

    fn from_value(value: &PlistValue) -> Option<Self> {
        value.as_integer()
    }
}

impl PlistConvertible for f64 {
    fn to_value(&self) -> PlistValue {
        PlistValue::Real(*self)
    }

    fn from_value(value: &PlistValue) -> Option<Self> {
        value.as_real()
    }
}

impl PlistConvertible for bool {
    fn to_value(&self) -> PlistValue {
        PlistValue::Boolean(*self)
    }

    fn from_value(value: &PlistValue) -> Option<Self> {
        value.as_bool()
    }
}

/// Raw escape hatch: stores and returns the tagged value unchanged
impl PlistConvertible for PlistValue {
    fn to_value(&self) -> PlistValue {
        self.clone()
    }

    fn from_value(value: &PlistValue) -> Option<Self> {
        Some(value.clone())
    }
}

impl<T: PlistConvertible> PlistConvertible for Vec<T> {
    fn to_value(&self) -> PlistValue {
        PlistValue::Array(self.iter().map(PlistConvertible::to_value).collect())
    }

    fn from_value(value: &PlistValue) -> Option<Self> {
        let items = value.as_array()?;
        Some(items.iter().filter_map(T::from_value).collect())
    }
}

impl<T: PlistConvertible> PlistConvertible for BTreeMap<String, T> {
    fn to_value(&self) -> PlistValue {
        PlistValue::Dictionary(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }

    fn from_value(value: &PlistValue) -> Option<Self> {
        let entries = value.as_dictionary()?;
        Some(
            entries
                .iter()
                .filter_map(|(key, value)| T::from_value(value).map(|v| (key.clone(), v)))
                .collect(),
        )
    }
}

impl<T: PlistConvertible, S: BuildHasher + Default> PlistConvertible for HashMap<String, T, S> {
    fn to_value(&self) -> PlistValue {
        PlistValue::Dictionary(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }

    fn from_value(value: &PlistValue) -> Option<Self> {
        let entries = value.as_dictionary()?;
        Some(
            entries
                .iter()
                .filter_map(|(key, value)| T::from_value(value).map(|v| (key.clone(), v)))
                .collect(),
        )
    }
}
