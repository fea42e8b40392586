//! Keyed purpose strings
//!
//! Some privacy keys (e.g. `NSLocationTemporaryUsageDescriptionDictionary`)
//! hold a dictionary of purpose key -> user-facing reason rather than a
//! single string. [`UsageReasons`] keeps those pairs sorted by key with no
//! duplicates, which matches how the dictionary decodes.

use plistkit::{PlistConvertible, PlistValue};
use smallvec::SmallVec;

/// One purpose key and the reason shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageReason {
    pub key: String,
    pub reason: String,
}

/// Ordered set of usage reasons, unique by key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageReasons {
    reasons: SmallVec<[UsageReason; 4]>,
}

impl UsageReasons {
    pub fn new() -> Self {
        UsageReasons::default()
    }

    /// Add or replace the reason for `key`, returning the previous reason
    pub fn insert(&mut self, key: impl Into<String>, reason: impl Into<String>) -> Option<String> {
        let key = key.into();
        let reason = reason.into();
        match self.reasons.binary_search_by(|r| r.key.as_str().cmp(key.as_str())) {
            Ok(idx) => Some(std::mem::replace(&mut self.reasons[idx].reason, reason)),
            Err(idx) => {
                self.reasons.insert(idx, UsageReason { key, reason });
                None
            }
        }
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, reason: impl Into<String>) -> Self {
        self.insert(key, reason);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.reasons
            .binary_search_by(|r| r.key.as_str().cmp(key))
            .ok()
            .map(|idx| self.reasons[idx].reason.as_str())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self
            .reasons
            .binary_search_by(|r| r.key.as_str().cmp(key))
            .ok()?;
        Some(self.reasons.remove(idx).reason)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UsageReason> {
        self.reasons.iter()
    }

    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }
}

impl<K: Into<String>, R: Into<String>> FromIterator<(K, R)> for UsageReasons {
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        let mut reasons = UsageReasons::new();
        for (key, reason) in iter {
            reasons.insert(key, reason);
        }
        reasons
    }
}

impl PlistConvertible for UsageReasons {
    fn to_value(&self) -> PlistValue {
        PlistValue::Dictionary(
            self.reasons
                .iter()
                .map(|r| (r.key.clone(), PlistValue::String(r.reason.clone())))
                .collect(),
        )
    }

    /// Entries whose value is not a string are skipped
    fn from_value(value: &PlistValue) -> Option<Self> {
        let entries = value.as_dictionary()?;
        // BTreeMap iteration is already sorted and unique by key
        let reasons = entries
            .iter()
            .filter_map(|(key, value)| {
                value.as_str().map(|reason| UsageReason {
                    key: key.clone(),
                    reason: reason.to_string(),
                })
            })
            .collect();
        Some(UsageReasons { reasons })
    }
}
