//! Typed field descriptors
//!
//! A [`PlistField`] binds a logical property name to the string key it is
//! stored under, and carries the native type it round-trips as a type
//! parameter. [`FieldInfo`] is the type-erased form kept by registries.

use std::fmt;
use std::marker::PhantomData;

/// Property name and document key of a declared field, without its type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldInfo {
    pub key: &'static str,
    pub name: &'static str,
}

/// Typed handle for one document key
pub struct PlistField<T> {
    key: &'static str,
    name: &'static str,
    _type: PhantomData<fn() -> T>,
}

impl<T> PlistField<T> {
    pub const fn new(key: &'static str, name: &'static str) -> Self {
        PlistField {
            key,
            name,
            _type: PhantomData,
        }
    }

    pub const fn key(&self) -> &'static str {
        self.key
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn info(&self) -> FieldInfo {
        FieldInfo {
            key: self.key,
            name: self.name,
        }
    }
}

impl<T> Clone for PlistField<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PlistField<T> {}

impl<T> fmt::Debug for PlistField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlistField")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

// =============================================================================
// CONST CHECKS - Used by `plist_schema!` to reject bad schemas at compile time
// =============================================================================

const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// True when every string in `items` is distinct
pub const fn all_distinct(items: &[&str]) -> bool {
    let mut i = 0;
    while i < items.len() {
        let mut j = i + 1;
        while j < items.len() {
            if str_eq(items[i], items[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// True when no string in `items` is empty
pub const fn none_empty(items: &[&str]) -> bool {
    let mut i = 0;
    while i < items.len() {
        if items[i].is_empty() {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_exposes_key_and_name() {
        const BUNDLE_VERSION: PlistField<String> =
            PlistField::new("CFBundleVersion", "bundle_version");
        assert_eq!(BUNDLE_VERSION.key(), "CFBundleVersion");
        assert_eq!(
            BUNDLE_VERSION.info(),
            FieldInfo {
                key: "CFBundleVersion",
                name: "bundle_version"
            }
        );
    }

    #[test]
    fn test_const_checks() {
        assert!(all_distinct(&["a", "b", "ab"]));
        assert!(!all_distinct(&["a", "b", "a"]));
        assert!(all_distinct(&[]));
        assert!(none_empty(&["a"]));
        assert!(!none_empty(&["a", ""]));
    }
}
