//! Field registries
//!
//! A [`FieldRegistry`] is the explicit list of every field declared for one
//! schema. Builders consult it to point callers at typed accessors when they
//! write a known key through the raw interface.

use crate::errors::PlistError;
use crate::field::FieldInfo;
use ahash::AHashMap;

/// Ordered, read-only set of fields belonging to one schema
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    schema: &'static str,
    fields: Vec<FieldInfo>,

    /// key -> position in `fields`
    key_index: AHashMap<&'static str, usize>,
}

impl FieldRegistry {
    /// Build a registry, rejecting empty keys and duplicate keys or names
    pub fn new(schema: &'static str, fields: Vec<FieldInfo>) -> Result<Self, PlistError> {
        let mut key_index: AHashMap<&'static str, usize> = AHashMap::with_capacity(fields.len());
        let mut names: AHashMap<&'static str, usize> = AHashMap::with_capacity(fields.len());

        for (idx, field) in fields.iter().enumerate() {
            if field.key.is_empty() {
                return Err(PlistError::EmptyKey {
                    schema: schema.to_string(),
                    name: field.name.to_string(),
                });
            }
            if let Some(&first) = key_index.get(field.key) {
                let first: &FieldInfo = &fields[first];
                return Err(PlistError::DuplicateKey {
                    schema: schema.to_string(),
                    key: field.key.to_string(),
                    first: first.name.to_string(),
                    second: field.name.to_string(),
                });
            }
            if names.insert(field.name, idx).is_some() {
                return Err(PlistError::DuplicateName {
                    schema: schema.to_string(),
                    name: field.name.to_string(),
                });
            }
            key_index.insert(field.key, idx);
        }

        Ok(FieldRegistry {
            schema,
            fields,
            key_index,
        })
    }

    /// Build a registry whose keys were already proven distinct and non-empty
    ///
    /// Used by `plist_schema!`, which checks uniqueness in a `const` block.
    #[doc(hidden)]
    pub fn from_checked(schema: &'static str, fields: Vec<FieldInfo>) -> Self {
        let key_index = fields
            .iter()
            .enumerate()
            .map(|(idx, field)| (field.key, idx))
            .collect();
        FieldRegistry {
            schema,
            fields,
            key_index,
        }
    }

    pub fn schema(&self) -> &'static str {
        self.schema
    }

    /// Field declared for `key`, if any
    pub fn advise(&self, key: &str) -> Option<&FieldInfo> {
        self.key_index.get(key).map(|&idx| &self.fields[idx])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.key_index.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldInfo> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A schema declared with `plist_schema!`
pub trait Schema {
    /// Schema name used in advisories and errors
    const NAME: &'static str;

    /// The shared registry for this schema, built on first use
    fn registry() -> &'static FieldRegistry;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(key: &'static str, name: &'static str) -> FieldInfo {
        FieldInfo { key, name }
    }

    #[test]
    fn test_advise_finds_declared_key() {
        let registry = FieldRegistry::new(
            "entitlements",
            vec![
                info("com.apple.security.app-sandbox", "app_sandboxed"),
                info("aps-environment", "aps_environment"),
            ],
        );
        let Ok(registry) = registry else {
            panic!("registry should build");
        };

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.advise("aps-environment").map(|f| f.name),
            Some("aps_environment")
        );
        assert!(registry.advise("com.apple.developer.icloud").is_none());
    }

    #[test]
    fn test_iteration_keeps_declaration_order() {
        let Ok(registry) = FieldRegistry::new("s", vec![info("b", "second"), info("a", "first")])
        else {
            panic!("registry should build");
        };
        let names: Vec<_> = registry.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = FieldRegistry::new(
            "entitlements",
            vec![
                info("aps-environment", "aps_environment"),
                info("aps-environment", "push_environment"),
            ],
        );
        assert!(matches!(
            result,
            Err(PlistError::DuplicateKey { ref first, ref second, .. })
                if first == "aps_environment" && second == "push_environment"
        ));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = FieldRegistry::new("s", vec![info("a", "same"), info("b", "same")]);
        assert!(matches!(result, Err(PlistError::DuplicateName { .. })));
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = FieldRegistry::new("s", vec![info("", "blank")]);
        assert!(matches!(result, Err(PlistError::EmptyKey { .. })));
    }
}
