//! The document builder
//!
//! [`PlistBuilder`] owns the key -> [`PlistValue`] map being assembled. Reads
//! and writes go either through typed [`PlistField`]s (what the facades use)
//! or through raw string keys. A raw write to a key that one of the bound
//! registries already declares produces an [`Advisory`] pointing at the typed
//! accessor. A document shared by several schemas (Info.plist and its privacy
//! keys) binds all of them.

use crate::convert::PlistConvertible;
use crate::field::PlistField;
use crate::manifest::{Entitlements, InfoPlist};
use crate::registry::FieldRegistry;
use crate::value::{Document, PlistValue};
use smallvec::SmallVec;
use std::fmt;
use tracing::{debug, info};

/// Behavior switches for a builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderOptions {
    /// Emit an advisory when a raw key matches a declared field
    pub advisories: bool,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        BuilderOptions { advisories: true }
    }
}

/// Hint that a raw key has a typed accessor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub schema: &'static str,
    pub key: String,
    pub property: &'static str,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You can use property [.{}] for key: \"{}\"",
            self.property, self.key
        )
    }
}

/// Mutable store of document entries
#[derive(Debug, Clone, Default)]
pub struct PlistBuilder {
    values: Document,
    registries: SmallVec<[&'static FieldRegistry; 2]>,
    options: BuilderOptions,
    advisories: Vec<Advisory>,
}

impl PlistBuilder {
    /// A builder with no registry; raw writes never advise
    pub fn new() -> Self {
        PlistBuilder::default()
    }

    pub fn with_registry(registry: &'static FieldRegistry) -> Self {
        PlistBuilder::with_options(Some(registry), BuilderOptions::default())
    }

    pub fn with_options(registry: Option<&'static FieldRegistry>, options: BuilderOptions) -> Self {
        PlistBuilder::with_registries(registry, options)
    }

    /// A builder whose document holds the keys of several schemas
    ///
    /// Advisories consult the registries in the order given.
    pub fn with_registries(
        registries: impl IntoIterator<Item = &'static FieldRegistry>,
        options: BuilderOptions,
    ) -> Self {
        PlistBuilder {
            values: Document::new(),
            registries: registries.into_iter().collect(),
            options,
            advisories: Vec::new(),
        }
    }

    // =========================================================================
    // RAW ACCESS
    // =========================================================================

    /// Typed read of a raw key
    ///
    /// Returns `None` both when the key is absent and when its value has
    /// the wrong shape for `T`.
    pub fn get<T: PlistConvertible>(&self, key: &str) -> Option<T> {
        self.values.get(key).and_then(T::from_value)
    }

    /// Typed write of a raw key; `None` removes the entry
    pub fn set<T: PlistConvertible>(&mut self, key: &str, value: Option<T>) {
        self.advise(key);
        self.store(key, value);
    }

    pub fn get_value(&self, key: &str) -> Option<&PlistValue> {
        self.values.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<PlistValue> {
        self.values.remove(key)
    }

    /// Merge raw entries, overwriting existing keys
    pub fn extend(&mut self, entries: Document) {
        for (key, value) in entries {
            self.advise(&key);
            self.values.insert(key, value);
        }
    }

    // =========================================================================
    // TYPED ACCESS
    // =========================================================================

    pub fn field<T: PlistConvertible>(&self, field: &PlistField<T>) -> Option<T> {
        self.get(field.key())
    }

    /// Typed write through a declared field; never advises
    pub fn set_field<T: PlistConvertible>(&mut self, field: &PlistField<T>, value: Option<T>) {
        self.store(field.key(), value);
    }

    // =========================================================================
    // INSPECTION
    // =========================================================================

    pub fn values(&self) -> &Document {
        &self.values
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Registries consulted for advisories, in lookup order
    pub fn registries(&self) -> &[&'static FieldRegistry] {
        &self.registries
    }

    pub fn options(&self) -> BuilderOptions {
        self.options
    }

    /// Advisories emitted so far, oldest first
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    // =========================================================================
    // MATERIALIZATION
    // =========================================================================

    /// Entitlements for the accumulated entries, or `None` when nothing was set
    pub fn entitlements(self) -> Option<Entitlements> {
        if self.values.is_empty() {
            debug!("No entitlements set, skipping entitlements artifact");
            return None;
        }
        Some(Entitlements::Dictionary(self.values))
    }

    /// Info.plist extending the host default with the accumulated entries
    pub fn info_plist(self) -> InfoPlist {
        InfoPlist::ExtendingDefault(self.values)
    }

    pub fn into_document(self) -> Document {
        self.values
    }

    fn store<T: PlistConvertible>(&mut self, key: &str, value: Option<T>) {
        match value {
            Some(value) => {
                self.values.insert(key.to_string(), value.to_value());
            }
            None => {
                self.values.remove(key);
            }
        }
    }

    fn advise(&mut self, key: &str) {
        if !self.options.advisories {
            return;
        }
        let found = self
            .registries
            .iter()
            .find_map(|&registry| registry.advise(key).map(|known| (registry, known)));
        if let Some((registry, known)) = found {
            let advisory = Advisory {
                schema: registry.schema(),
                key: key.to_string(),
                property: known.name,
            };
            info!(schema = advisory.schema, "{}", advisory);
            self.advisories.push(advisory);
        }
    }
}
