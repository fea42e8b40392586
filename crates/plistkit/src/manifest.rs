//! Materialized manifest artifacts
//!
//! These are what a finished builder hands to the host build tool.

use crate::value::Document;
use serde::{Deserialize, Serialize};

/// Entitlements artifact
///
/// Only produced when at least one entitlement was set; an empty set is
/// represented by the absence of this value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entitlements {
    Dictionary(Document),
}

impl Entitlements {
    pub fn document(&self) -> &Document {
        match self {
            Entitlements::Dictionary(document) => document,
        }
    }
}

/// Info.plist artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoPlist {
    /// Overrides applied on top of the host's default Info.plist
    ExtendingDefault(Document),
    /// A complete document replacing the default
    Dictionary(Document),
}

impl InfoPlist {
    /// Entries this artifact contributes
    pub fn overrides(&self) -> &Document {
        match self {
            InfoPlist::ExtendingDefault(document) | InfoPlist::Dictionary(document) => document,
        }
    }

    /// Final document given the host's defaults
    pub fn resolve(&self, defaults: &Document) -> Document {
        match self {
            InfoPlist::ExtendingDefault(overrides) => {
                let mut resolved = defaults.clone();
                resolved.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
                resolved
            }
            InfoPlist::Dictionary(document) => document.clone(),
        }
    }
}
