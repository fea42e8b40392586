//! Typed property-list builder
//!
//! Property lists (Info.plist, entitlements) are untyped, string-keyed
//! documents. This crate lets callers build them through typed accessors:
//!
//! - [`PlistValue`] is the tagged value tree stored in a [`Document`]
//! - [`PlistConvertible`] maps native types to and from `PlistValue`
//! - [`PlistField`] binds a property name to a document key
//! - [`FieldRegistry`] lists every field of a schema
//! - [`PlistBuilder`] holds the document and materializes
//!   [`Entitlements`] / [`InfoPlist`] artifacts
//! - [`plist_schema!`] declares a schema and its facade accessors

pub mod builder;
pub mod convert;
pub mod errors;
pub mod facade;
pub mod field;
pub mod manifest;
pub mod registry;
pub mod value;
pub mod writer;

pub use builder::{Advisory, BuilderOptions, PlistBuilder};
pub use convert::PlistConvertible;
pub use errors::PlistError;
pub use facade::PlistFacade;
pub use field::{FieldInfo, PlistField};
pub use manifest::{Entitlements, InfoPlist};
pub use registry::{FieldRegistry, Schema};
pub use value::{Document, PlistValue};

// Re-export writer utilities for persisting documents
pub use writer::{read_from_path, write_to_path, DocumentFormat};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
