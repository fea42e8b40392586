//! Schemas for Apple property lists
//!
//! Each schema is declared with [`plistkit::plist_schema!`] and comes with a
//! facade exposing one typed getter/setter pair per key:
//!
//! - [`EntitlementsBuilder`] materializes `Option<Entitlements>`
//! - [`InfoPlistBuilder`] materializes an `InfoPlist` extending the host default,
//!   with [`PrivacyBuilder`] as a sub-facade over the same document

pub mod entitlements;
pub mod info_plist;
pub mod orientation;
pub mod privacy;
pub mod usage_reasons;

pub use entitlements::{EntitlementsBuilder, EntitlementsFields};
pub use info_plist::{InfoPlistBuilder, InfoPlistFields};
pub use orientation::InterfaceOrientation;
pub use privacy::{PrivacyBuilder, PrivacyFields};
pub use usage_reasons::{UsageReason, UsageReasons};
