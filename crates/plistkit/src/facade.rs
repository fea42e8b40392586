//! Schema-specific facades
//!
//! A facade wraps a [`PlistBuilder`] and exposes one typed getter/setter pair
//! per field of its schema. The accessors are generated by [`plist_schema!`];
//! the facade only has to say where its builder lives.
//!
//! [`plist_schema!`]: crate::plist_schema

use crate::builder::PlistBuilder;
use crate::value::Document;

/// Access to the builder behind a facade
pub trait PlistFacade {
    fn raw(&self) -> &PlistBuilder;

    fn raw_mut(&mut self) -> &mut PlistBuilder;

    fn document(&self) -> &Document {
        self.raw().values()
    }
}

impl PlistFacade for PlistBuilder {
    fn raw(&self) -> &PlistBuilder {
        self
    }

    fn raw_mut(&mut self) -> &mut PlistBuilder {
        self
    }
}

/// Declare a schema and generate typed accessors on its facade
///
/// ```
/// use plistkit::{plist_schema, PlistBuilder, PlistFacade, Schema};
///
/// struct SandboxBuilder {
///     raw: PlistBuilder,
/// }
///
/// impl PlistFacade for SandboxBuilder {
///     fn raw(&self) -> &PlistBuilder {
///         &self.raw
///     }
///
///     fn raw_mut(&mut self) -> &mut PlistBuilder {
///         &mut self.raw
///     }
/// }
///
/// plist_schema! {
///     /// Keys understood by the sandbox
///     pub struct SandboxFields("sandbox") for SandboxBuilder {
///         /// App Sandbox
///         app_sandboxed, set_app_sandboxed: bool = "com.apple.security.app-sandbox";
///     }
/// }
///
/// let mut sandbox = SandboxBuilder {
///     raw: PlistBuilder::with_registry(SandboxFields::registry()),
/// };
/// sandbox.set_app_sandboxed(true);
/// assert_eq!(sandbox.app_sandboxed(), Some(true));
/// ```
///
/// This expands to:
/// - a unit type `SandboxFields` with a `const fn app_sandboxed() -> PlistField<bool>`
///   per field and a [`Schema`](crate::Schema) impl backed by a lazily built registry,
/// - a compile-time check that no key is empty or repeated,
/// - `SandboxBuilder::app_sandboxed(&self) -> Option<bool>` and
///   `SandboxBuilder::set_app_sandboxed(&mut self, impl Into<Option<bool>>)`.
///
/// The facade type must implement [`PlistFacade`].
///
/// Two fields sharing a key do not compile:
///
/// ```compile_fail
/// use plistkit::{plist_schema, PlistBuilder, PlistFacade};
///
/// struct PushBuilder {
///     raw: PlistBuilder,
/// }
///
/// impl PlistFacade for PushBuilder {
///     fn raw(&self) -> &PlistBuilder {
///         &self.raw
///     }
///
///     fn raw_mut(&mut self) -> &mut PlistBuilder {
///         &mut self.raw
///     }
/// }
///
/// plist_schema! {
///     struct PushFields("push") for PushBuilder {
///         aps_environment, set_aps_environment: String = "aps-environment";
///         push_environment, set_push_environment: String = "aps-environment";
///     }
/// }
/// ```
///
/// Neither does an empty key:
///
/// ```compile_fail
/// use plistkit::{plist_schema, PlistBuilder, PlistFacade};
///
/// struct BlankBuilder {
///     raw: PlistBuilder,
/// }
///
/// impl PlistFacade for BlankBuilder {
///     fn raw(&self) -> &PlistBuilder {
///         &self.raw
///     }
///
///     fn raw_mut(&mut self) -> &mut PlistBuilder {
///         &mut self.raw
///     }
/// }
///
/// plist_schema! {
///     struct BlankFields("blank") for BlankBuilder {
///         blank, set_blank: bool = "";
///     }
/// }
/// ```
#[macro_export]
macro_rules! plist_schema {
    (
        $(#[$meta:meta])*
        $vis:vis struct $schema:ident($name:literal) for $facade:ty {
            $(
                $(#[$field_meta:meta])*
                $field:ident, $setter:ident: $ty:ty = $key:literal;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $schema;

        impl $schema {
            $(
                $(#[$field_meta])*
                pub const fn $field() -> $crate::PlistField<$ty> {
                    $crate::PlistField::new($key, stringify!($field))
                }
            )*
        }

        const _: () = {
            assert!(
                $crate::field::none_empty(&[$($key),*]),
                "plist schema declares an empty key"
            );
            assert!(
                $crate::field::all_distinct(&[$($key),*]),
                "plist schema declares the same key twice"
            );
        };

        impl $crate::Schema for $schema {
            const NAME: &'static str = $name;

            fn registry() -> &'static $crate::FieldRegistry {
                static REGISTRY: $crate::__private::Lazy<$crate::FieldRegistry> =
                    $crate::__private::Lazy::new(|| {
                        $crate::FieldRegistry::from_checked(
                            $name,
                            vec![$($schema::$field().info()),*],
                        )
                    });
                $crate::__private::Lazy::force(&REGISTRY)
            }
        }

        impl $facade {
            $(
                $(#[$field_meta])*
                pub fn $field(&self) -> Option<$ty> {
                    $crate::PlistFacade::raw(self).field(&$schema::$field())
                }

                #[doc = concat!("Set `", stringify!($field), "` (`", $key, "`); `None` removes it")]
                pub fn $setter(&mut self, value: impl Into<Option<$ty>>) {
                    $crate::PlistFacade::raw_mut(self).set_field(&$schema::$field(), value.into());
                }
            )*
        }
    };
}
