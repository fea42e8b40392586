//! Info.plist schema and builder

use crate::orientation::InterfaceOrientation;
use crate::privacy::{PrivacyBuilder, PrivacyFields};
use plistkit::{plist_schema, BuilderOptions, InfoPlist, PlistBuilder, PlistFacade, Schema};
use tracing::debug;

/// Typed facade for an app's Info.plist overrides
#[derive(Debug, Clone)]
pub struct InfoPlistBuilder {
    raw: PlistBuilder,
}

impl Default for InfoPlistBuilder {
    fn default() -> Self {
        InfoPlistBuilder::new()
    }
}

impl InfoPlistBuilder {
    pub fn new() -> Self {
        InfoPlistBuilder::with_options(BuilderOptions::default())
    }

    /// Privacy keys share the document, so both registries advise on raw writes
    pub fn with_options(options: BuilderOptions) -> Self {
        InfoPlistBuilder {
            raw: PlistBuilder::with_registries(
                [InfoPlistFields::registry(), PrivacyFields::registry()],
                options,
            ),
        }
    }

    /// Run `configure` against a fresh builder and materialize the result
    pub fn build(configure: impl FnOnce(&mut InfoPlistBuilder)) -> InfoPlist {
        InfoPlistBuilder::build_with(BuilderOptions::default(), configure)
    }

    pub fn build_with(
        options: BuilderOptions,
        configure: impl FnOnce(&mut InfoPlistBuilder),
    ) -> InfoPlist {
        let mut builder = InfoPlistBuilder::with_options(options);
        configure(&mut builder);
        builder.finish()
    }

    /// Privacy usage strings, written into this same document
    pub fn privacy(&mut self) -> PrivacyBuilder<'_> {
        PrivacyBuilder::new(&mut self.raw)
    }

    pub fn finish(self) -> InfoPlist {
        debug!("Materializing Info.plist with {} overrides", self.raw.len());
        self.raw.info_plist()
    }
}

impl PlistFacade for InfoPlistBuilder {
    fn raw(&self) -> &PlistBuilder {
        &self.raw
    }

    fn raw_mut(&mut self) -> &mut PlistBuilder {
        &mut self.raw
    }
}

plist_schema! {
    /// Well-known Info.plist keys
    pub struct InfoPlistFields("info-plist") for InfoPlistBuilder {
        /// Build version of the bundle
        bundle_version, set_bundle_version: String = "CFBundleVersion";
        /// User-visible release version
        bundle_short_version, set_bundle_short_version: String = "CFBundleShortVersionString";
        bundle_name, set_bundle_name: String = "CFBundleName";
        bundle_display_name, set_bundle_display_name: String = "CFBundleDisplayName";
        bundle_identifier, set_bundle_identifier: String = "CFBundleIdentifier";
        copyright_notice, set_copyright_notice: String = "NSHumanReadableCopyright";
        main_storyboard_name, set_main_storyboard_name: String = "NSMainStoryboardFile";
        principal_class, set_principal_class: String = "NSPrincipalClass";
        /// Agent app with no Dock icon or menu bar
        is_ui_element, set_is_ui_element: bool = "LSUIElement";
        minimum_system_version, set_minimum_system_version: String = "LSMinimumSystemVersion";
        supported_interface_orientations, set_supported_interface_orientations:
            Vec<InterfaceOrientation> = "UISupportedInterfaceOrientations";
        requires_full_screen, set_requires_full_screen: bool = "UIRequiresFullScreen";
    }
}
