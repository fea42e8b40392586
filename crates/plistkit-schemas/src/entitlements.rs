//! Entitlements schema and builder

use plistkit::{plist_schema, BuilderOptions, Entitlements, PlistBuilder, PlistFacade, Schema};
use tracing::debug;

/// Typed facade for an app's entitlements
#[derive(Debug, Clone)]
pub struct EntitlementsBuilder {
    raw: PlistBuilder,
}

impl Default for EntitlementsBuilder {
    fn default() -> Self {
        EntitlementsBuilder::new()
    }
}

impl EntitlementsBuilder {
    pub fn new() -> Self {
        EntitlementsBuilder::with_options(BuilderOptions::default())
    }

    pub fn with_options(options: BuilderOptions) -> Self {
        EntitlementsBuilder {
            raw: PlistBuilder::with_options(Some(EntitlementsFields::registry()), options),
        }
    }

    /// Run `configure` against a fresh builder and materialize the result
    ///
    /// Returns `None` when `configure` set nothing.
    pub fn build(configure: impl FnOnce(&mut EntitlementsBuilder)) -> Option<Entitlements> {
        EntitlementsBuilder::build_with(BuilderOptions::default(), configure)
    }

    pub fn build_with(
        options: BuilderOptions,
        configure: impl FnOnce(&mut EntitlementsBuilder),
    ) -> Option<Entitlements> {
        let mut builder = EntitlementsBuilder::with_options(options);
        configure(&mut builder);
        builder.finish()
    }

    pub fn finish(self) -> Option<Entitlements> {
        debug!("Materializing {} entitlements", self.raw.len());
        self.raw.entitlements()
    }
}

impl PlistFacade for EntitlementsBuilder {
    fn raw(&self) -> &PlistBuilder {
        &self.raw
    }

    fn raw_mut(&mut self) -> &mut PlistBuilder {
        &mut self.raw
    }
}

plist_schema! {
    /// Well-known entitlement keys
    pub struct EntitlementsFields("entitlements") for EntitlementsBuilder {
        /// Run inside the App Sandbox
        app_sandboxed, set_app_sandboxed: bool = "com.apple.security.app-sandbox";
        /// Push notification environment (`development` or `production`)
        aps_environment, set_aps_environment: String = "aps-environment";
        application_groups, set_application_groups: Vec<String> =
            "com.apple.security.application-groups";
        network_client, set_network_client: bool = "com.apple.security.network.client";
        network_server, set_network_server: bool = "com.apple.security.network.server";
        user_selected_files_read_only, set_user_selected_files_read_only: bool =
            "com.apple.security.files.user-selected.read-only";
        keychain_access_groups, set_keychain_access_groups: Vec<String> = "keychain-access-groups";
        associated_domains, set_associated_domains: Vec<String> =
            "com.apple.developer.associated-domains";
    }
}
