//! End-to-end builder scenarios

use plistkit::{
    read_from_path, write_to_path, Document, Entitlements, InfoPlist, PlistFacade, PlistValue,
    Schema,
};
use plistkit_schemas::{
    EntitlementsBuilder, EntitlementsFields, InfoPlistBuilder, InfoPlistFields,
    InterfaceOrientation, PrivacyFields, UsageReasons,
};
use tempfile::TempDir;

// ── Info.plist ───────────────────────────────────────────────────

#[test]
fn bundle_version_reads_back_and_lands_under_its_key() {
    let mut info = InfoPlistBuilder::new();
    info.set_bundle_version("1.2.3".to_string());

    assert_eq!(info.bundle_version(), Some("1.2.3".to_string()));

    let mut expected = Document::new();
    expected.insert(
        "CFBundleVersion".to_string(),
        PlistValue::String("1.2.3".to_string()),
    );
    assert_eq!(info.raw().values(), &expected);
}

#[test]
fn info_plist_extends_host_defaults() {
    let plist = InfoPlistBuilder::build(|info| {
        info.set_bundle_version("2".to_string());
        info.set_is_ui_element(true);
    });

    let mut defaults = Document::new();
    defaults.insert("CFBundleVersion".to_string(), PlistValue::from("1"));
    defaults.insert("CFBundleExecutable".to_string(), PlistValue::from("Demo"));

    let resolved = plist.resolve(&defaults);
    assert_eq!(resolved.get("CFBundleVersion"), Some(&PlistValue::from("2")));
    assert_eq!(resolved.get("CFBundleExecutable"), Some(&PlistValue::from("Demo")));
    assert_eq!(resolved.get("LSUIElement"), Some(&PlistValue::from(true)));
}

#[test]
fn privacy_sub_facade_and_main_facade_share_one_document() {
    let mut info = InfoPlistBuilder::new();
    info.set_bundle_name("Demo".to_string());
    {
        let mut privacy = info.privacy();
        privacy.set_camera_usage("Scan documents".to_string());
        privacy.set_location_temporary_usage(
            UsageReasons::new().with("Delivery", "Show where your courier is"),
        );
    }
    info.set_bundle_name(None);

    let plist = info.finish();
    let overrides = plist.overrides();
    assert_eq!(overrides.len(), 2);
    assert!(overrides.contains_key("NSCameraUsageDescription"));
    assert!(overrides.contains_key("NSLocationTemporaryUsageDescriptionDictionary"));
    assert!(!overrides.contains_key("CFBundleName"));
}

#[test]
fn mismatched_stored_value_reads_as_absent() {
    let mut info = InfoPlistBuilder::new();
    info.raw_mut().set("CFBundleVersion", Some(12_i64));
    assert_eq!(info.bundle_version(), None);
    assert!(info.raw().contains_key("CFBundleVersion"));
}

#[test]
fn orientation_list_drops_unknown_entries() {
    let mut info = InfoPlistBuilder::new();
    info.raw_mut().set(
        "UISupportedInterfaceOrientations",
        Some(PlistValue::Array(vec![
            PlistValue::from("UIInterfaceOrientationLandscapeLeft"),
            PlistValue::from("Diagonal"),
        ])),
    );
    assert_eq!(
        info.supported_interface_orientations(),
        Some(vec![InterfaceOrientation::LandscapeLeft])
    );
}

// ── Entitlements ─────────────────────────────────────────────────

#[test]
fn sandbox_only_entitlements() {
    let entitlements = EntitlementsBuilder::build(|e| e.set_app_sandboxed(true));

    let mut expected = Document::new();
    expected.insert(
        "com.apple.security.app-sandbox".to_string(),
        PlistValue::Boolean(true),
    );
    assert_eq!(entitlements, Some(Entitlements::Dictionary(expected)));
}

#[test]
fn empty_entitlements_are_absent() {
    assert_eq!(EntitlementsBuilder::build(|_| {}), None);
}

#[test]
fn raw_set_of_known_key_advises_exactly_once() {
    let mut entitlements = EntitlementsBuilder::new();
    entitlements
        .raw_mut()
        .set("aps-environment", Some("production".to_string()));
    entitlements
        .raw_mut()
        .set("com.apple.developer.siri", Some(true));

    let advisories = entitlements.raw().advisories();
    assert_eq!(advisories.len(), 1);
    assert_eq!(advisories[0].property, "aps_environment");
    assert_eq!(advisories[0].schema, "entitlements");
    assert_eq!(
        entitlements.aps_environment(),
        Some("production".to_string())
    );
}

#[test]
fn raw_privacy_key_in_info_plist_points_at_privacy_facade() {
    let mut info = InfoPlistBuilder::new();
    info.raw_mut()
        .set("NSCameraUsageDescription", Some("Scan receipts".to_string()));
    info.raw_mut()
        .set("CFBundleDevelopmentRegion", Some("en".to_string()));

    let advisories = info.raw().advisories();
    assert_eq!(advisories.len(), 1);
    assert_eq!(advisories[0].schema, "privacy");
    assert_eq!(advisories[0].property, "camera_usage");
    assert_eq!(
        advisories[0].to_string(),
        "You can use property [.camera_usage] for key: \"NSCameraUsageDescription\""
    );
}

// ── Registries ───────────────────────────────────────────────────

#[test]
fn registries_are_disjoint() {
    let info = InfoPlistFields::registry();
    let privacy = PrivacyFields::registry();
    let entitlements = EntitlementsFields::registry();

    for field in privacy.iter() {
        assert!(!info.contains_key(field.key), "{} in both", field.key);
    }
    for field in entitlements.iter() {
        assert!(!info.contains_key(field.key), "{} in both", field.key);
    }
}

#[test]
fn field_handles_match_registry_entries() {
    let field = InfoPlistFields::bundle_version();
    assert_eq!(field.key(), "CFBundleVersion");
    assert_eq!(
        InfoPlistFields::registry().advise(field.key()),
        Some(&field.info())
    );
}

// ── Persistence ──────────────────────────────────────────────────

#[test]
fn materialized_info_plist_survives_disk_round_trip() {
    let Ok(temp_dir) = TempDir::new() else {
        return;
    };
    let plist = InfoPlistBuilder::build(|info| {
        info.set_bundle_version("4.0".to_string());
        info.set_requires_full_screen(false);
        info.privacy().set_contacts_usage("Invite friends".to_string());
    });
    let InfoPlist::ExtendingDefault(overrides) = plist else {
        return;
    };

    for name in ["Info.toml", "Info.json"] {
        let path = temp_dir.path().join(name);
        assert!(write_to_path(&overrides, &path).is_ok());
        let loaded = read_from_path(&path);
        assert!(loaded.is_ok_and(|d| d == overrides), "{name} differs");
    }
}
