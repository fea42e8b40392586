//! Privacy usage-description keys
//!
//! These live in Info.plist alongside the general metadata keys, so the
//! facade borrows an existing builder instead of owning one.

use crate::usage_reasons::UsageReasons;
use plistkit::{plist_schema, PlistBuilder, PlistFacade};

/// Facade over the privacy keys of a builder it borrows
#[derive(Debug)]
pub struct PrivacyBuilder<'a> {
    raw: &'a mut PlistBuilder,
}

impl<'a> PrivacyBuilder<'a> {
    pub fn new(raw: &'a mut PlistBuilder) -> Self {
        PrivacyBuilder { raw }
    }
}

impl PlistFacade for PrivacyBuilder<'_> {
    fn raw(&self) -> &PlistBuilder {
        &*self.raw
    }

    fn raw_mut(&mut self) -> &mut PlistBuilder {
        &mut *self.raw
    }
}

plist_schema! {
    /// Purpose strings shown when the system asks for access
    pub struct PrivacyFields("privacy") for PrivacyBuilder<'_> {
        camera_usage, set_camera_usage: String = "NSCameraUsageDescription";
        microphone_usage, set_microphone_usage: String = "NSMicrophoneUsageDescription";
        photo_library_usage, set_photo_library_usage: String = "NSPhotoLibraryUsageDescription";
        location_when_in_use_usage, set_location_when_in_use_usage: String =
            "NSLocationWhenInUseUsageDescription";
        /// Purpose key -> reason for temporary full-accuracy location
        location_temporary_usage, set_location_temporary_usage: UsageReasons =
            "NSLocationTemporaryUsageDescriptionDictionary";
        contacts_usage, set_contacts_usage: String = "NSContactsUsageDescription";
        bluetooth_always_usage, set_bluetooth_always_usage: String =
            "NSBluetoothAlwaysUsageDescription";
        user_tracking_usage, set_user_tracking_usage: String = "NSUserTrackingUsageDescription";
    }
}
