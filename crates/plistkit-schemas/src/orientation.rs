use plistkit::{PlistConvertible, PlistValue};

/// Entry of `UISupportedInterfaceOrientations`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterfaceOrientation {
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
}

impl InterfaceOrientation {
    pub const ALL: [InterfaceOrientation; 4] = [
        InterfaceOrientation::Portrait,
        InterfaceOrientation::PortraitUpsideDown,
        InterfaceOrientation::LandscapeLeft,
        InterfaceOrientation::LandscapeRight,
    ];

    /// The string stored in the plist
    pub fn as_str(self) -> &'static str {
        match self {
            InterfaceOrientation::Portrait => "UIInterfaceOrientationPortrait",
            InterfaceOrientation::PortraitUpsideDown => "UIInterfaceOrientationPortraitUpsideDown",
            InterfaceOrientation::LandscapeLeft => "UIInterfaceOrientationLandscapeLeft",
            InterfaceOrientation::LandscapeRight => "UIInterfaceOrientationLandscapeRight",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_str() == key)
    }
}

impl PlistConvertible for InterfaceOrientation {
    fn to_value(&self) -> PlistValue {
        PlistValue::String(self.as_str().to_string())
    }

    fn from_value(value: &PlistValue) -> Option<Self> {
        value.as_str().and_then(Self::from_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_orientation_round_trips() {
        for orientation in InterfaceOrientation::ALL {
            assert_eq!(
                InterfaceOrientation::from_value(&orientation.to_value()),
                Some(orientation)
            );
        }
    }

    #[test]
    fn test_unknown_string_is_dropped_from_list() {
        let value = PlistValue::Array(vec![
            PlistValue::from("UIInterfaceOrientationPortrait"),
            PlistValue::from("UIInterfaceOrientationSideways"),
            PlistValue::from(true),
        ]);
        assert_eq!(
            Vec::<InterfaceOrientation>::from_value(&value),
            Some(vec![InterfaceOrientation::Portrait])
        );
    }
}
