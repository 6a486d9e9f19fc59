//! Target color profiles
//!
//! A target profile pairs everything the pipeline needs to know about one
//! named target color: the reference color used for cluster matching in
//! analysis (HSV) space, the highlight color used for overlay rendering in
//! display (RGB) space, and the calibrated channel windows for range
//! classification. Keeping the three in one table prevents them from
//! drifting apart; new targets are added by extending the table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Hsv8;
use crate::constants::bounds::{
    DEFAULT_SAT_MAX, DEFAULT_SAT_MIN, DEFAULT_VAL_MAX, DEFAULT_VAL_MIN,
};
use crate::error::SegmentError;
use crate::segmentation::HsvBounds;

/// Closed enumeration of supported target colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Green,
    Blue,
}

/// Everything tied to one target color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetProfile {
    /// Reference color in analysis (HSV) space for cluster matching
    pub reference: Hsv8,
    /// Solid highlight color in display (RGB) space for overlays
    pub highlight: [u8; 3],
    /// Calibrated channel windows for range classification
    pub bounds: HsvBounds,
}

static PROFILES: [TargetProfile; 2] = [
    // Green
    TargetProfile {
        reference: [60, 255, 255],
        highlight: [0, 255, 0],
        bounds: HsvBounds {
            hue_min: 35,
            hue_max: 85,
            sat_min: DEFAULT_SAT_MIN,
            sat_max: DEFAULT_SAT_MAX,
            val_min: DEFAULT_VAL_MIN,
            val_max: DEFAULT_VAL_MAX,
        },
    },
    // Blue
    TargetProfile {
        reference: [120, 255, 255],
        highlight: [0, 0, 255],
        bounds: HsvBounds {
            hue_min: 90,
            hue_max: 130,
            sat_min: DEFAULT_SAT_MIN,
            sat_max: DEFAULT_SAT_MAX,
            val_min: DEFAULT_VAL_MIN,
            val_max: DEFAULT_VAL_MAX,
        },
    },
];

impl Target {
    /// All supported targets, in profile-table order
    pub const ALL: [Target; 2] = [Target::Green, Target::Blue];

    /// Profile for this target
    pub fn profile(self) -> &'static TargetProfile {
        &PROFILES[self as usize]
    }

    /// Lowercase name as used on the command line and in config files
    pub fn name(self) -> &'static str {
        match self {
            Target::Green => "green",
            Target::Blue => "blue",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(Target::Green),
            "blue" => Ok(Target::Blue),
            other => Err(SegmentError::invalid_parameter("target", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_match_calibrated_windows() {
        let green = Target::Green.profile();
        assert_eq!(green.reference, [60, 255, 255]);
        assert_eq!(green.highlight, [0, 255, 0]);
        assert_eq!(green.bounds.hue_min, 35);
        assert_eq!(green.bounds.hue_max, 85);

        let blue = Target::Blue.profile();
        assert_eq!(blue.reference, [120, 255, 255]);
        assert_eq!(blue.highlight, [0, 0, 255]);
        assert_eq!(blue.bounds.hue_min, 90);
        assert_eq!(blue.bounds.hue_max, 130);
    }

    #[test]
    fn test_profile_bounds_are_well_formed() {
        for target in Target::ALL {
            let bounds = target.profile().bounds;
            assert!(bounds.hue_min <= bounds.hue_max);
            assert!(bounds.sat_min <= bounds.sat_max);
            assert!(bounds.val_min <= bounds.val_max);
        }
    }

    #[test]
    fn test_name_round_trip() {
        for target in Target::ALL {
            assert_eq!(target.name().parse::<Target>().unwrap(), target);
        }
        assert!("magenta".parse::<Target>().is_err());
        assert!("GREEN".parse::<Target>().is_err());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Target::Blue).unwrap(), "\"blue\"");
        let parsed: Target = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(parsed, Target::Green);
    }
}
