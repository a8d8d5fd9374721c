//! Travel mode value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Vehicle profile used for routing
///
/// The lowercase names are the wire values expected by the routing API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// Car (default and fallback)
    #[default]
    Car,
    /// Bicycle
    Bike,
    /// Walking
    Foot,
    /// Bus; coverage depends on the region
    Bus,
    /// Motorcycle
    Motorcycle,
}

impl TravelMode {
    /// All modes in menu order
    pub const ALL: [Self; 5] = [
        Self::Car,
        Self::Bike,
        Self::Foot,
        Self::Bus,
        Self::Motorcycle,
    ];

    /// Wire name sent as the `vehicle` parameter
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bike => "bike",
            Self::Foot => "foot",
            Self::Bus => "bus",
            Self::Motorcycle => "motorcycle",
        }
    }

    /// Capitalized label for display
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Bike => "Bike",
            Self::Foot => "Foot",
            Self::Bus => "Bus",
            Self::Motorcycle => "Motorcycle",
        }
    }

    /// Number of this mode in the selection menu (1-based)
    #[must_use]
    pub const fn menu_number(&self) -> u8 {
        match self {
            Self::Car => 1,
            Self::Bike => 2,
            Self::Foot => 3,
            Self::Bus => 4,
            Self::Motorcycle => 5,
        }
    }

    /// Resolve user input into a mode, never failing
    ///
    /// Accepts the menu numbers `1`-`5` or a mode name (case-insensitive).
    /// Anything else, including out-of-range numbers, selects [`TravelMode::Car`]
    /// and marks the selection as a fallback so the caller can warn.
    #[must_use]
    pub fn from_selector(input: &str) -> ModeSelection {
        let trimmed = input.trim();
        let matched = match trimmed {
            "1" => Some(Self::Car),
            "2" => Some(Self::Bike),
            "3" => Some(Self::Foot),
            "4" => Some(Self::Bus),
            "5" => Some(Self::Motorcycle),
            other => other.parse().ok(),
        };

        match matched {
            Some(mode) => ModeSelection {
                mode,
                rejected_input: None,
            },
            None => ModeSelection {
                mode: Self::Car,
                rejected_input: Some(trimmed.to_string()),
            },
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "bike" => Ok(Self::Bike),
            "foot" => Ok(Self::Foot),
            "bus" => Ok(Self::Bus),
            "motorcycle" => Ok(Self::Motorcycle),
            _ => Err(DomainError::UnknownTravelMode(s.to_string())),
        }
    }
}

/// Outcome of [`TravelMode::from_selector`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSelection {
    /// Mode to route with
    pub mode: TravelMode,
    /// The unrecognized input, if the car fallback was applied
    pub rejected_input: Option<String>,
}

impl ModeSelection {
    /// Whether the input was unrecognized and car was substituted
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.rejected_input.is_some()
    }

    /// Warning text to surface when the fallback was applied
    #[must_use]
    pub fn warning(&self) -> Option<String> {
        self.rejected_input.as_ref().map(|input| {
            format!("Invalid travel mode '{input}', using '{}' by default", TravelMode::Car)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_map_to_modes() {
        assert_eq!(TravelMode::from_selector("1").mode, TravelMode::Car);
        assert_eq!(TravelMode::from_selector("2").mode, TravelMode::Bike);
        assert_eq!(TravelMode::from_selector("3").mode, TravelMode::Foot);
        assert_eq!(TravelMode::from_selector("4").mode, TravelMode::Bus);
        assert_eq!(TravelMode::from_selector("5").mode, TravelMode::Motorcycle);
    }

    #[test]
    fn menu_number_roundtrips_through_selector() {
        for mode in TravelMode::ALL {
            let selection = TravelMode::from_selector(&mode.menu_number().to_string());
            assert_eq!(selection.mode, mode);
            assert!(!selection.is_fallback());
        }
    }

    #[test]
    fn names_are_accepted_case_insensitively() {
        assert_eq!(TravelMode::from_selector("Bike").mode, TravelMode::Bike);
        assert_eq!(
            TravelMode::from_selector(" MOTORCYCLE ").mode,
            TravelMode::Motorcycle
        );
        assert!(!TravelMode::from_selector("car").is_fallback());
    }

    #[test]
    fn unrecognized_input_falls_back_to_car() {
        for input in ["", "0", "6", "99", "-1", "plane", "1.0"] {
            let selection = TravelMode::from_selector(input);
            assert_eq!(selection.mode, TravelMode::Car, "input {input:?}");
            assert!(selection.is_fallback());
            assert!(selection.warning().is_some());
        }
    }

    #[test]
    fn fallback_warning_names_input() {
        let warning = TravelMode::from_selector("7").warning().unwrap();
        assert!(warning.contains("'7'"));
        assert!(warning.contains("car"));
    }

    #[test]
    fn recognized_selection_has_no_warning() {
        assert!(TravelMode::from_selector("1").warning().is_none());
    }

    #[test]
    fn from_str_is_strict() {
        assert_eq!("foot".parse::<TravelMode>(), Ok(TravelMode::Foot));
        assert!("3".parse::<TravelMode>().is_err());
        assert!("train".parse::<TravelMode>().is_err());
    }

    #[test]
    fn wire_names_and_labels() {
        assert_eq!(TravelMode::Motorcycle.to_string(), "motorcycle");
        assert_eq!(TravelMode::Bus.label(), "Bus");
        assert_eq!(TravelMode::default(), TravelMode::Car);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TravelMode::Bike).unwrap(),
            "\"bike\""
        );
    }
}
