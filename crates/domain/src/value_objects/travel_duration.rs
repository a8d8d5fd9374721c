//! Travel duration value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole-second travel time
///
/// Sub-second precision is dropped on construction from milliseconds, so
/// 999 ms is zero seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct TravelDuration {
    total_seconds: u64,
}

impl TravelDuration {
    /// Create from milliseconds, truncating the sub-second remainder
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self {
            total_seconds: millis / 1000,
        }
    }

    /// Create from whole seconds
    #[must_use]
    pub const fn from_secs(total_seconds: u64) -> Self {
        Self { total_seconds }
    }

    /// Total whole seconds
    #[must_use]
    pub const fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    /// Whole hours component
    #[must_use]
    pub const fn hours(&self) -> u64 {
        self.total_seconds / 3600
    }

    /// Minutes component (0-59)
    #[must_use]
    pub const fn minutes(&self) -> u64 {
        (self.total_seconds % 3600) / 60
    }

    /// Seconds component (0-59)
    #[must_use]
    pub const fn seconds(&self) -> u64 {
        self.total_seconds % 60
    }
}

/// Formats as zero-padded `HH:MM:SS`; hours widen past two digits when needed
impl fmt::Display for TravelDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}
