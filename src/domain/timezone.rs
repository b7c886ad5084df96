//! TimeZone value object
//!
//! A named UTC offset used to render confirmation timestamps in local time.
//! Storage is always UTC; a TimeZone only ever affects presentation.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest real-world UTC offset, -12:00
const MIN_OFFSET_MINUTES: i64 = -12 * 60;

/// Highest real-world UTC offset, +14:00
const MAX_OFFSET_MINUTES: i64 = 14 * 60;

/// A named, immutable UTC offset.
///
/// Equality is structural on (name, offset), so `("EST", -5, 0)` and
/// `("EST", -4, -60)` compare equal while `("EST", -5, 0)` and
/// `("CDT", -5, 0)` do not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeZone {
    name: String,
    offset_minutes: i64,
}

/// Errors that can occur when creating a TimeZone
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeZoneError {
    #[error("Timezone name cannot be empty")]
    EmptyName,

    #[error("Minutes offset must be between -59 and 59 inclusive (got {0})")]
    MinutesOutOfRange(i64),

    #[error("Offset must be between -12:00 and +14:00 (got {0} minutes)")]
    OffsetOutOfRange(i64),
}

impl TimeZone {
    /// Create a new TimeZone with validation.
    ///
    /// The hour and minute components are summed as signed quantities, so
    /// `(-5, 30)` means -04:30.
    ///
    /// # Errors
    /// - `TimeZoneError::EmptyName` if the name is empty after trimming
    /// - `TimeZoneError::MinutesOutOfRange` if the minute component is
    ///   outside [-59, 59]
    /// - `TimeZoneError::OffsetOutOfRange` if the combined offset is outside
    ///   [-12:00, +14:00]
    pub fn new(
        name: impl AsRef<str>,
        offset_hours: i64,
        offset_minutes: i64,
    ) -> Result<Self, TimeZoneError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(TimeZoneError::EmptyName);
        }

        if !(-59..=59).contains(&offset_minutes) {
            return Err(TimeZoneError::MinutesOutOfRange(offset_minutes));
        }

        let total = offset_hours
            .checked_mul(60)
            .and_then(|h| h.checked_add(offset_minutes))
            .ok_or(TimeZoneError::OffsetOutOfRange(i64::MAX))?;
        if !(MIN_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&total) {
            return Err(TimeZoneError::OffsetOutOfRange(total));
        }

        Ok(Self {
            name: name.to_string(),
            offset_minutes: total,
        })
    }

    /// The `("UTC", 0, 0)` zone, used wherever a caller does not care.
    pub fn utc() -> Self {
        Self {
            name: "UTC".to_string(),
            offset_minutes: 0,
        }
    }

    /// Zone name, trimmed
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Offset from UTC as a signed duration
    pub fn offset(&self) -> Duration {
        Duration::minutes(self.offset_minutes)
    }

    /// Offset from UTC in whole minutes
    pub fn offset_minutes(&self) -> i64 {
        self.offset_minutes
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.offset_minutes < 0 { '-' } else { '+' };
        let magnitude = self.offset_minutes.abs();
        write!(
            f,
            "{} UTC{}{:02}:{:02}",
            self.name,
            sign,
            magnitude / 60,
            magnitude % 60
        )
    }
}
