//! Factory configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Optional limits the [`SlotFactory`](crate::SlotFactory) applies after its
/// mandatory checks.
///
/// The default configuration has no limits, so a default factory accepts
/// every well-formed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    /// Shortest accepted window.
    pub min_duration: Option<Duration>,
    /// Longest accepted window.
    pub max_duration: Option<Duration>,
}

impl SlotConfig {
    /// Creates a configuration without limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shortest accepted window.
    #[must_use]
    pub const fn with_min_duration(mut self, min: Duration) -> Self {
        self.min_duration = Some(min);
        self
    }

    /// Sets the longest accepted window.
    #[must_use]
    pub const fn with_max_duration(mut self, max: Duration) -> Self {
        self.max_duration = Some(max);
        self
    }

    /// Checks that the limits are usable.
    ///
    /// # Errors
    ///
    /// Returns `SlotError::InvalidConfig` if a limit is zero or the minimum
    /// exceeds the maximum.
    pub fn validate(&self) -> Result<()> {
        if self.min_duration.is_some_and(|min| min.is_zero()) {
            return Err(SlotError::InvalidConfig {
                reason: "min_duration must be non-zero".into(),
            });
        }
        if self.max_duration.is_some_and(|max| max.is_zero()) {
            return Err(SlotError::InvalidConfig {
                reason: "max_duration must be non-zero".into(),
            });
        }
        if let (Some(min), Some(max)) = (self.min_duration, self.max_duration) {
            if min > max {
                return Err(SlotError::InvalidConfig {
                    reason: format!(
                        "min_duration {}s exceeds max_duration {}s",
                        min.as_secs(),
                        max.as_secs()
                    ),
                });
            }
        }
        Ok(())
    }

    /// Checks a window length against the configured limits.
    pub(crate) fn check_duration(&self, seconds: u64) -> Result<()> {
        if let Some(min) = self.min_duration {
            if seconds < min.as_secs() {
                return Err(SlotError::DurationTooShort {
                    duration: seconds,
                    min: min.as_secs(),
                });
            }
        }
        if let Some(max) = self.max_duration {
            if seconds > max.as_secs() {
                return Err(SlotError::DurationTooLong {
                    duration: seconds,
                    max: max.as_secs(),
                });
            }
        }
        Ok(())
    }
}
