//! Error types for molt-slot.

use thiserror::Error;

/// Result type for slot operations.
pub type Result<T> = std::result::Result<T, SlotError>;

/// Errors that can occur while building or configuring slots.
///
/// Validation errors are terminal: the descriptor is malformed and has to be
/// corrected by the caller before it is resubmitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// No descriptor was supplied at all.
    #[error("slot descriptor cannot be nil")]
    NilDescriptor,

    /// Descriptor present but its resources are unset.
    #[error("slot resources are required")]
    MissingResources,

    /// Descriptor has no end time.
    #[error("slot end time is required")]
    MissingEndTime,

    /// Descriptor has no start time.
    #[error("slot start time is required")]
    MissingStartTime,

    /// Start time is not strictly earlier than end time.
    #[error("start time {start} must be before end time {end}")]
    StartNotBeforeEnd {
        /// Start of the window, Unix seconds.
        start: i64,
        /// End of the window, Unix seconds.
        end: i64,
    },

    /// Window is shorter than the configured minimum.
    #[error("slot duration {duration}s is below minimum {min}s")]
    DurationTooShort {
        /// Window length in seconds.
        duration: u64,
        /// Configured minimum in seconds.
        min: u64,
    },

    /// Window is longer than the configured maximum.
    #[error("slot duration {duration}s exceeds maximum {max}s")]
    DurationTooLong {
        /// Window length in seconds.
        duration: u64,
        /// Configured maximum in seconds.
        max: u64,
    },

    /// Raw network tier value outside the known range.
    #[error("unknown network tier: {0}")]
    UnknownNetworkTier(i32),

    /// Slot configuration is inconsistent.
    #[error("invalid slot config: {reason}")]
    InvalidConfig {
        /// Description of why the configuration is invalid.
        reason: String,
    },
}

impl SlotError {
    /// Returns true if the error was caused by a malformed descriptor.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::NilDescriptor
                | Self::MissingResources
                | Self::MissingEndTime
                | Self::MissingStartTime
                | Self::StartNotBeforeEnd { .. }
                | Self::DurationTooShort { .. }
                | Self::DurationTooLong { .. }
        )
    }
}
