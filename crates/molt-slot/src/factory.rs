//! Slot construction and validation.

use tracing::{debug, trace};

use crate::config::SlotConfig;
use crate::descriptor::SlotDescriptor;
use crate::error::{Result, SlotError};
use crate::slot::{Slot, TimeWindow};

/// Validates descriptors and produces [`Slot`]s.
///
/// Checks run in a fixed order and the first failure is reported:
///
/// 1. descriptor absent: [`SlotError::NilDescriptor`]
/// 2. resources absent: [`SlotError::MissingResources`]
/// 3. end time absent: [`SlotError::MissingEndTime`]
/// 4. start time absent: [`SlotError::MissingStartTime`]
/// 5. `start >= end`: [`SlotError::StartNotBeforeEnd`]
/// 6. duration limits from [`SlotConfig`], if any
///
/// Callers branch on the error kind, so the order is part of the contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotFactory {
    config: SlotConfig,
}

impl SlotFactory {
    /// Creates a factory with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `SlotError::InvalidConfig` if the configuration is inconsistent.
    pub fn new(config: SlotConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &SlotConfig {
        &self.config
    }

    /// Validates `descriptor` and copies it into a new slot.
    ///
    /// The descriptor is only read; the returned slot owns its own copy.
    pub fn create(&self, descriptor: Option<&SlotDescriptor>) -> Result<Slot> {
        let result = self.validate(descriptor);
        match &result {
            Ok(slot) => trace!(
                start = slot.time_window().start(),
                end = slot.time_window().end(),
                "slot created"
            ),
            Err(e) => debug!(error = %e, "slot descriptor rejected"),
        }
        result
    }

    fn validate(&self, descriptor: Option<&SlotDescriptor>) -> Result<Slot> {
        let descriptor = descriptor.ok_or(SlotError::NilDescriptor)?;
        let resources = descriptor.resources.ok_or(SlotError::MissingResources)?;
        let end = descriptor.end_time.ok_or(SlotError::MissingEndTime)?;
        let start = descriptor.start_time.ok_or(SlotError::MissingStartTime)?;

        if start >= end {
            return Err(SlotError::StartNotBeforeEnd { start, end });
        }

        let window = TimeWindow::new(start, end);
        self.config.check_duration(window.duration_seconds())?;

        Ok(Slot::unchecked(
            window,
            resources,
            descriptor.supplier_rating,
        ))
    }
}
