//! Validated resource slots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::descriptor::{ResourceDescriptor, SlotDescriptor};
use crate::error::SlotError;
use crate::factory::SlotFactory;
use crate::network::NetworkTier;

/// Availability window of a slot, in Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeWindow {
    start: i64,
    end: i64,
}

impl TimeWindow {
    /// Creates a window without checking that `start < end`.
    #[must_use]
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Window start, Unix seconds.
    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// Window end, Unix seconds.
    #[must_use]
    pub const fn end(&self) -> i64 {
        self.end
    }

    /// Length of the window in seconds, zero for an empty or inverted window.
    #[must_use]
    pub const fn duration_seconds(&self) -> u64 {
        if self.end > self.start {
            self.end.abs_diff(self.start)
        } else {
            0
        }
    }

    /// Window start as a UTC timestamp, if representable.
    #[must_use]
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.start, 0)
    }

    /// Window end as a UTC timestamp, if representable.
    #[must_use]
    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.end, 0)
    }

    /// Returns true if `other` fully contains this window.
    #[must_use]
    pub const fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && other.end >= self.end
    }
}

/// A resource slot attached to a bid or an ask.
///
/// Slots produced by [`SlotFactory`] satisfy `start < end` and carry the
/// resources and rating of the descriptor they were built from. A slot is
/// never mutated after construction, so it can be shared freely across
/// threads.
///
/// [`Slot::empty`] and [`Slot::unchecked`] bypass validation. They exist for
/// comparisons against data that is not populated yet; every predicate treats
/// their zero fields like any other value. Slots serialize but do not
/// deserialize; decode a [`SlotDescriptor`] and validate it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Slot {
    time_window: TimeWindow,
    resources: ResourceDescriptor,
    supplier_rating: i64,
}

impl Slot {
    /// Validates `descriptor` with the default factory.
    ///
    /// # Errors
    ///
    /// Returns the first failing check, see [`SlotFactory::create`].
    pub fn new(descriptor: &SlotDescriptor) -> Result<Self, SlotError> {
        SlotFactory::default().create(Some(descriptor))
    }

    /// Returns the all-zero slot.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            time_window: TimeWindow::new(0, 0),
            resources: ResourceDescriptor {
                cpu_cores: 0,
                ram_bytes: 0,
                gpu_count: 0,
                storage_bytes: 0,
                net_traffic_in: 0,
                net_traffic_out: 0,
                network_tier: NetworkTier::None,
            },
            supplier_rating: 0,
        }
    }

    /// Builds a slot without running any validation.
    #[must_use]
    pub const fn unchecked(
        time_window: TimeWindow,
        resources: ResourceDescriptor,
        supplier_rating: i64,
    ) -> Self {
        Self {
            time_window,
            resources,
            supplier_rating,
        }
    }

    /// The availability window.
    #[must_use]
    pub const fn time_window(&self) -> &TimeWindow {
        &self.time_window
    }

    /// The requested or offered resources.
    #[must_use]
    pub const fn resources(&self) -> &ResourceDescriptor {
        &self.resources
    }

    /// The supplier rating.
    #[must_use]
    pub const fn supplier_rating(&self) -> i64 {
        self.supplier_rating
    }

    /// Converts the slot back into the descriptor it was built from.
    #[must_use]
    pub const fn to_descriptor(&self) -> SlotDescriptor {
        SlotDescriptor {
            start_time: Some(self.time_window.start),
            end_time: Some(self.time_window.end),
            resources: Some(self.resources),
            supplier_rating: self.supplier_rating,
        }
    }
}

impl TryFrom<&SlotDescriptor> for Slot {
    type Error = SlotError;

    fn try_from(descriptor: &SlotDescriptor) -> Result<Self, Self::Error> {
        Self::new(descriptor)
    }
}
