//! Raw resource and slot descriptors.
//!
//! These are the already-decoded values an order-intake path hands to
//! [`SlotFactory`](crate::SlotFactory). Nothing here is validated.

use serde::{Deserialize, Serialize};

use crate::network::NetworkTier;

/// Resource quantities requested by a bid or offered by an ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceDescriptor {
    /// Number of CPU cores.
    pub cpu_cores: u64,
    /// RAM in bytes.
    pub ram_bytes: u64,
    /// Number of GPUs.
    pub gpu_count: u64,
    /// Storage in bytes.
    pub storage_bytes: u64,
    /// Inbound traffic allowance in bytes.
    pub net_traffic_in: u64,
    /// Outbound traffic allowance in bytes.
    pub net_traffic_out: u64,
    /// Network access tier.
    pub network_tier: NetworkTier,
}

impl ResourceDescriptor {
    /// Creates an all-zero descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the CPU core count.
    #[must_use]
    pub const fn with_cpu_cores(mut self, cores: u64) -> Self {
        self.cpu_cores = cores;
        self
    }

    /// Sets the RAM size in bytes.
    #[must_use]
    pub const fn with_ram_bytes(mut self, bytes: u64) -> Self {
        self.ram_bytes = bytes;
        self
    }

    /// Sets the GPU count.
    #[must_use]
    pub const fn with_gpu_count(mut self, count: u64) -> Self {
        self.gpu_count = count;
        self
    }

    /// Sets the storage size in bytes.
    #[must_use]
    pub const fn with_storage_bytes(mut self, bytes: u64) -> Self {
        self.storage_bytes = bytes;
        self
    }

    /// Sets the inbound traffic allowance.
    #[must_use]
    pub const fn with_net_traffic_in(mut self, bytes: u64) -> Self {
        self.net_traffic_in = bytes;
        self
    }

    /// Sets the outbound traffic allowance.
    #[must_use]
    pub const fn with_net_traffic_out(mut self, bytes: u64) -> Self {
        self.net_traffic_out = bytes;
        self
    }

    /// Sets the network tier.
    #[must_use]
    pub const fn with_network_tier(mut self, tier: NetworkTier) -> Self {
        self.network_tier = tier;
        self
    }
}

/// Externally decoded slot description, as received with an order.
///
/// Every field the factory checks is optional so that a partially populated
/// wire message can be represented faithfully.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotDescriptor {
    /// Window start, Unix seconds.
    pub start_time: Option<i64>,
    /// Window end, Unix seconds.
    pub end_time: Option<i64>,
    /// Requested or offered resources.
    pub resources: Option<ResourceDescriptor>,
    /// Reputation of the supplier; higher is more trusted.
    pub supplier_rating: i64,
}

impl SlotDescriptor {
    /// Creates a descriptor with the given window and resources.
    #[must_use]
    pub fn new(start_time: i64, end_time: i64, resources: ResourceDescriptor) -> Self {
        Self {
            start_time: Some(start_time),
            end_time: Some(end_time),
            resources: Some(resources),
            supplier_rating: 0,
        }
    }

    /// Sets the supplier rating.
    #[must_use]
    pub const fn with_supplier_rating(mut self, rating: i64) -> Self {
        self.supplier_rating = rating;
        self
    }
}
