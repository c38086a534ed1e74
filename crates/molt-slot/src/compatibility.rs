//! Bid/ask compatibility.
//!
//! Runs every per-dimension predicate with the bid as the requirement and
//! the ask as the offer and reports which dimensions fall short.

use serde::{Deserialize, Serialize};

use crate::slot::Slot;

/// A single dimension a bid and an ask are matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Availability window coverage.
    Time,
    /// Supplier rating.
    SupplierRating,
    /// CPU cores.
    CpuCores,
    /// RAM bytes.
    RamBytes,
    /// GPU count.
    GpuCount,
    /// Storage bytes.
    Storage,
    /// Inbound traffic.
    NetTrafficIn,
    /// Outbound traffic.
    NetTrafficOut,
    /// Network access tier.
    NetworkTier,
}

impl Dimension {
    /// All dimensions in evaluation order.
    pub const ALL: [Self; 9] = [
        Self::Time,
        Self::SupplierRating,
        Self::CpuCores,
        Self::RamBytes,
        Self::GpuCount,
        Self::Storage,
        Self::NetTrafficIn,
        Self::NetTrafficOut,
        Self::NetworkTier,
    ];

    /// Returns true if `offer` meets `requirement` in this dimension.
    #[must_use]
    pub const fn satisfied(self, requirement: &Slot, offer: &Slot) -> bool {
        match self {
            Self::Time => requirement.is_covered_by(offer),
            Self::SupplierRating => requirement.satisfies_supplier_rating(offer),
            Self::CpuCores => requirement.satisfies_cpu_cores(offer),
            Self::RamBytes => requirement.satisfies_ram_bytes(offer),
            Self::GpuCount => requirement.satisfies_gpu_count(offer),
            Self::Storage => requirement.satisfies_storage(offer),
            Self::NetTrafficIn => requirement.satisfies_net_traffic_in(offer),
            Self::NetTrafficOut => requirement.satisfies_net_traffic_out(offer),
            Self::NetworkTier => requirement.satisfies_network_tier(offer),
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Time => "time",
            Self::SupplierRating => "supplier_rating",
            Self::CpuCores => "cpu_cores",
            Self::RamBytes => "ram_bytes",
            Self::GpuCount => "gpu_count",
            Self::Storage => "storage",
            Self::NetTrafficIn => "net_traffic_in",
            Self::NetTrafficOut => "net_traffic_out",
            Self::NetworkTier => "network_tier",
        };
        f.write_str(name)
    }
}

/// Returns every dimension in which `ask` does not satisfy `bid`, in
/// [`Dimension::ALL`] order.
#[must_use]
pub fn mismatches(bid: &Slot, ask: &Slot) -> Vec<Dimension> {
    Dimension::ALL
        .into_iter()
        .filter(|dim| !dim.satisfied(bid, ask))
        .collect()
}

/// Returns true if `ask` satisfies `bid` in every dimension.
#[must_use]
pub fn is_compatible(bid: &Slot, ask: &Slot) -> bool {
    Dimension::ALL.iter().all(|dim| dim.satisfied(bid, ask))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ResourceDescriptor, SlotDescriptor};
    use crate::NetworkTier;

    const T: i64 = 1_700_000_000;

    fn bid() -> Slot {
        let desc = SlotDescriptor::new(
            T,
            T + 3600,
            ResourceDescriptor::new()
                .with_cpu_cores(4)
                .with_ram_bytes(8 << 30)
                .with_gpu_count(1)
                .with_network_tier(NetworkTier::Outbound),
        )
        .with_supplier_rating(5);
        Slot::new(&desc).expect("valid bid descriptor")
    }

    fn ask(resources: ResourceDescriptor, start: i64, end: i64, rating: i64) -> Slot {
        let desc = SlotDescriptor::new(start, end, resources).with_supplier_rating(rating);
        Slot::new(&desc).expect("valid ask descriptor")
    }

    fn generous() -> ResourceDescriptor {
        ResourceDescriptor::new()
            .with_cpu_cores(16)
            .with_ram_bytes(64 << 30)
            .with_gpu_count(4)
            .with_storage_bytes(1 << 40)
            .with_net_traffic_in(u64::MAX)
            .with_net_traffic_out(u64::MAX)
            .with_network_tier(NetworkTier::Incoming)
    }

    #[test]
    fn fixtures_pass_validation() {
        let desc = SlotDescriptor::new(T - 3600, T + 7200, generous()).with_supplier_rating(10);
        assert_eq!(Slot::new(&desc).map(|slot| slot.to_descriptor()), Ok(desc));
        assert_ne!(bid(), Slot::empty());
    }

    #[test]
    fn generous_ask_is_compatible() {
        let ask = ask(generous(), T - 3600, T + 7200, 10);
        assert_ne!(ask, Slot::empty());
        assert!(is_compatible(&bid(), &ask));
        assert!(mismatches(&bid(), &ask).is_empty());
    }

    #[test]
    fn reports_every_failing_dimension() {
        let poor = ResourceDescriptor::new()
            .with_cpu_cores(2)
            .with_ram_bytes(64 << 30)
            .with_gpu_count(0);
        let ask = ask(poor, T + 600, T + 3000, 1);

        assert_eq!(
            mismatches(&bid(), &ask),
            vec![
                Dimension::Time,
                Dimension::SupplierRating,
                Dimension::CpuCores,
                Dimension::GpuCount,
                Dimension::NetworkTier,
            ]
        );
        assert!(!is_compatible(&bid(), &ask));
    }

    #[test]
    fn time_alone_can_break_compatibility() {
        let ask = ask(generous(), T + 1, T + 7200, 10);
        assert_eq!(mismatches(&bid(), &ask), vec![Dimension::Time]);
    }

    #[test]
    fn dimension_display_names() {
        assert_eq!(Dimension::NetTrafficIn.to_string(), "net_traffic_in");
        assert_eq!(Dimension::Time.to_string(), "time");
    }
}
