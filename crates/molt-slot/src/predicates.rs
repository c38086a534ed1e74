//! Per-dimension compatibility predicates.
//!
//! In every predicate `self` is the requirement and `other` the offer. A
//! predicate holds when the offer meets or exceeds the requirement in that
//! single dimension. All predicates are total and never fail.

use crate::slot::Slot;

impl Slot {
    /// Returns true if `other`'s window fully contains this slot's window.
    ///
    /// This is containment, not overlap: a counterparty window that starts
    /// late or ends early fails even if the two windows intersect.
    #[must_use]
    pub const fn is_covered_by(&self, other: &Self) -> bool {
        self.time_window().is_within(other.time_window())
    }

    /// Rating requirement met by `other`.
    #[must_use]
    pub const fn satisfies_supplier_rating(&self, other: &Self) -> bool {
        self.supplier_rating() <= other.supplier_rating()
    }

    /// CPU core requirement met by `other`.
    #[must_use]
    pub const fn satisfies_cpu_cores(&self, other: &Self) -> bool {
        self.resources().cpu_cores <= other.resources().cpu_cores
    }

    /// RAM requirement met by `other`.
    #[must_use]
    pub const fn satisfies_ram_bytes(&self, other: &Self) -> bool {
        self.resources().ram_bytes <= other.resources().ram_bytes
    }

    /// GPU requirement met by `other`.
    #[must_use]
    pub const fn satisfies_gpu_count(&self, other: &Self) -> bool {
        self.resources().gpu_count <= other.resources().gpu_count
    }

    /// Storage requirement met by `other`.
    #[must_use]
    pub const fn satisfies_storage(&self, other: &Self) -> bool {
        self.resources().storage_bytes <= other.resources().storage_bytes
    }

    /// Inbound traffic requirement met by `other`.
    #[must_use]
    pub const fn satisfies_net_traffic_in(&self, other: &Self) -> bool {
        self.resources().net_traffic_in <= other.resources().net_traffic_in
    }

    /// Outbound traffic requirement met by `other`.
    #[must_use]
    pub const fn satisfies_net_traffic_out(&self, other: &Self) -> bool {
        self.resources().net_traffic_out <= other.resources().net_traffic_out
    }

    /// Network tier requirement met by `other`.
    #[must_use]
    pub const fn satisfies_network_tier(&self, other: &Self) -> bool {
        other
            .resources()
            .network_tier
            .grants(self.resources().network_tier)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::descriptor::ResourceDescriptor;
    use crate::slot::TimeWindow;
    use crate::NetworkTier;

    const T: i64 = 1_700_000_000;
    const HOUR: i64 = 3600;
    const MINUTE: i64 = 60;

    fn window(start: i64, end: i64) -> Slot {
        Slot::unchecked(TimeWindow::new(start, end), ResourceDescriptor::default(), 0)
    }

    fn with_resources(resources: ResourceDescriptor) -> Slot {
        Slot::unchecked(TimeWindow::default(), resources, 0)
    }

    #[test_case(T - HOUR, T + 2 * HOUR, true ; "counterpart contains window")]
    #[test_case(T + 10 * MINUTE, T + HOUR - 10 * MINUTE, false ; "counterpart inside window")]
    #[test_case(T - 10 * MINUTE, T + HOUR - 10 * MINUTE, false ; "counterpart ends early")]
    #[test_case(T + 10 * MINUTE, T + HOUR + 10 * MINUTE, false ; "counterpart starts late")]
    #[test_case(T, T + HOUR, true ; "identical windows")]
    fn coverage(other_start: i64, other_end: i64, expected: bool) {
        let slot = window(T, T + HOUR);
        let other = window(other_start, other_end);
        assert_eq!(slot.is_covered_by(&other), expected);
    }

    #[test]
    fn coverage_is_not_symmetric() {
        let narrow = window(T, T + HOUR);
        let wide = window(T - HOUR, T + 2 * HOUR);
        assert!(narrow.is_covered_by(&wide));
        assert!(!wide.is_covered_by(&narrow));
    }

    #[test_case(1, 1, true ; "equal")]
    #[test_case(1, 2, true ; "offer higher")]
    #[test_case(2, 1, false ; "offer lower")]
    fn supplier_rating(required: i64, offered: i64, expected: bool) {
        let one = Slot::unchecked(TimeWindow::default(), ResourceDescriptor::default(), required);
        let two = Slot::unchecked(TimeWindow::default(), ResourceDescriptor::default(), offered);
        assert_eq!(one.satisfies_supplier_rating(&two), expected);
    }

    #[test_case(1, 1, true ; "equal")]
    #[test_case(1, 2, true ; "offer higher")]
    #[test_case(2, 1, false ; "offer lower")]
    fn numeric_dimensions(required: u64, offered: u64, expected: bool) {
        let cases: [(fn(u64) -> ResourceDescriptor, fn(&Slot, &Slot) -> bool); 6] = [
            (
                |v| ResourceDescriptor::new().with_cpu_cores(v),
                Slot::satisfies_cpu_cores,
            ),
            (
                |v| ResourceDescriptor::new().with_ram_bytes(v),
                Slot::satisfies_ram_bytes,
            ),
            (
                |v| ResourceDescriptor::new().with_gpu_count(v),
                Slot::satisfies_gpu_count,
            ),
            (
                |v| ResourceDescriptor::new().with_storage_bytes(v),
                Slot::satisfies_storage,
            ),
            (
                |v| ResourceDescriptor::new().with_net_traffic_in(v),
                Slot::satisfies_net_traffic_in,
            ),
            (
                |v| ResourceDescriptor::new().with_net_traffic_out(v),
                Slot::satisfies_net_traffic_out,
            ),
        ];

        for (build, predicate) in cases {
            let one = with_resources(build(required));
            let two = with_resources(build(offered));
            assert_eq!(predicate(&one, &two), expected);
        }
    }

    #[test_case(NetworkTier::None, NetworkTier::None, true)]
    #[test_case(NetworkTier::None, NetworkTier::Outbound, true)]
    #[test_case(NetworkTier::None, NetworkTier::Incoming, true)]
    #[test_case(NetworkTier::Outbound, NetworkTier::None, false)]
    #[test_case(NetworkTier::Outbound, NetworkTier::Outbound, true)]
    #[test_case(NetworkTier::Outbound, NetworkTier::Incoming, true)]
    #[test_case(NetworkTier::Incoming, NetworkTier::None, false)]
    #[test_case(NetworkTier::Incoming, NetworkTier::Outbound, false)]
    #[test_case(NetworkTier::Incoming, NetworkTier::Incoming, true)]
    fn network_tier(required: NetworkTier, offered: NetworkTier, expected: bool) {
        let one = with_resources(ResourceDescriptor::new().with_network_tier(required));
        let two = with_resources(ResourceDescriptor::new().with_network_tier(offered));
        assert_eq!(one.satisfies_network_tier(&two), expected);
    }

    #[test]
    fn empty_slots_satisfy_each_other() {
        let a = Slot::empty();
        let b = Slot::empty();
        assert!(a.is_covered_by(&b));
        assert!(a.satisfies_supplier_rating(&b));
        assert!(a.satisfies_cpu_cores(&b));
        assert!(a.satisfies_network_tier(&b));
    }
}
