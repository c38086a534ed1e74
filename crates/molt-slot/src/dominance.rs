//! Dominance ranking between competing slots of the same order kind.
//!
//! A bid that asks for less of every resource dominates one asking for more;
//! an ask that offers more of every resource dominates one offering less.
//! Supplier rating and window start are compared the same way for both kinds.
//!
//! ```
//! use molt_slot::{compare, OrderKind, ResourceDescriptor, Slot, TimeWindow};
//!
//! let small = Slot::unchecked(TimeWindow::default(), ResourceDescriptor::new().with_cpu_cores(1), 0);
//! let large = Slot::unchecked(TimeWindow::default(), ResourceDescriptor::new().with_cpu_cores(2), 0);
//!
//! assert!(compare(&small, &large, OrderKind::Bid));
//! assert!(!compare(&small, &large, OrderKind::Ask));
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::slot::Slot;

/// Side of the order a slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    /// Resource demand (consumer side).
    Bid,
    /// Resource offer (supplier side).
    Ask,
}

impl OrderKind {
    /// Ordering a resource dimension of `one` must have relative to `two`
    /// (or be equal to) for `one` to dominate.
    const fn dominant_ordering(self) -> Ordering {
        match self {
            Self::Bid => Ordering::Less,
            Self::Ask => Ordering::Greater,
        }
    }
}

impl std::fmt::Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bid => write!(f, "bid"),
            Self::Ask => write!(f, "ask"),
        }
    }
}

/// Returns true if `one` dominates `two` for orders of `kind`.
///
/// Every dimension must hold:
///
/// - `one.supplier_rating <= two.supplier_rating`, for both kinds
/// - `one.start >= two.start`, for both kinds
/// - each resource and the network tier: `one <= two` for bids,
///   `one >= two` for asks
///
/// Field-wise equal slots dominate each other for both kinds.
// NOTE: rating and start time do not flip with the order kind. Matching
// outcomes depend on this, keep it until product confirms otherwise.
#[must_use]
pub fn compare(one: &Slot, two: &Slot, kind: OrderKind) -> bool {
    if one.supplier_rating() > two.supplier_rating() {
        return false;
    }
    if one.time_window().start() < two.time_window().start() {
        return false;
    }

    let want = kind.dominant_ordering();
    let holds = |a: u64, b: u64| a.cmp(&b) != want.reverse();

    let r1 = one.resources();
    let r2 = two.resources();

    holds(r1.cpu_cores, r2.cpu_cores)
        && holds(r1.ram_bytes, r2.ram_bytes)
        && holds(r1.gpu_count, r2.gpu_count)
        && holds(r1.storage_bytes, r2.storage_bytes)
        && holds(r1.net_traffic_in, r2.net_traffic_in)
        && holds(r1.net_traffic_out, r2.net_traffic_out)
        && r1.network_tier.cmp(&r2.network_tier) != want.reverse()
}

impl Slot {
    /// Returns true if this slot dominates `other` for orders of `kind`.
    ///
    /// Same as [`compare`]`(self, other, kind)`.
    #[must_use]
    pub fn dominates(&self, other: &Self, kind: OrderKind) -> bool {
        compare(self, other, kind)
    }
}
