//! # molt-slot
//!
//! Resource slots for the MOLT compute marketplace.
//!
//! A slot describes a time window, the compute resources a bid asks for or
//! an ask offers, and the supplier rating attached to the order. This crate
//! provides:
//!
//! - [`SlotFactory`] — validates a [`SlotDescriptor`] into an immutable [`Slot`]
//! - Per-dimension predicates such as [`Slot::is_covered_by`] and [`Slot::satisfies_cpu_cores`]
//! - [`compare`] — dominance ranking between two slots of the same [`OrderKind`]
//! - [`mismatches`] / [`is_compatible`] — bid/ask compatibility checks
//!
//! Everything here is pure and synchronous. Transport, storage and the
//! matching loop itself live elsewhere.
//!
//! # Example
//!
//! ```
//! use molt_slot::{is_compatible, NetworkTier, ResourceDescriptor, Slot, SlotDescriptor};
//!
//! let bid = Slot::new(&SlotDescriptor::new(
//!     1_000,
//!     4_600,
//!     ResourceDescriptor::new().with_gpu_count(1),
//! ))?;
//!
//! let ask = Slot::new(&SlotDescriptor::new(
//!     0,
//!     10_000,
//!     ResourceDescriptor::new()
//!         .with_gpu_count(2)
//!         .with_network_tier(NetworkTier::Incoming),
//! ))?;
//!
//! assert!(bid.is_covered_by(&ask));
//! assert!(is_compatible(&bid, &ask));
//! # Ok::<(), molt_slot::SlotError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod compatibility;
pub mod config;
pub mod descriptor;
pub mod dominance;
pub mod error;
pub mod factory;
pub mod network;
mod predicates;
pub mod slot;


pub use compatibility::{is_compatible, mismatches, Dimension};
pub use config::SlotConfig;
pub use descriptor::{ResourceDescriptor, SlotDescriptor};
pub use dominance::{compare, OrderKind};
pub use error::{Result, SlotError};
pub use factory::SlotFactory;
pub use network::NetworkTier;
pub use slot::{Slot, TimeWindow};
