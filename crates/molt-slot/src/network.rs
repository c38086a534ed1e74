//! Network access tiers.

use serde::{Deserialize, Serialize};

use crate::error::SlotError;

/// Network access capability of a slot, ordered from least to most capable.
///
/// `Incoming` implies `Outbound`, which implies `None`, so the derived
/// ordering follows the ordinal value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum NetworkTier {
    /// No network access.
    #[default]
    None = 0,
    /// Outbound connections only.
    Outbound = 1,
    /// Incoming connections (and everything below).
    Incoming = 2,
}

impl NetworkTier {
    /// Returns the ordinal value of the tier.
    #[must_use]
    pub const fn ordinal(self) -> i32 {
        self as i32
    }

    /// Returns true if this tier grants at least the access of `required`.
    #[must_use]
    pub const fn grants(self, required: Self) -> bool {
        self.ordinal() >= required.ordinal()
    }
}

impl TryFrom<i32> for NetworkTier {
    type Error = SlotError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Outbound),
            2 => Ok(Self::Incoming),
            other => Err(SlotError::UnknownNetworkTier(other)),
        }
    }
}

impl std::fmt::Display for NetworkTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Outbound => write!(f, "outbound"),
            Self::Incoming => write!(f, "incoming"),
        }
    }
}
