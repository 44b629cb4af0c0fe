//! Interpreting dice pools against a threshold.
//!
//! A [`SuccessTest`] rolls a pool and compares its hits to a threshold.
//! Every hit beyond the threshold is a net hit, and four or more net hits
//! make a critical success.

pub mod success;

pub use success::SuccessTest;

use serde::{Deserialize, Serialize};

/// Net hits needed for a critical success.
pub const CRITICAL_NET_HITS: u64 = 4;

/// The outcome of a success test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A success with at least four net hits.
    CriticalSuccess {
        /// Hits beyond the threshold.
        net_hits: u64,
    },
    /// The threshold was met.
    Success {
        /// Hits beyond the threshold.
        net_hits: u64,
    },
    /// The threshold was not met.
    Failure,
    /// The threshold was not met and the roll was a critical glitch.
    Fumble,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CriticalSuccess { net_hits } => {
                write!(f, "Critical Success (net hits {net_hits})")
            }
            Self::Success { net_hits } => write!(f, "Success (net hits {net_hits})"),
            Self::Failure => write!(f, "Failure"),
            Self::Fumble => write!(f, "Critical Glitch"),
        }
    }
}
