//! Spin result types

use serde::{Deserialize, Serialize};

use crate::reels::Stops;

/// Whether a spin was the player-initiated main spin or part of the
/// free-spin round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinKind {
    Main,
    Free,
}

/// Outcome of a single spin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinResult {
    #[serde(rename = "type")]
    pub kind: SpinKind,
    /// Pay for this spin, bet and tier multiplier applied.
    pub total: i64,
    /// The raw stops as drawn, recorded verbatim for auditability.
    pub stops: Stops,
}

/// Full outcome of one player action: the main spin plus every free spin
/// of the cascade it triggered, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub spins: Vec<SpinResult>,
    pub total: i64,
}

impl Round {
    /// Assemble a round, summing the spin totals.
    pub fn new(spins: Vec<SpinResult>) -> Self {
        let total = spins.iter().map(|spin| spin.total).sum();
        Self { spins, total }
    }
}
