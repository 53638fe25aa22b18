//! Session statistics

use serde::{Deserialize, Serialize};

use pf_machine::Round;

/// Aggregate outcome of a batch of rounds.
///
/// Merging is associative and commutative, so worker-local stats can be
/// combined in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Player actions executed.
    pub rounds: u64,
    /// Individual spins, free spins included.
    pub spins: u64,
    /// Sum of wagers debited.
    pub total_wager: i64,
    /// Sum of round payouts.
    pub total_win: i64,
    /// Rounds that paid anything.
    pub winning_rounds: u64,
    /// Rounds whose main spin triggered the free-spin cascade.
    pub bonus_rounds: u64,
    /// Free spins executed across all cascades.
    pub free_spins: u64,
    /// Largest single-round payout seen.
    pub max_round_win: i64,
}

impl SessionStats {
    /// Fold one round into the stats.
    pub fn record(&mut self, wager: i64, round: &Round) {
        self.rounds += 1;
        self.spins += round.spins.len() as u64;
        self.total_wager += wager;
        self.total_win += round.total;
        if round.total > 0 {
            self.winning_rounds += 1;
        }
        if round.spins.len() > 1 {
            self.bonus_rounds += 1;
            self.free_spins += round.spins.len() as u64 - 1;
        }
        self.max_round_win = self.max_round_win.max(round.total);
    }

    /// Merge another batch into this one.
    pub fn merge(&mut self, other: &SessionStats) {
        self.rounds += other.rounds;
        self.spins += other.spins;
        self.total_wager += other.total_wager;
        self.total_win += other.total_win;
        self.winning_rounds += other.winning_rounds;
        self.bonus_rounds += other.bonus_rounds;
        self.free_spins += other.free_spins;
        self.max_round_win = self.max_round_win.max(other.max_round_win);
    }

    /// Return-to-player percentage.
    pub fn rtp(&self) -> f64 {
        if self.total_wager > 0 {
            self.total_win as f64 / self.total_wager as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Share of rounds that paid anything, in percent.
    pub fn hit_rate(&self) -> f64 {
        if self.rounds > 0 {
            self.winning_rounds as f64 / self.rounds as f64 * 100.0
        } else {
            0.0
        }
    }
}
