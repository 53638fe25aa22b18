//! Paytable and payline definitions

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::reels::{REEL_COUNT, SymbolId};
use crate::strike::Strike;

/// A payline: one row selector per reel column, each in `0..VISIBLE_ROWS`.
pub type Payline = [u8; REEL_COUNT];

/// Payout multipliers for one symbol, indexed by strike length 1..=5.
pub type PayRow = [i64; REEL_COUNT];

/// Mapping from symbol id to its pay row. A symbol with no entry never
/// pays, whatever the run length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Paytable(pub HashMap<SymbolId, PayRow>);

impl Paytable {
    /// Pay value of a strike: the entry for its run length, clamped to the
    /// table width. Unknown symbols and zero-length runs pay nothing.
    pub fn pay(&self, strike: &Strike) -> i64 {
        let Some(row) = self.0.get(&strike.symbol) else {
            return 0;
        };
        if strike.len == 0 {
            return 0;
        }
        row[(strike.len as usize).min(row.len()) - 1]
    }

    /// Resolve competing candidate strikes for one payline: the strictly
    /// better-paying candidate wins, ties keep the first (dominant-symbol)
    /// one. Returns `None` for a line with no candidates.
    pub fn select(&self, candidates: &[Strike]) -> Option<Strike> {
        let mut best = *candidates.first()?;
        let mut best_pay = self.pay(&best);
        for candidate in &candidates[1..] {
            let pay = self.pay(candidate);
            if pay > best_pay {
                best = *candidate;
                best_pay = pay;
            }
        }
        Some(best)
    }

    pub fn get(&self, symbol: SymbolId) -> Option<&PayRow> {
        self.0.get(&symbol)
    }

    pub fn insert(&mut self, symbol: SymbolId, row: PayRow) {
        self.0.insert(symbol, row);
    }
}

impl FromIterator<(SymbolId, PayRow)> for Paytable {
    fn from_iter<I: IntoIterator<Item = (SymbolId, PayRow)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Paytable {
        [
            (1, [0, 0, 1, 2, 3]),
            (5, [0, 0, 1, 2, 3]),
            (9, [1, 2, 4, 8, 16]),
        ]
        .into_iter()
        .collect()
    }

    fn strike(len: u8, symbol: SymbolId, matched: u8) -> Strike {
        Strike {
            len,
            symbol,
            matched,
        }
    }

    #[test]
    fn pay_indexes_by_run_length() {
        let table = table();
        assert_eq!(table.pay(&strike(1, 1, 1)), 0);
        assert_eq!(table.pay(&strike(3, 1, 3)), 1);
        assert_eq!(table.pay(&strike(5, 1, 5)), 3);
    }

    #[test]
    fn pay_clamps_long_runs_to_table_width() {
        // Scatter counts can exceed the reel count; they pay the top entry.
        let table = table();
        assert_eq!(table.pay(&strike(9, 9, 9)), 16);
    }

    #[test]
    fn unknown_symbol_and_empty_run_pay_zero() {
        let table = table();
        assert_eq!(table.pay(&strike(3, 42, 3)), 0);
        assert_eq!(table.pay(&strike(0, 1, 0)), 0);
    }

    #[test]
    fn pay_is_monotonic_for_nondecreasing_rows() {
        let table = table();
        for symbol in [1, 9] {
            for len in 1u8..5 {
                assert!(
                    table.pay(&strike(len, symbol, len)) <= table.pay(&strike(len + 1, symbol, len + 1)),
                    "symbol {symbol} len {len}"
                );
            }
        }
    }

    #[test]
    fn select_prefers_strictly_better_pay() {
        let table = table();
        // Wild run (symbol 9) outpays the dominant run here.
        let picked = table
            .select(&[strike(3, 1, 2), strike(2, 9, 2)])
            .unwrap();
        assert_eq!(picked.symbol, 9);
    }

    #[test]
    fn select_keeps_dominant_on_tie() {
        let table = table();
        // Equal pays: the first (dominant-symbol) strike is kept.
        let picked = table
            .select(&[strike(3, 1, 2), strike(3, 5, 3)])
            .unwrap();
        assert_eq!(picked.symbol, 1);
    }

    #[test]
    fn select_of_empty_candidates_is_none() {
        assert!(table().select(&[]).is_none());
    }
}
