//! Scatter bonus evaluation
//!
//! Scatters pay on total occurrence count across the visible window,
//! ignoring payline geometry. A positive raw scatter pay triggers the
//! free-spin round; the pay itself is withheld when a payline already
//! paid out the very same scatter run as a line win.

use crate::paytable::Paytable;
use crate::reels::{ReelWindow, SymbolId};
use crate::strike::Strike;

/// Outcome of evaluating the scatter bonus for one spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusOutcome {
    /// Bonus pay after double-pay suppression.
    pub pay: i64,
    /// Whether the free-spin round triggers. Decided on the raw pay,
    /// before suppression.
    pub triggered: bool,
}

/// Evaluate the scatter bonus.
///
/// `line_strikes` are the strikes already selected per payline this spin.
/// Suppression requires a line strike whose non-wild scatter count equals
/// the whole window's scatter count exactly; a line that captured only a
/// subset of the scatters does not suppress the bonus.
pub fn evaluate(
    window: &ReelWindow,
    paytable: &Paytable,
    scatter: SymbolId,
    line_strikes: &[Strike],
) -> BonusOutcome {
    let count = window.count(scatter);
    let mut pay = paytable.pay(&Strike {
        len: count,
        symbol: scatter,
        matched: count,
    });
    let triggered = pay > 0;
    if triggered
        && line_strikes
            .iter()
            .any(|strike| strike.symbol == scatter && strike.matched == count)
    {
        // The same scatters were already paid as a line win.
        pay = 0;
    }
    BonusOutcome { pay, triggered }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reels::ReelRow;

    const SCATTER: SymbolId = 11;

    fn table() -> Paytable {
        [(SCATTER, [0, 0, 2, 10, 50])].into_iter().collect()
    }

    fn window_with_scatters(count: usize) -> ReelWindow {
        let mut rows: [ReelRow; 3] = [[0; 5]; 3];
        for i in 0..count {
            rows[i / 5][i % 5] = SCATTER;
        }
        ReelWindow::from_rows(rows)
    }

    #[test]
    fn too_few_scatters_pay_nothing() {
        let outcome = evaluate(&window_with_scatters(2), &table(), SCATTER, &[]);
        assert_eq!(outcome, BonusOutcome { pay: 0, triggered: false });
    }

    #[test]
    fn scatter_count_pays_and_triggers() {
        let outcome = evaluate(&window_with_scatters(4), &table(), SCATTER, &[]);
        assert_eq!(outcome, BonusOutcome { pay: 10, triggered: true });
    }

    #[test]
    fn count_beyond_table_width_pays_top_entry() {
        let outcome = evaluate(&window_with_scatters(7), &table(), SCATTER, &[]);
        assert_eq!(outcome, BonusOutcome { pay: 50, triggered: true });
    }

    #[test]
    fn exact_line_capture_suppresses_pay_but_not_trigger() {
        let strikes = [Strike {
            len: 3,
            symbol: SCATTER,
            matched: 3,
        }];
        let outcome = evaluate(&window_with_scatters(3), &table(), SCATTER, &strikes);
        assert_eq!(outcome, BonusOutcome { pay: 0, triggered: true });
    }

    #[test]
    fn partial_line_capture_does_not_suppress() {
        // The line saw 3 of the 4 scatters: counts differ, bonus still pays.
        let strikes = [Strike {
            len: 3,
            symbol: SCATTER,
            matched: 3,
        }];
        let outcome = evaluate(&window_with_scatters(4), &table(), SCATTER, &strikes);
        assert_eq!(outcome, BonusOutcome { pay: 10, triggered: true });
    }

    #[test]
    fn non_scatter_strikes_never_suppress() {
        let strikes = [Strike {
            len: 3,
            symbol: 7,
            matched: 3,
        }];
        let outcome = evaluate(&window_with_scatters(3), &table(), SCATTER, &strikes);
        assert_eq!(outcome, BonusOutcome { pay: 2, triggered: true });
    }
}
