//! Payline scanning
//!
//! Walks one payline left to right and produces the candidate winning runs
//! on it. A line can carry up to two competing interpretations: a run of
//! the first non-wild ("dominant") symbol extended by wild substitution,
//! and the leading pure-wild run paid as wilds. The caller keeps whichever
//! pays more.

use crate::paytable::Payline;
use crate::reels::{ReelWindow, SymbolId};

/// A candidate winning run on one payline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    /// Run length, wild substitutions included.
    pub len: u8,
    /// Symbol the run pays as.
    pub symbol: SymbolId,
    /// Occurrences of `symbol` itself within the run, excluding wilds.
    pub matched: u8,
}

/// Scan one payline and return its candidate strikes.
///
/// Runs never restart mid-line: the scan stops at the first symbol that
/// neither matches the dominant symbol nor is wild. An all-wild line
/// resolves to a single strike paying as wild; a line whose first two
/// symbols already disagree (neither wild) yields a one-symbol run.
pub fn scan_payline(window: &ReelWindow, payline: &Payline, wild: SymbolId) -> Vec<Strike> {
    let mut run = 0u8;
    let mut matched = 0u8;
    let mut wild_run = 0u8;
    let mut dominant: Option<SymbolId> = None;

    for (reel, &selector) in payline.iter().enumerate() {
        let symbol = window.symbol(selector, reel);
        match dominant {
            None if symbol == wild => wild_run += 1,
            None => {
                // First non-wild symbol resolves the run: all leading wilds
                // count toward its length.
                dominant = Some(symbol);
                run = reel as u8 + 1;
                matched = 1;
            }
            Some(_) if symbol == wild => run += 1,
            Some(d) if symbol == d => {
                run += 1;
                matched += 1;
            }
            Some(_) => break,
        }
    }

    let mut strikes = Vec::with_capacity(2);
    if let Some(symbol) = dominant {
        strikes.push(Strike {
            len: run,
            symbol,
            matched,
        });
    }
    if wild_run > 0 {
        strikes.push(Strike {
            len: wild_run,
            symbol: wild,
            matched: wild_run,
        });
    }
    strikes
}
