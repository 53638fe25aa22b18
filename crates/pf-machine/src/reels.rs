//! Reel geometry: strips, stops, and the visible window

/// Reel symbol identifier.
pub type SymbolId = u32;

/// Number of reel columns.
pub const REEL_COUNT: usize = 5;

/// Number of visible rows per reel.
pub const VISIBLE_ROWS: usize = 3;

/// One row of symbols across the reel columns. A reel strip is an ordered,
/// cyclic sequence of these rows; row `i` of the strip holds the symbol each
/// reel shows when that reel stops at index `i`.
pub type ReelRow = [SymbolId; REEL_COUNT];

/// One stop index per reel, as drawn by a [`StopSource`](crate::StopSource).
pub type Stops = [usize; REEL_COUNT];

/// The three rows visible after a spin.
///
/// Each reel contributes strip rows `stop-1`, `stop` and `stop+1` (cyclic)
/// to the top, middle and bottom visible rows respectively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReelWindow {
    rows: [ReelRow; VISIBLE_ROWS],
}

impl ReelWindow {
    /// Materialize the visible window for a set of stops.
    ///
    /// All strip indexing is modulo the strip length; `strip` must be
    /// non-empty (guaranteed by config validation).
    pub fn from_stops(strip: &[ReelRow], stops: &Stops) -> Self {
        let len = strip.len();
        let mut rows = [[0 as SymbolId; REEL_COUNT]; VISIBLE_ROWS];
        for reel in 0..REEL_COUNT {
            let stop = stops[reel] % len;
            rows[0][reel] = strip[(stop + len - 1) % len][reel];
            rows[1][reel] = strip[stop][reel];
            rows[2][reel] = strip[(stop + 1) % len][reel];
        }
        Self { rows }
    }

    /// Build a window directly from three visible rows.
    pub fn from_rows(rows: [ReelRow; VISIBLE_ROWS]) -> Self {
        Self { rows }
    }

    /// Symbol shown at `(row selector, reel column)`.
    pub fn symbol(&self, selector: u8, reel: usize) -> SymbolId {
        self.rows[selector as usize][reel]
    }

    /// Count occurrences of a symbol across all visible cells, independent
    /// of payline geometry.
    pub fn count(&self, symbol: SymbolId) -> u8 {
        self.rows
            .iter()
            .flatten()
            .filter(|&&cell| cell == symbol)
            .count() as u8
    }
}
