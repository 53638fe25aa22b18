//! Error types for the payout engine
//!
//! Every failure here is a construction-time failure: once a machine has
//! been built from a validated config, `spin` cannot fail.

use thiserror::Error;

use crate::reels::SymbolId;

/// Configuration validation error, fatal to machine creation.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("payline {index}: row selector {selector} out of range")]
    BadPayline { index: usize, selector: u8 },

    #[error("reel strip is empty")]
    EmptyReels,

    #[error("symbol {0} appears on the reels but has no paytable entry")]
    MissingPays(SymbolId),

    #[error("symbol {symbol}: negative pay {value} for strike length {len}")]
    NegativePay {
        symbol: SymbolId,
        len: usize,
        value: i64,
    },

    #[error("wild symbol {0} does not appear on the reels")]
    WildOffReels(SymbolId),

    #[error("scatter symbol {0} does not appear on the reels")]
    ScatterOffReels(SymbolId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;
