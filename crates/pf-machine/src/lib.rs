//! # pf-machine — Payline Slot Payout Engine
//!
//! Pure payout evaluation for a 5-reel, 3-row payline slot machine:
//! given a validated configuration and a stream of random reel stops,
//! computes which paylines strike, what they pay, whether the scatter
//! bonus triggers, and how the free-spin cascade unfolds.
//!
//! ## Architecture
//!
//! ```text
//! PaylineMachine (Machine)
//!     │
//!     ├── MachineConfig (paylines, reel strip, paytable)
//!     ├── StopSource (lock-guarded RNG / scripted double)
//!     │
//!     ├── scan_payline ──► Strike candidates per line
//!     ├── Paytable::select ──► best-paying interpretation
//!     ├── bonus::evaluate ──► scatter pay + trigger flag
//!     └── free-spin FIFO ──► Round of SpinResults
//! ```
//!
//! The engine performs no I/O and raises no runtime errors: every
//! invariant a spin relies on is checked once, at construction.

pub mod bonus;
pub mod config;
pub mod engine;
pub mod error;
pub mod machine;
pub mod paytable;
pub mod reels;
pub mod spin;
pub mod stops;
pub mod strike;

pub use config::MachineConfig;
pub use engine::PaylineMachine;
pub use error::{ConfigError, ConfigResult};
pub use machine::Machine;
pub use paytable::{PayRow, Payline, Paytable};
pub use reels::{REEL_COUNT, ReelRow, ReelWindow, Stops, SymbolId, VISIBLE_ROWS};
pub use spin::{Round, SpinKind, SpinResult};
pub use stops::{RngStopSource, ScriptedStopSource, StopSource};
pub use strike::{Strike, scan_payline};
