//! Machine capability interface

use crate::spin::Round;

/// The capability a slot machine exposes to its surrounding service.
///
/// New machine variants are new implementations of this trait. `spin`
/// runs the main spin and the entire free-spin cascade to completion
/// before returning; no partial results are observable. Both operations
/// take `&self`: one machine instance may serve concurrent callers, with
/// any internal mutability confined to its stop source.
pub trait Machine: Send + Sync {
    /// Cost of one spin at `bet`: the caller debits this before spinning.
    fn wager(&self, bet: i64) -> i64;

    /// Run one full spin action at `bet`.
    fn spin(&self, bet: i64) -> Round;
}
