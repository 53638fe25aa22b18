//! Payline machine engine
//!
//! Orchestrates one spin: draw stops, materialize the visible window,
//! evaluate every payline and the scatter bonus, then drive the
//! breadth-first free-spin cascade when the bonus triggers.

use std::collections::VecDeque;

use log::debug;

use crate::bonus;
use crate::config::MachineConfig;
use crate::error::ConfigResult;
use crate::machine::Machine;
use crate::reels::{ReelWindow, Stops};
use crate::spin::{Round, SpinKind, SpinResult};
use crate::stops::StopSource;
use crate::strike::{Strike, scan_payline};

/// A classic payline slot machine.
///
/// Pure with respect to its configuration; impure only through the
/// injected stop source. Spins take `&self`, so a single machine may
/// serve concurrent spin requests.
pub struct PaylineMachine<S: StopSource> {
    config: MachineConfig,
    stops: S,
}

/// Base (wager-independent) outcome of one reel spin.
struct SpinOutcome {
    total: i64,
    stops: Stops,
    triggered: bool,
}

impl<S: StopSource> PaylineMachine<S> {
    /// Build a machine, validating the configuration eagerly. A config
    /// that passes here cannot fail during any later spin.
    pub fn new(config: MachineConfig, stops: S) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config, stops })
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Selected strike per payline, in payline order. Lines without a
    /// candidate contribute nothing; zero-pay selections are kept, since
    /// they still take part in scatter double-pay detection.
    fn line_strikes(&self, window: &ReelWindow) -> Vec<Strike> {
        self.config
            .paylines
            .iter()
            .filter_map(|payline| {
                let candidates = scan_payline(window, payline, self.config.wild);
                self.config.pays.select(&candidates)
            })
            .collect()
    }

    fn line_pay(&self, strikes: &[Strike]) -> i64 {
        let mut total = 0;
        for strike in strikes {
            let pay = self.config.pays.pay(strike);
            if pay > 0 {
                debug!("strike {strike:?} pays {pay}");
            }
            total += pay;
        }
        total
    }

    /// Run one reel spin and evaluate it at base (unwagered) value.
    fn evaluate_spin(&self) -> SpinOutcome {
        let stops = self.stops.draw();
        let window = ReelWindow::from_stops(&self.config.reels, &stops);
        let strikes = self.line_strikes(&window);
        let line_pay = self.line_pay(&strikes);
        let bonus = bonus::evaluate(&window, &self.config.pays, self.config.scatter, &strikes);
        SpinOutcome {
            total: line_pay + bonus.pay,
            stops,
            triggered: bonus.triggered,
        }
    }

    /// Drain the free-spin cascade. Tiers are processed breadth-first
    /// from a FIFO queue: every triggering spin inside a batch enqueues
    /// one escalated tier at the back, and the round runs until the queue
    /// is empty. Depth is bounded only by how often the bonus retriggers.
    fn free_spins(&self, bet: i64, spins: &mut Vec<SpinResult>) {
        let mut tiers = VecDeque::new();
        tiers.push_back(self.config.bonus_bet_mult);
        while let Some(mult) = tiers.pop_front() {
            for _ in 0..self.config.bonus_free_spins {
                let outcome = self.evaluate_spin();
                spins.push(SpinResult {
                    kind: SpinKind::Free,
                    total: outcome.total * mult * bet,
                    stops: outcome.stops,
                });
                if outcome.triggered {
                    tiers.push_back(mult * self.config.bonus_bet_mult);
                }
            }
        }
    }
}

impl<S: StopSource> Machine for PaylineMachine<S> {
    fn wager(&self, bet: i64) -> i64 {
        bet * self.config.paylines.len() as i64
    }

    fn spin(&self, bet: i64) -> Round {
        let outcome = self.evaluate_spin();
        let mut spins = vec![SpinResult {
            kind: SpinKind::Main,
            total: outcome.total * bet,
            stops: outcome.stops,
        }];
        if outcome.triggered {
            self.free_spins(bet, &mut spins);
        }
        Round::new(spins)
    }
}
