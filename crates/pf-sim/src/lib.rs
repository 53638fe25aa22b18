//! # pf-sim — Batch Spin Simulator
//!
//! Drives large spin batches against a machine to validate its payout
//! profile (RTP, hit rate, bonus frequency). Work is fanned out across
//! worker threads; each worker owns a machine whose stop source is
//! seeded from the base seed plus the worker index, so a run is
//! reproducible for a given seed and worker count regardless of
//! scheduling.

mod stats;

pub use stats::SessionStats;

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use pf_machine::{ConfigResult, Machine, MachineConfig, PaylineMachine, RngStopSource};

/// Simulation parameters.
#[derive(Debug, Clone, Copy)]
pub struct SimOptions {
    /// Player actions to execute (main spin plus cascade each).
    pub rounds: u64,
    pub bet: i64,
    /// Base seed; worker `i` draws from a stream seeded `seed + i`.
    pub seed: u64,
    pub workers: usize,
}

/// Batch simulator over one machine configuration.
pub struct BatchSimulator {
    config: MachineConfig,
    opts: SimOptions,
}

type WorkerMachine = PaylineMachine<RngStopSource<ChaCha8Rng>>;

impl BatchSimulator {
    pub fn new(config: MachineConfig, opts: SimOptions) -> Self {
        Self { config, opts }
    }

    /// Run the full batch and return the merged statistics.
    pub fn run(&self) -> ConfigResult<SessionStats> {
        let workers = self.opts.workers.max(1);
        let base = self.opts.rounds / workers as u64;
        let extra = self.opts.rounds % workers as u64;

        // Machines are built up front so a bad config surfaces before any
        // spinning starts.
        let lanes: Vec<(WorkerMachine, u64)> = (0..workers as u64)
            .map(|index| {
                let rng = ChaCha8Rng::seed_from_u64(self.opts.seed.wrapping_add(index));
                let source = RngStopSource::with_rng(self.config.strip_len().max(1), rng);
                let machine = PaylineMachine::new(self.config.clone(), source)?;
                let rounds = base + u64::from(index < extra);
                Ok((machine, rounds))
            })
            .collect::<ConfigResult<_>>()?;

        info!(
            "simulating {} rounds at bet {} across {} workers",
            self.opts.rounds, self.opts.bet, workers
        );

        let stats = lanes
            .par_iter()
            .map(|(machine, rounds)| self.drive(machine, *rounds))
            .reduce(SessionStats::default, |mut merged, part| {
                merged.merge(&part);
                merged
            });
        Ok(stats)
    }

    fn drive(&self, machine: &WorkerMachine, rounds: u64) -> SessionStats {
        let mut stats = SessionStats::default();
        let wager = machine.wager(self.opts.bet);
        for _ in 0..rounds {
            let round = machine.spin(self.opts.bet);
            stats.record(wager, &round);
        }
        stats
    }
}
