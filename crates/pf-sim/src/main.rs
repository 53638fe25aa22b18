//! pf-sim — batch spin simulator CLI

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use pf_sim::{BatchSimulator, SimOptions};

#[derive(Parser, Debug)]
#[command(name = "pf-sim", about = "Simulate spin batches against a machine config")]
struct Args {
    /// Machine config JSON (as written by pf-conv)
    config: PathBuf,

    /// Rounds to simulate
    #[arg(long, default_value_t = 100_000)]
    rounds: u64,

    /// Bet per payline
    #[arg(long, default_value_t = 1)]
    bet: i64,

    /// Base seed; omit for a random one
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads; defaults to the CPU count
    #[arg(long)]
    workers: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = pf_data::load_config(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let seed = args.seed.unwrap_or_else(rand::random);
    let workers = args.workers.unwrap_or_else(num_cpus::get);
    info!("seed {seed}, {workers} workers");

    let opts = SimOptions {
        rounds: args.rounds,
        bet: args.bet,
        seed,
        workers,
    };
    let stats = BatchSimulator::new(config, opts).run()?;

    println!("rounds        {:>12}", stats.rounds);
    println!("spins         {:>12}", stats.spins);
    println!("total wager   {:>12}", stats.total_wager);
    println!("total win     {:>12}", stats.total_win);
    println!("RTP           {:>11.2}%", stats.rtp());
    println!("hit rate      {:>11.2}%", stats.hit_rate());
    println!("bonus rounds  {:>12}", stats.bonus_rounds);
    println!("free spins    {:>12}", stats.free_spins);
    println!("max round win {:>12}", stats.max_round_win);
    Ok(())
}
