//! pf-conv — convert columnar config sheets into machine config JSON
//!
//! Reads the three CSV sheets a game's math is authored in and writes the
//! validated JSON document the engine loads at startup.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use pf_data::{GameParams, SheetSet, write_config};

#[derive(Parser, Debug)]
#[command(name = "pf-conv", about = "Convert config sheets to machine JSON")]
struct Args {
    /// Paylines sheet: 5 row selectors per record
    #[arg(long, default_value = "paylines.csv")]
    paylines: PathBuf,

    /// Paytable sheet: symbol id plus 5 pay values per record
    #[arg(long, default_value = "paytable.csv")]
    paytable: PathBuf,

    /// Reel strip sheet: 5 symbol ids per record
    #[arg(long, default_value = "reels.csv")]
    reels: PathBuf,

    /// Output JSON path
    #[arg(long, default_value = "machine.json")]
    out: PathBuf,

    /// Wild symbol id
    #[arg(long, default_value_t = 10)]
    wild: u32,

    /// Scatter symbol id
    #[arg(long, default_value_t = 11)]
    scatter: u32,

    /// Free spins per bonus tier
    #[arg(long, default_value_t = 10)]
    free_spins: u32,

    /// Bonus bet multiplier factor
    #[arg(long, default_value_t = 3)]
    bonus_mult: i64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let sheets = SheetSet {
        paylines: args.paylines,
        paytable: args.paytable,
        reels: args.reels,
    };
    let config = sheets
        .assemble(GameParams {
            wild: args.wild,
            scatter: args.scatter,
            bonus_free_spins: args.free_spins,
            bonus_bet_mult: args.bonus_mult,
        })
        .context("assembling machine config")?;

    write_config(&args.out, &config)
        .with_context(|| format!("writing {}", args.out.display()))?;
    info!("wrote {}", args.out.display());
    Ok(())
}
