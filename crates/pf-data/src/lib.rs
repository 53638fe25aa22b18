//! # pf-data — Config Sheets & Persistence
//!
//! Machine configurations are authored as three columnar CSV sheets —
//! paylines, paytable, reel strips — and shipped to the engine as one
//! validated JSON document. This crate reads the sheets, assembles and
//! validates a [`MachineConfig`], and round-trips the JSON form.

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use thiserror::Error;

use pf_machine::{ConfigError, MachineConfig, PayRow, Payline, Paytable, ReelRow, SymbolId};

/// Data tooling error.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("{sheet}: row {row}: expected {expected} columns, got {got}")]
    BadColumns {
        sheet: String,
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("{sheet}: row {row}: {message}")]
    BadValue {
        sheet: String,
        row: usize,
        message: String,
    },

    #[error("invalid config: {0}")]
    Invalid(#[from] ConfigError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type DataResult<T> = Result<T, DataError>;

/// The three sheet paths a machine config is assembled from.
#[derive(Debug, Clone)]
pub struct SheetSet {
    pub paylines: PathBuf,
    pub paytable: PathBuf,
    pub reels: PathBuf,
}

/// Machine parameters not carried by the sheets.
#[derive(Debug, Clone, Copy)]
pub struct GameParams {
    pub wild: SymbolId,
    pub scatter: SymbolId,
    pub bonus_free_spins: u32,
    pub bonus_bet_mult: i64,
}

impl SheetSet {
    /// Read all three sheets and assemble a validated config.
    pub fn assemble(&self, params: GameParams) -> DataResult<MachineConfig> {
        let config = MachineConfig {
            wild: params.wild,
            scatter: params.scatter,
            paylines: read_paylines(&self.paylines)?,
            reels: read_reels(&self.reels)?,
            pays: read_paytable(&self.paytable)?,
            bonus_free_spins: params.bonus_free_spins,
            bonus_bet_mult: params.bonus_bet_mult,
        };
        config.validate()?;
        info!(
            "assembled config: {} paylines, {} strip rows",
            config.paylines.len(),
            config.strip_len()
        );
        Ok(config)
    }
}

/// Read the paylines sheet: one row of 5 row selectors per record.
pub fn read_paylines(path: impl AsRef<Path>) -> DataResult<Vec<Payline>> {
    read_rows("paylines", path.as_ref())
}

/// Read the reel strip sheet: one row of 5 symbol ids per record.
pub fn read_reels(path: impl AsRef<Path>) -> DataResult<Vec<ReelRow>> {
    read_rows("reels", path.as_ref())
}

/// Read the paytable sheet: symbol id followed by 5 pay values.
pub fn read_paytable(path: impl AsRef<Path>) -> DataResult<Paytable> {
    let mut reader = sheet_reader(path.as_ref())?;
    let mut table = Paytable::default();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != 6 {
            return Err(DataError::BadColumns {
                sheet: "paytable".into(),
                row,
                expected: 6,
                got: record.len(),
            });
        }
        let symbol: SymbolId = parse_field("paytable", row, &record[0])?;
        let mut pays: PayRow = [0; 5];
        for (i, pay) in pays.iter_mut().enumerate() {
            *pay = parse_field("paytable", row, &record[i + 1])?;
        }
        table.insert(symbol, pays);
    }
    Ok(table)
}

/// Load and validate a JSON config file.
pub fn load_config(path: impl AsRef<Path>) -> DataResult<MachineConfig> {
    Ok(MachineConfig::from_path(path)?)
}

/// Write a config as pretty JSON.
pub fn write_config(path: impl AsRef<Path>, config: &MachineConfig) -> DataResult<()> {
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    Ok(())
}

fn sheet_reader(path: &Path) -> DataResult<csv::Reader<fs::File>> {
    Ok(csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?)
}

fn read_rows<T>(sheet: &str, path: &Path) -> DataResult<Vec<[T; 5]>>
where
    T: FromStr + Copy + Default,
    T::Err: Display,
{
    let mut reader = sheet_reader(path)?;
    let mut rows = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != 5 {
            return Err(DataError::BadColumns {
                sheet: sheet.into(),
                row,
                expected: 5,
                got: record.len(),
            });
        }
        let mut values = [T::default(); 5];
        for (i, value) in values.iter_mut().enumerate() {
            *value = parse_field(sheet, row, &record[i])?;
        }
        rows.push(values);
    }
    Ok(rows)
}

fn parse_field<T>(sheet: &str, row: usize, field: &str) -> DataResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    field.trim().parse().map_err(|err| DataError::BadValue {
        sheet: sheet.into(),
        row,
        message: format!("{:?}: {err}", field),
    })
}
