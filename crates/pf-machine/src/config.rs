//! Machine configuration and validation

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::paytable::{Payline, Paytable};
use crate::reels::{ReelRow, SymbolId, VISIBLE_ROWS};

/// Full configuration of a payline machine.
///
/// Immutable after validation; the machine owns it for its lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Wild symbol: substitutes for any symbol when extending a run from
    /// the left.
    pub wild: SymbolId,
    /// Scatter symbol: pays on total occurrence count, anywhere in the
    /// window.
    pub scatter: SymbolId,
    pub paylines: Vec<Payline>,
    /// The cyclic reel strip; row `i` is what the reels show at stop `i`.
    pub reels: Vec<ReelRow>,
    pub pays: Paytable,
    /// Spins per free-spin tier.
    pub bonus_free_spins: u32,
    /// Multiplier of the first free-spin tier; each retrigger compounds
    /// it by the same factor.
    pub bonus_bet_mult: i64,
}

impl MachineConfig {
    /// Check every invariant the engine relies on at spin time. Called
    /// eagerly at machine construction; a failure is fatal and never
    /// retried.
    pub fn validate(&self) -> ConfigResult<()> {
        for (index, payline) in self.paylines.iter().enumerate() {
            for &selector in payline {
                if selector as usize >= VISIBLE_ROWS {
                    return Err(ConfigError::BadPayline { index, selector });
                }
            }
        }
        if self.reels.is_empty() {
            return Err(ConfigError::EmptyReels);
        }
        let on_strip: HashSet<SymbolId> = self.reels.iter().flatten().copied().collect();
        if !on_strip.contains(&self.scatter) {
            return Err(ConfigError::ScatterOffReels(self.scatter));
        }
        if !on_strip.contains(&self.wild) {
            return Err(ConfigError::WildOffReels(self.wild));
        }
        for &symbol in &on_strip {
            let Some(row) = self.pays.get(symbol) else {
                return Err(ConfigError::MissingPays(symbol));
            };
            for (i, &value) in row.iter().enumerate() {
                if value < 0 {
                    return Err(ConfigError::NegativePay {
                        symbol,
                        len: i + 1,
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    /// Load and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(&fs::read_to_string(path)?)?;
        config.validate()?;
        Ok(config)
    }

    /// Strip length: the modulus for all cyclic window math.
    pub fn strip_len(&self) -> usize {
        self.reels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MachineConfig {
        MachineConfig {
            wild: 10,
            scatter: 11,
            paylines: vec![[1; 5]],
            reels: (0..32).map(|i| [(i % 11) + 1; 5]).collect(),
            pays: (1..=11).map(|s| (s, [0, 0, 1, 2, 3])).collect(),
            bonus_free_spins: 10,
            bonus_bet_mult: 3,
        }
    }

    #[test]
    fn reference_config_is_valid() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn rejects_payline_selector_out_of_range() {
        let mut config = config();
        config.paylines.push([0, 1, 3, 1, 0]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadPayline {
                index: 1,
                selector: 3
            })
        ));
    }

    #[test]
    fn rejects_empty_strip() {
        let mut config = config();
        config.reels.clear();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyReels)));
    }

    #[test]
    fn rejects_strip_symbol_without_pays() {
        let mut config = config();
        config.reels.push([12; 5]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingPays(12))
        ));
    }

    #[test]
    fn rejects_negative_pay() {
        let mut config = config();
        config.pays.insert(4, [0, 0, -1, 2, 3]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativePay {
                symbol: 4,
                len: 3,
                value: -1
            })
        ));
    }

    #[test]
    fn rejects_wild_missing_from_strip() {
        let mut config = config();
        config.wild = 25;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WildOffReels(25))
        ));
    }

    #[test]
    fn rejects_scatter_missing_from_strip() {
        let mut config = config();
        config.scatter = 25;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ScatterOffReels(25))
        ));
    }

    #[test]
    fn json_round_trip_preserves_config() {
        let config = config();
        let json = serde_json::to_string(&config).unwrap();
        let back: MachineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.wild, config.wild);
        assert_eq!(back.reels, config.reels);
        assert_eq!(back.pays, config.pays);
    }
}
