//! Race configuration
//!
//! Loaded from RON; every field is optional and falls back to the standard
//! race day of 20 horses, 6 rounds and 10 runners per round.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration of a race engine
///
/// Counts are taken as given. A zero participant count produces rounds
/// without runners, which complete on their first tick.
///
/// # Example
///
/// ```
/// use gallop_core::RaceConfig;
///
/// let config = RaceConfig::from_ron_str("(round_count: 3, seed: Some(7))").unwrap();
/// assert_eq!(config.round_count, 3);
/// assert_eq!(config.horse_count, 20);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceConfig {
    /// Horses created when the engine is built
    #[serde(default = "default_horse_count")]
    pub horse_count: usize,
    /// Rounds generated by each `initialize()`
    #[serde(default = "default_round_count")]
    pub round_count: usize,
    /// Horses drawn into each round
    #[serde(default = "default_participants_per_round")]
    pub participants_per_round: usize,
    /// Seed for the randomness source; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_horse_count() -> usize {
    20
}

fn default_round_count() -> usize {
    6
}

fn default_participants_per_round() -> usize {
    10
}

impl RaceConfig {
    /// Parse a RON document
    pub fn from_ron_str(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }

    /// Read and parse a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    /// Same configuration with a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            horse_count: default_horse_count(),
            round_count: default_round_count(),
            participants_per_round: default_participants_per_round(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_defaults() {
        let config = RaceConfig::default();
        assert_eq!(config.horse_count, 20);
        assert_eq!(config.round_count, 6);
        assert_eq!(config.participants_per_round, 10);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = RaceConfig::from_ron_str("()").unwrap();
        assert_eq!(config, RaceConfig::default());
    }

    #[test]
    fn test_full_document() {
        let config = RaceConfig::from_ron_str(
            "(horse_count: 8, round_count: 2, participants_per_round: 4, seed: Some(99))",
        )
        .unwrap();
        assert_eq!(config.horse_count, 8);
        assert_eq!(config.round_count, 2);
        assert_eq!(config.participants_per_round, 4);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_parse_error() {
        let err = RaceConfig::from_ron_str("(horse_count: -1)").unwrap_err();
        assert!(matches!(err, Error::Ron(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = RaceConfig::load("/definitely/not/here.ron").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_with_seed() {
        assert_eq!(RaceConfig::default().with_seed(5).seed, Some(5));
    }
}
