//! Driver configuration

use crate::Cadence;
use serde::{Deserialize, Serialize};

/// How the driver paces and bounds a round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Minimum milliseconds between ticks in real-time mode
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: f64,
    /// Ticks after which a still-running round is reported as an error
    #[serde(default = "default_max_ticks_per_round")]
    pub max_ticks_per_round: u64,
}

fn default_frame_interval_ms() -> f64 {
    16.67
}

fn default_max_ticks_per_round() -> u64 {
    1_000_000
}

impl DriverConfig {
    /// Cadence derived from `frame_interval_ms`
    pub fn cadence(&self) -> Cadence {
        Cadence::from_millis_f64(self.frame_interval_ms)
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: default_frame_interval_ms(),
            max_ticks_per_round: default_max_ticks_per_round(),
        }
    }
}
