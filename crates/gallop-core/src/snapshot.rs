//! Read-only view of a race engine

use crate::{
    CurrentRoundState, Error, Horse, RaceResult, RaceStatus, Result, ScheduleEntry,
};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs, copied out of the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceSnapshot {
    pub status: RaceStatus,
    /// Index into `schedule`; `None` before the first round is loaded
    pub current_round: Option<usize>,
    pub horses: Vec<Horse>,
    pub schedule: Vec<ScheduleEntry>,
    pub results: Vec<RaceResult>,
    pub current: Option<CurrentRoundState>,
}

impl RaceSnapshot {
    /// Pretty-printed RON
    pub fn to_ron(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Parse a snapshot previously written with [`RaceSnapshot::to_ron`]
    pub fn from_ron(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }
}
