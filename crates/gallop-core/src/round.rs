//! Per-round race state and finish resolution

use crate::{Horse, HorseId, ScheduleEntry};
use serde::{Deserialize, Serialize};

/// Distance gained per tick for each point of condition
pub const SPEED_FACTOR: f64 = 0.1;

/// A horse running in the current round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundParticipant {
    pub id: HorseId,
    pub name: String,
    pub color: String,
    pub condition: u8,
    /// Meters covered this round, never above the round distance
    pub traveled_distance: f64,
    /// 0 while racing, otherwise the 1-based finishing rank
    pub position: u32,
}

impl RoundParticipant {
    /// Put a horse on the starting line
    pub fn new(horse: &Horse) -> Self {
        Self {
            id: horse.id,
            name: horse.name.clone(),
            color: horse.color.clone(),
            condition: horse.condition,
            traveled_distance: 0.0,
            position: 0,
        }
    }

    /// Whether a finishing rank has been assigned
    pub fn has_finished(&self) -> bool {
        self.position > 0
    }

    /// Distance covered per tick
    pub fn stride(&self) -> f64 {
        f64::from(self.condition) * SPEED_FACTOR
    }
}

/// A horse that crossed the line during a tick
#[derive(Debug, Clone, PartialEq)]
pub struct Finisher {
    /// Lane index within the round
    pub index: usize,
    pub id: HorseId,
    /// Rank assigned this tick
    pub position: u32,
    /// Unclamped distance at the moment of finishing
    pub priority: f64,
}

/// What a single tick changed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickOutcome {
    /// Horses ranked this tick, best first
    pub finishers: Vec<Finisher>,
    /// Set on the tick whose result was appended to the race results
    pub round_complete: bool,
}

/// The round currently being run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentRoundState {
    pub round: u32,
    pub distance: u32,
    pub participants: Vec<RoundParticipant>,
    #[serde(default)]
    result_recorded: bool,
}

impl CurrentRoundState {
    /// Fresh state for a scheduled round: everyone at 0 m, unranked
    pub fn from_entry(entry: &ScheduleEntry) -> Self {
        Self {
            round: entry.round,
            distance: entry.distance,
            participants: entry.participants.iter().map(RoundParticipant::new).collect(),
            result_recorded: false,
        }
    }

    /// Number of participants with a finishing rank
    pub fn finished_count(&self) -> usize {
        self.participants.iter().filter(|p| p.has_finished()).count()
    }

    /// Every participant has a finishing rank
    ///
    /// Vacuously true for a round without participants.
    pub fn is_complete(&self) -> bool {
        self.participants.iter().all(RoundParticipant::has_finished)
    }

    /// Move every participant one stride and rank the horses that crossed
    /// the line
    ///
    /// Same-tick finishers are ordered by how far past the line they would
    /// have gone, then by lane index. Ranks continue after those already
    /// assigned in earlier ticks.
    pub fn advance(&mut self) -> Vec<Finisher> {
        let distance = f64::from(self.distance);
        let base = self.finished_count() as u32;

        let mut crossed: Vec<(usize, f64)> = Vec::new();
        for (index, participant) in self.participants.iter_mut().enumerate() {
            let next = participant.traveled_distance + participant.stride();
            if next >= distance && participant.position == 0 {
                crossed.push((index, next));
            }
            participant.traveled_distance = next.min(distance);
        }

        crossed.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        crossed
            .into_iter()
            .zip(base + 1..)
            .map(|((index, priority), position)| {
                let participant = &mut self.participants[index];
                participant.position = position;
                Finisher {
                    index,
                    id: participant.id,
                    position,
                    priority,
                }
            })
            .collect()
    }

    /// Finished participants ordered by rank
    pub fn standings(&self) -> Vec<ResultEntry> {
        let mut finished: Vec<&RoundParticipant> =
            self.participants.iter().filter(|p| p.has_finished()).collect();
        finished.sort_by_key(|p| p.position);
        finished.into_iter().map(ResultEntry::from).collect()
    }

    /// The round's result, the first time it is asked for after completion
    pub(crate) fn take_result(&mut self) -> Option<RaceResult> {
        if self.result_recorded || !self.is_complete() {
            return None;
        }
        self.result_recorded = true;
        Some(RaceResult {
            round: self.round,
            distance: self.distance,
            results: self.standings(),
        })
    }
}

/// One line of a round's final standings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub id: HorseId,
    pub name: String,
    pub color: String,
    pub position: u32,
}

impl From<&RoundParticipant> for ResultEntry {
    fn from(participant: &RoundParticipant) -> Self {
        Self {
            id: participant.id,
            name: participant.name.clone(),
            color: participant.color.clone(),
            position: participant.position,
        }
    }
}

/// Final standings of a completed round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceResult {
    pub round: u32,
    pub distance: u32,
    /// Sorted ascending by position
    pub results: Vec<ResultEntry>,
}

impl RaceResult {
    /// The horse ranked first
    pub fn winner(&self) -> Option<&ResultEntry> {
        self.results.first()
    }
}
