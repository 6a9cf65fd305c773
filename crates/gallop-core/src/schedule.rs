//! Race schedule generation

use crate::{Horse, Randomness};
use serde::{Deserialize, Serialize};

/// Distance of the first round in meters
pub const BASE_DISTANCE: u32 = 1200;
/// Distance added for each following round in meters
pub const DISTANCE_STEP: u32 = 200;

/// One round of the schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based round number
    pub round: u32,
    /// Race distance in meters
    pub distance: u32,
    /// Horses running this round
    pub participants: Vec<Horse>,
}

/// Partitions a horse pool into an ordered sequence of rounds
pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Distance of the given 1-based round
    pub fn distance_for(round: u32) -> u32 {
        BASE_DISTANCE + DISTANCE_STEP * round.saturating_sub(1)
    }

    /// Build `round_count` rounds with increasing distance
    ///
    /// Each round independently draws `min(participants_per_round, pool.len())`
    /// horses without replacement.
    ///
    /// ```
    /// use gallop_core::{HorseRegistry, RaceRng, ScheduleGenerator};
    ///
    /// let mut rng = RaceRng::new(9);
    /// let pool = HorseRegistry::generate(20, &mut rng);
    /// let schedule = ScheduleGenerator::initialize(6, &pool, 10, &mut rng);
    /// let distances: Vec<u32> = schedule.iter().map(|e| e.distance).collect();
    /// assert_eq!(distances, vec![1200, 1400, 1600, 1800, 2000, 2200]);
    /// ```
    pub fn initialize<R: Randomness>(
        round_count: usize,
        pool: &[Horse],
        participants_per_round: usize,
        rng: &mut R,
    ) -> Vec<ScheduleEntry> {
        (1..=round_count as u32)
            .map(|round| ScheduleEntry {
                round,
                distance: Self::distance_for(round),
                participants: rng.subset(pool, participants_per_round),
            })
            .collect()
    }
}
