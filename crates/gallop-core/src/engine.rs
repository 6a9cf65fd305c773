//! The race engine: schedule, rounds, status and the per-tick update
//!
//! The engine never looks at a clock. A driver calls [`RaceEngine::tick`]
//! at a steady rate while the status is `in_progress`, and every call moves
//! each horse by a fixed stride proportional to its condition.

use crate::{
    ControlAction, CurrentRoundState, Horse, HorseRegistry, RaceConfig, RaceControl,
    RaceResult, RaceRng, RaceSnapshot, RaceStatus, Randomness, ScheduleEntry,
    ScheduleGenerator, TickOutcome,
};
use tracing::{debug, info, warn};

/// Owns all state of one race day
///
/// # Example
///
/// ```
/// use gallop_core::{RaceConfig, RaceEngine, RaceStatus};
///
/// let mut engine = RaceEngine::new(RaceConfig::default().with_seed(1));
/// engine.initialize();
/// engine.set_status(RaceStatus::InProgress);
///
/// while engine.status() == RaceStatus::InProgress {
///     engine.tick();
/// }
///
/// assert_eq!(engine.status(), RaceStatus::Finished);
/// assert_eq!(engine.results().len(), 1);
/// ```
pub struct RaceEngine<R: Randomness = RaceRng> {
    config: RaceConfig,
    rng: R,
    horses: Vec<Horse>,
    schedule: Vec<ScheduleEntry>,
    results: Vec<RaceResult>,
    /// `None` until the first round is loaded
    current_round: Option<usize>,
    current: Option<CurrentRoundState>,
    status: RaceStatus,
}

impl RaceEngine<RaceRng> {
    /// Create an engine and its horse pool from a configuration
    ///
    /// Uses the configured seed when present, entropy otherwise.
    pub fn new(config: RaceConfig) -> Self {
        let rng = RaceRng::from_optional_seed(config.seed);
        Self::with_rng(config, rng)
    }
}

impl Default for RaceEngine<RaceRng> {
    fn default() -> Self {
        Self::new(RaceConfig::default())
    }
}

impl<R: Randomness> RaceEngine<R> {
    /// Create an engine with a specific randomness source
    pub fn with_rng(config: RaceConfig, mut rng: R) -> Self {
        let horses = HorseRegistry::generate(config.horse_count, &mut rng);
        Self::with_horses(config, horses, rng)
    }

    /// Create an engine around an existing horse pool
    ///
    /// `config.horse_count` is ignored in favour of the given pool.
    pub fn with_horses(config: RaceConfig, horses: Vec<Horse>, rng: R) -> Self {
        Self {
            config,
            rng,
            horses,
            schedule: Vec::new(),
            results: Vec::new(),
            current_round: None,
            current: None,
            status: RaceStatus::NotInitiated,
        }
    }

    /// Generate a fresh schedule, clear results and load the first round
    pub fn initialize(&mut self) {
        self.schedule = ScheduleGenerator::initialize(
            self.config.round_count,
            &self.horses,
            self.config.participants_per_round,
            &mut self.rng,
        );
        self.current_round = None;
        self.current = None;
        self.results.clear();
        self.status = RaceStatus::NotStarted;

        info!(
            rounds = self.schedule.len(),
            horses = self.horses.len(),
            "schedule generated"
        );

        self.advance_round();
    }

    /// Load the next scheduled round
    ///
    /// Returns `false` and leaves the state untouched when the current round
    /// is already the last one.
    pub fn advance_round(&mut self) -> bool {
        let next = self.current_round.map_or(0, |round| round + 1);
        let Some(entry) = self.schedule.get(next) else {
            debug!(next, "no further rounds scheduled");
            return false;
        };

        info!(
            round = entry.round,
            distance = entry.distance,
            participants = entry.participants.len(),
            "round loaded"
        );
        self.current = Some(CurrentRoundState::from_entry(entry));
        self.current_round = Some(next);
        true
    }

    /// Assign the status without checking the transition
    pub fn set_status(&mut self, status: RaceStatus) {
        if !self.status.can_transition_to(status) && self.status != status {
            debug!(from = %self.status, to = %status, "unusual status transition");
        }
        self.status = status;
    }

    /// Advance every horse of the current round by one stride
    ///
    /// Ranks horses that cross the line this tick and, once every
    /// participant is ranked, records the round result and marks the race
    /// finished. Without a loaded round the status falls back to
    /// `not_started`.
    pub fn tick(&mut self) -> TickOutcome {
        let Some(current) = self.current.as_mut() else {
            warn!("tick called without an active round");
            self.status = RaceStatus::NotStarted;
            return TickOutcome::default();
        };

        let finishers = current.advance();
        for finisher in &finishers {
            debug!(
                round = current.round,
                horse = %finisher.id,
                position = finisher.position,
                "horse finished"
            );
        }

        let mut outcome = TickOutcome {
            finishers,
            round_complete: false,
        };

        if current.is_complete() {
            if let Some(result) = current.take_result() {
                info!(
                    round = result.round,
                    distance = result.distance,
                    winner = result.winner().map(|w| w.name.as_str()).unwrap_or("-"),
                    "round complete"
                );
                self.results.push(result);
                outcome.round_complete = true;
            }
            self.status = RaceStatus::Finished;
        }

        outcome
    }

    /// Press the single start/pause/resume/next-round control
    ///
    /// Returns the action taken, or `None` when the control is disabled.
    pub fn press_control(&mut self) -> Option<ControlAction> {
        let control = self.control();
        if !control.enabled {
            return None;
        }

        match control.action {
            ControlAction::Start | ControlAction::Resume => {
                self.set_status(RaceStatus::InProgress)
            }
            ControlAction::Pause => self.set_status(RaceStatus::Paused),
            ControlAction::NextRound => {
                self.advance_round();
                self.set_status(RaceStatus::InProgress);
            }
            ControlAction::Complete => return None,
        }
        Some(control.action)
    }

    /// Current state of the primary control
    pub fn control(&self) -> RaceControl {
        RaceControl::for_status(self.status, self.is_last_round())
    }

    /// Whether the loaded round is the last one in the schedule
    pub fn is_last_round(&self) -> bool {
        self.current_round
            .map_or(self.schedule.is_empty(), |round| round + 1 == self.schedule.len())
    }

    pub fn status(&self) -> RaceStatus {
        self.status
    }

    /// Index of the loaded round in the schedule
    pub fn current_round(&self) -> Option<usize> {
        self.current_round
    }

    /// The round being run
    pub fn current(&self) -> Option<&CurrentRoundState> {
        self.current.as_ref()
    }

    pub fn horses(&self) -> &[Horse] {
        &self.horses
    }

    pub fn schedule(&self) -> &[ScheduleEntry] {
        &self.schedule
    }

    /// Results of completed rounds, oldest first
    pub fn results(&self) -> &[RaceResult] {
        &self.results
    }

    pub fn config(&self) -> &RaceConfig {
        &self.config
    }

    /// Copy of the full readable state
    pub fn snapshot(&self) -> RaceSnapshot {
        RaceSnapshot {
            status: self.status,
            current_round: self.current_round,
            horses: self.horses.clone(),
            schedule: self.schedule.clone(),
            results: self.results.clone(),
            current: self.current.clone(),
        }
    }
}
