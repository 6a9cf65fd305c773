//! Gallop Core - Multi-round horse race engine
//!
//! This crate provides the race-progression engine:
//! - Horse generation with unique names (`HorseRegistry`)
//! - Round scheduling with increasing distances (`ScheduleGenerator`)
//! - Tick-based movement and finish resolution (`RaceEngine::tick`)
//! - The race status machine and its primary control (`RaceStatus`, `RaceControl`)
//!
//! ## Driving a race
//!
//! The engine has no notion of real time. Something outside it (see the
//! `gallop-driver` crate) calls `tick()` at a steady cadence while the status
//! is `in_progress` and stops as soon as it changes.
//!
//! ```
//! use gallop_core::{RaceConfig, RaceEngine, RaceStatus};
//!
//! let mut engine = RaceEngine::new(RaceConfig::default().with_seed(42));
//! engine.initialize();
//! engine.press_control();
//! while engine.status() == RaceStatus::InProgress {
//!     engine.tick();
//! }
//! let result = &engine.results()[0];
//! assert_eq!(result.results[0].position, 1);
//! ```

mod config;
mod engine;
mod error;
mod horse;
mod identity;
pub mod names;
mod ordinal;
mod rng;
mod round;
mod schedule;
mod snapshot;
mod status;

#[cfg(test)]
mod testing;

pub use config::RaceConfig;
pub use engine::RaceEngine;
pub use error::{Error, Result};
pub use horse::{Horse, HorseRegistry, MAX_CONDITION, MIN_CONDITION};
pub use identity::HorseId;
pub use ordinal::{lap_text, ordinal, ordinal_suffix, round_heading};
pub use rng::{RaceRng, Randomness};
pub use round::{
    CurrentRoundState, Finisher, RaceResult, ResultEntry, RoundParticipant, TickOutcome,
    SPEED_FACTOR,
};
pub use schedule::{ScheduleEntry, ScheduleGenerator, BASE_DISTANCE, DISTANCE_STEP};
pub use snapshot::RaceSnapshot;
pub use status::{ControlAction, RaceControl, RaceStatus};
