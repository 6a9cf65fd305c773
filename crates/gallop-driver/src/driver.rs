//! TickDriver - calls `tick()` at a steady cadence while a race runs
//!
//! The driver is the only place that knows about real time. It stops issuing
//! ticks the moment the engine's status leaves `in_progress`, which is how
//! pausing, finishing and re-initializing cancel a running round.

use crate::{Cadence, DriverConfig, Error, Result};
use gallop_core::{RaceEngine, Randomness, TickOutcome};
use std::thread;
use std::time::Instant;
use tracing::{debug, trace};

/// Result of offering the driver a frame
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// The engine is not running; nothing was done
    Idle,
    /// Running, but the next tick is not due yet
    Waiting,
    /// A tick was issued
    Ticked(TickOutcome),
}

/// Drives a [`RaceEngine`] at a fixed cadence
///
/// # Example
///
/// ```
/// use gallop_core::{RaceConfig, RaceEngine, RaceStatus};
/// use gallop_driver::{DriverConfig, TickDriver};
///
/// let mut engine = RaceEngine::new(RaceConfig::default().with_seed(4));
/// engine.initialize();
/// engine.press_control();
///
/// let mut driver = TickDriver::new(&DriverConfig::default());
/// let ticks = driver.fast_forward(&mut engine).unwrap();
/// assert!(ticks > 0);
/// assert_eq!(engine.status(), RaceStatus::Finished);
/// ```
pub struct TickDriver {
    cadence: Cadence,
    max_ticks_per_round: u64,
    /// When the previous tick was issued; `None` while stopped
    last_frame: Option<Instant>,
    /// Ticks issued over the driver's lifetime
    ticks: u64,
}

impl TickDriver {
    /// Create a driver from configuration
    pub fn new(config: &DriverConfig) -> Self {
        Self {
            cadence: config.cadence(),
            max_ticks_per_round: config.max_ticks_per_round,
            last_frame: None,
            ticks: 0,
        }
    }

    /// Create a driver with a specific cadence and the default tick limit
    pub fn with_cadence(cadence: Cadence) -> Self {
        Self {
            cadence,
            ..Self::new(&DriverConfig::default())
        }
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    /// Total ticks issued
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Offer the driver a frame at time `now`
    ///
    /// The first frame after the engine starts (or resumes) only arms the
    /// driver; later frames tick once at least one interval has passed since
    /// the previous tick.
    pub fn pump<R: Randomness>(&mut self, engine: &mut RaceEngine<R>, now: Instant) -> Step {
        if !engine.status().is_running() {
            if self.last_frame.take().is_some() {
                debug!(status = %engine.status(), "driver stopped");
            }
            return Step::Idle;
        }

        let Some(last) = self.last_frame else {
            self.last_frame = Some(now);
            return Step::Waiting;
        };

        if !self.cadence.is_due(now.saturating_duration_since(last)) {
            return Step::Waiting;
        }

        self.last_frame = Some(now);
        self.ticks += 1;
        trace!(tick = self.ticks, "tick");
        Step::Ticked(engine.tick())
    }

    /// Drive the current round in real time until the engine stops running
    ///
    /// Blocks the calling thread, sleeping between frames. Returns the
    /// number of ticks issued.
    pub fn run_round<R: Randomness>(&mut self, engine: &mut RaceEngine<R>) -> Result<u64> {
        let mut issued = 0;
        loop {
            match self.pump(engine, Instant::now()) {
                Step::Idle => return Ok(issued),
                Step::Ticked(_) => {
                    issued += 1;
                    self.check_limit(engine, issued)?;
                }
                Step::Waiting => {}
            }

            if let Some(last) = self.last_frame {
                thread::sleep(self.cadence.remaining(last.elapsed()));
            }
        }
    }

    /// Tick back-to-back, without waiting, until the engine stops running
    ///
    /// Returns the number of ticks issued.
    pub fn fast_forward<R: Randomness>(&mut self, engine: &mut RaceEngine<R>) -> Result<u64> {
        let mut issued = 0;
        while engine.status().is_running() {
            engine.tick();
            issued += 1;
            self.ticks += 1;
            self.check_limit(engine, issued)?;
        }
        self.last_frame = None;
        Ok(issued)
    }

    fn check_limit<R: Randomness>(&self, engine: &RaceEngine<R>, issued: u64) -> Result<()> {
        if issued >= self.max_ticks_per_round && engine.status().is_running() {
            return Err(Error::TickLimitExceeded {
                round: engine.current().map_or(0, |current| current.round),
                limit: self.max_ticks_per_round,
            });
        }
        Ok(())
    }
}
