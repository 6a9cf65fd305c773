//! Gallop Driver - Fixed-cadence tick driver for race engines
//!
//! `gallop-core` advances a race by a fixed stride per `tick()` call and
//! knows nothing about wall-clock time. This crate supplies the loop that
//! calls `tick()` while the race is `in_progress`:
//!
//! - [`Cadence`]: minimum spacing between ticks (one 60 fps frame by default)
//! - [`TickDriver`]: frame pumping, a blocking real-time loop, and a
//!   fast-forward mode for tests and simulations
//! - [`DriverConfig`]: RON/serde configuration of the above

mod cadence;
mod config;
mod driver;
mod error;

pub use cadence::{Cadence, FRAME_INTERVAL};
pub use config::DriverConfig;
pub use driver::{Step, TickDriver};
pub use error::{Error, Result};
