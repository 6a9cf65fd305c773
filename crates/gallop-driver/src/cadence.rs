//! Tick cadence
//!
//! The engine advances a fixed stride per tick, so the cadence alone decides
//! how fast a race looks in real time.

use std::time::Duration;

/// One animation frame at 60 frames per second
pub const FRAME_INTERVAL: Duration = Duration::from_micros(16_670);

/// Minimum spacing between two ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    interval: Duration,
}

impl Cadence {
    /// Cadence with an explicit interval
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// `rate` ticks per second; a rate of 0 is treated as 1
    pub fn per_second(rate: u32) -> Self {
        Self::new(Duration::from_secs(1) / rate.max(1))
    }

    /// Interval given in (fractional) milliseconds
    ///
    /// Negative, NaN or out-of-range values give a zero interval.
    pub fn from_millis_f64(ms: f64) -> Self {
        Self::new(Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::ZERO))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether enough time has passed since the previous tick
    pub fn is_due(&self, elapsed: Duration) -> bool {
        elapsed >= self.interval
    }

    /// Time left until the next tick is due
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.interval.saturating_sub(elapsed)
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one_frame() {
        assert_eq!(Cadence::default().interval(), FRAME_INTERVAL);
        assert!(!Cadence::default().is_due(Duration::from_millis(16)));
        assert!(Cadence::default().is_due(Duration::from_millis(17)));
    }

    #[test]
    fn test_per_second() {
        assert_eq!(Cadence::per_second(4).interval(), Duration::from_millis(250));
        assert_eq!(Cadence::per_second(0).interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_from_millis() {
        let frame = Cadence::from_millis_f64(16.67).interval();
        assert!((frame.as_secs_f64() - FRAME_INTERVAL.as_secs_f64()).abs() < 1e-9);
        assert_eq!(Cadence::from_millis_f64(-5.0).interval(), Duration::ZERO);
        assert_eq!(Cadence::from_millis_f64(f64::NAN).interval(), Duration::ZERO);
    }

    #[test]
    fn test_remaining() {
        let cadence = Cadence::per_second(10);
        assert_eq!(cadence.remaining(Duration::from_millis(40)), Duration::from_millis(60));
        assert_eq!(cadence.remaining(Duration::from_millis(400)), Duration::ZERO);
    }
}
