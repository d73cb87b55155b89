//! Caller-owned playback clock.

use dp_core::Real;

/// Looping playback clock.
///
/// The render loop owns one of these and advances it from its own elapsed
/// time; the core only ever sees the resulting scalar. Pausing is simply not
/// calling [`PlaybackClock::advance`]; there is no pause flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackClock {
    time: Real,
    t_max: Real,
    rate: Real,
}

impl PlaybackClock {
    /// Create a clock at `time = 0` looping over `[0, t_max]`.
    ///
    /// `rate` scales elapsed wall time into playback time (2.0 plays the
    /// trajectory at double speed).
    ///
    /// # Panics
    ///
    /// Panics if `t_max` or `rate` is not positive and finite.
    pub fn new(t_max: Real, rate: Real) -> Self {
        assert!(
            t_max > 0.0 && t_max.is_finite(),
            "playback span must be positive and finite"
        );
        assert!(
            rate > 0.0 && rate.is_finite(),
            "playback rate must be positive and finite"
        );
        Self {
            time: 0.0,
            t_max,
            rate,
        }
    }

    /// Current playback time.
    pub fn time(&self) -> Real {
        self.time
    }

    pub fn t_max(&self) -> Real {
        self.t_max
    }

    pub fn rate(&self) -> Real {
        self.rate
    }

    /// Advance by `elapsed` seconds of wall time scaled by the rate,
    /// wrapping back to zero once the clock passes `t_max`.
    ///
    /// Returns the new playback time.
    pub fn advance(&mut self, elapsed: Real) -> Real {
        self.time += self.rate * elapsed;
        if self.time > self.t_max {
            self.time = 0.0;
        }
        self.time
    }

    /// Rewind to the start of the loop.
    pub fn reset(&mut self) {
        self.time = 0.0;
    }
}
