//! Clock-to-sample index mapping.

use dp_core::Real;
use dp_sim::{StateSample, Trajectory};

/// Map a playback clock value onto a sample index.
///
/// `index = clamp(floor((time / t_max) * (len - 1)), 0, len - 1)`, total
/// over all inputs:
///
/// - `len <= 1` resolves to `0` without dividing;
/// - non-finite `time` resolves to `0`;
/// - `time < 0` clamps to `0`, `time > t_max` clamps to `len - 1`.
///
/// The mapping never wraps. Looping is the clock owner's policy (see
/// [`crate::clock::PlaybackClock`]); by the time a value reaches the indexer
/// it is just a scalar to clamp.
pub fn index_for_time(time: Real, t_max: Real, len: usize) -> usize {
    if len <= 1 || !time.is_finite() {
        return 0;
    }
    let last = len - 1;
    let raw = ((time / t_max) * last as Real).floor();
    // t_max is positive for every trajectory, but a zero or non-finite span
    // still has to come out clamped rather than panic.
    if raw.is_nan() || raw <= 0.0 {
        0
    } else if raw >= last as Real {
        last
    } else {
        raw as usize
    }
}

/// The sample a playback clock currently points at.
///
/// `None` only for an empty trajectory, which the solver never produces.
pub fn sample_for_time(traj: &Trajectory, time: Real) -> Option<&StateSample> {
    let idx = index_for_time(time, traj.t_max(), traj.len());
    traj.samples().get(idx)
}

/// Clock-to-index mapping bound to one trajectory's shape.
///
/// Holds only the span and sample count, never the samples. Stateless: the
/// same clock value always yields the same index, at whatever cadence the
/// render loop asks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackIndexer {
    t_max: Real,
    len: usize,
}

impl PlaybackIndexer {
    pub fn new(t_max: Real, len: usize) -> Self {
        Self { t_max, len }
    }

    pub fn for_trajectory(traj: &Trajectory) -> Self {
        Self::new(traj.t_max(), traj.len())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index_for(&self, time: Real) -> usize {
        index_for_time(time, self.t_max, self.len)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn index_is_always_in_bounds(
            time in -1e6_f64..1e6,
            t_max in 1e-3_f64..1e4,
            len in 1usize..5000,
        ) {
            let idx = index_for_time(time, t_max, len);
            prop_assert!(idx < len);
        }

        #[test]
        fn index_is_monotone_in_time(
            a in 0.0_f64..100.0,
            b in 0.0_f64..100.0,
            len in 1usize..2000,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let t_max = 100.0;
            prop_assert!(index_for_time(lo, t_max, len) <= index_for_time(hi, t_max, len));
        }
    }
}
