//! Time-ordered solver output.

use dp_core::Real;

/// One integration sample: time, displacement, velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateSample {
    pub t: Real,
    pub y: Real,
    pub v: Real,
}

impl StateSample {
    /// True when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.t.is_finite() && self.y.is_finite() && self.v.is_finite()
    }
}

/// The complete output of one solve.
///
/// Samples are strictly increasing in `t`, starting at `t = 0` and ending at
/// `t_max`. Once built, a trajectory is immutable; playback maps wall-clock
/// time onto indices into [`Trajectory::samples`] without touching it.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: Vec<StateSample>,
    t_max: Real,
    dt: Real,
}

impl Trajectory {
    /// Only the solver builds trajectories, so the sample ordering invariant
    /// holds by construction.
    pub(crate) fn new(samples: Vec<StateSample>, t_max: Real, dt: Real) -> Self {
        Self { samples, t_max, dt }
    }

    pub fn samples(&self) -> &[StateSample] {
        &self.samples
    }

    /// Number of samples. Always at least 1 (the initial condition).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Requested end time of the simulated span.
    pub fn t_max(&self) -> Real {
        self.t_max
    }

    /// Nominal step size the trajectory was integrated with.
    pub fn dt(&self) -> Real {
        self.dt
    }

    pub fn first(&self) -> Option<&StateSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&StateSample> {
        self.samples.last()
    }

    /// Index of the first sample carrying a NaN or infinite component.
    ///
    /// Numerical blow-up is recorded in the samples rather than reported as
    /// an error; this is how consumers detect the onset.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.samples.iter().position(|s| !s.is_finite())
    }

    /// Largest |y| over the finite samples.
    ///
    /// Non-finite samples do not contribute (`f64::max` passes over NaN),
    /// so the figure stays meaningful for trajectories that blow up late.
    pub fn peak_displacement(&self) -> Real {
        self.samples
            .iter()
            .filter(|s| s.y.is_finite())
            .fold(0.0, |acc, s| acc.max(s.y.abs()))
    }
}
