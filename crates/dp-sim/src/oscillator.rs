//! Single degree of freedom mass-spring-damper model.

use dp_core::Real;

use crate::damping::Damping;
use crate::model::DynamicModel;

/// Physical parameters of the sprung mass.
///
/// Both fields must be strictly positive; [`crate::sim::SimulationConfig`]
/// enforces this before a solve starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorParams {
    /// Sprung mass.
    pub mass: Real,
    /// Spring rate (restoring force per unit displacement).
    pub spring_rate: Real,
}

/// Displacement and velocity at t = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialState {
    pub position: Real,
    pub velocity: Real,
}

/// Instantaneous oscillator state: displacement `y` and velocity `v`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscState {
    pub y: Real,
    pub v: Real,
}

/// The oscillator with a pluggable damping law.
///
/// Equation of motion `m y'' + gamma(y, v) y' + k y = 0`, rewritten
/// first-order as
///
/// ```text
/// y' = v
/// v' = (-gamma(y, v) * v - k * y) / m
/// ```
#[derive(Debug, Clone)]
pub struct Oscillator<D> {
    params: OscillatorParams,
    initial: InitialState,
    damping: D,
}

impl<D: Damping> Oscillator<D> {
    pub fn new(params: OscillatorParams, initial: InitialState, damping: D) -> Self {
        Self {
            params,
            initial,
            damping,
        }
    }

    pub fn params(&self) -> OscillatorParams {
        self.params
    }

    pub fn initial(&self) -> InitialState {
        self.initial
    }

    pub fn damping(&self) -> &D {
        &self.damping
    }
}

impl<D: Damping> DynamicModel for Oscillator<D> {
    type State = OscState;

    fn initial_state(&self) -> OscState {
        OscState {
            y: self.initial.position,
            v: self.initial.velocity,
        }
    }

    fn rhs(&self, _t: Real, x: &OscState) -> OscState {
        let gamma = self.damping.coefficient(x.y, x.v);
        OscState {
            y: x.v,
            v: (-gamma * x.v - self.params.spring_rate * x.y) / self.params.mass,
        }
    }

    fn add(&self, a: &OscState, b: &OscState) -> OscState {
        OscState {
            y: a.y + b.y,
            v: a.v + b.v,
        }
    }

    fn scale(&self, a: &OscState, scale: Real) -> OscState {
        OscState {
            y: a.y * scale,
            v: a.v * scale,
        }
    }
}
