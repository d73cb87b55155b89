//! DynamicModel trait for pluggable dynamic systems.

use dp_core::Real;

/// Trait for continuous-time dynamic system models.
///
/// A DynamicModel must supply:
/// - a State type (Clone, for snapshots)
/// - the initial state
/// - the state derivative x_dot = f(t, x)
/// - element-wise state arithmetic used by the integrator stages
pub trait DynamicModel {
    /// State type (must be Clone).
    type State: Clone;

    /// Return the initial state at t = 0.
    fn initial_state(&self) -> Self::State;

    /// Compute the state derivative dx/dt = f(t, x).
    ///
    /// Must be pure: identical `(t, x)` always yield the same derivative.
    /// Integrators call this once per stage, so it runs four times per RK4
    /// step.
    fn rhs(&self, t: Real, x: &Self::State) -> Self::State;

    /// Add two states element-wise: result = a + b.
    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    /// Scale a state by a scalar: result = scale * a.
    fn scale(&self, a: &Self::State, scale: Real) -> Self::State;
}
