//! Fixed-step time integrators.

use dp_core::Real;

use crate::model::DynamicModel;

/// Trait for fixed-step time integrators.
pub trait Integrator {
    /// Advance the state by one step of size `h` starting at time `t`.
    fn step<M: DynamicModel>(&self, model: &M, t: Real, x: &M::State, h: Real) -> M::State;
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
///
/// Four derivative evaluations per step: stages 2 and 3 at the half-step
/// state, stage 4 at the full-step state, combined with weights 1-2-2-1.
#[derive(Clone, Copy, Debug, Default)]
pub struct RK4;

impl Integrator for RK4 {
    fn step<M: DynamicModel>(&self, model: &M, t: Real, x: &M::State, h: Real) -> M::State {
        let k1 = model.rhs(t, x);

        let x2 = model.add(x, &model.scale(&k1, 0.5 * h));
        let k2 = model.rhs(t + 0.5 * h, &x2);

        let x3 = model.add(x, &model.scale(&k2, 0.5 * h));
        let k3 = model.rhs(t + 0.5 * h, &x3);

        let x4 = model.add(x, &model.scale(&k3, h));
        let k4 = model.rhs(t + h, &x4);

        // Combine: x_new = x + (h/6) * (k1 + 2*k2 + 2*k3 + k4)
        let k_sum = model.add(
            &model.add(&k1, &model.scale(&k2, 2.0)),
            &model.add(&model.scale(&k3, 2.0), &k4),
        );

        model.add(x, &model.scale(&k_sum, h / 6.0))
    }
}

/// Forward Euler (explicit, 1st order).
///
/// One derivative evaluation per step instead of four. The solver always
/// integrates with [`RK4`]; this integrator exists for accuracy comparisons.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step<M: DynamicModel>(&self, model: &M, t: Real, x: &M::State, h: Real) -> M::State {
        let xdot = model.rhs(t, x);
        model.add(x, &model.scale(&xdot, h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// y' = y, exact solution e^t. Scalar state keeps the arithmetic obvious.
    struct ExpGrowth;

    impl DynamicModel for ExpGrowth {
        type State = Real;

        fn initial_state(&self) -> Real {
            1.0
        }

        fn rhs(&self, _t: Real, x: &Real) -> Real {
            *x
        }

        fn add(&self, a: &Real, b: &Real) -> Real {
            a + b
        }

        fn scale(&self, a: &Real, scale: Real) -> Real {
            a * scale
        }
    }

    #[test]
    fn rk4_single_step_matches_exponential() {
        let h = 0.1;
        let x1 = RK4.step(&ExpGrowth, 0.0, &1.0, h);
        // Local truncation error for RK4 is O(h^5).
        assert!((x1 - h.exp()).abs() < 1e-7, "x1 = {x1}");
    }

    #[test]
    fn rk4_is_much_more_accurate_than_euler() {
        let h: Real = 0.1;
        let exact = h.exp();
        let rk4_err = (RK4.step(&ExpGrowth, 0.0, &1.0, h) - exact).abs();
        let euler_err = (ForwardEuler.step(&ExpGrowth, 0.0, &1.0, h) - exact).abs();
        assert!(
            rk4_err * 1000.0 < euler_err,
            "rk4_err = {rk4_err}, euler_err = {euler_err}"
        );
    }

    #[test]
    fn zero_step_is_identity() {
        let x1 = RK4.step(&ExpGrowth, 0.0, &1.0, 0.0);
        assert_eq!(x1, 1.0);
    }
}
