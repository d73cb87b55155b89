//! Simulation driver: validated configuration and the fixed-step solve loop.

use dp_core::{Real, ensure_finite};

use crate::damping::DampingLaw;
use crate::error::{SimError, SimResult};
use crate::integrator::{Integrator, RK4};
use crate::model::DynamicModel;
use crate::oscillator::{InitialState, OscState, Oscillator, OscillatorParams};
use crate::trajectory::{StateSample, Trajectory};

/// Upper bound on integration steps per solve.
///
/// Keeps a mistyped `dt` from turning into an unbounded allocation; at
/// normal step sizes this is hours of simulated time.
pub const MAX_STEPS: usize = 10_000_000;

/// Everything one solve needs, validated as a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub params: OscillatorParams,
    pub initial: InitialState,
    pub damping: DampingLaw,
    /// Fixed integration step size.
    pub dt: Real,
    /// End of the simulated span.
    pub t_max: Real,
}

impl SimulationConfig {
    /// Check every invariant the solve loop relies on.
    ///
    /// Rejects non-finite or non-positive `mass`, `spring_rate`, `dt` and
    /// `t_max`, non-finite initial conditions, and spans whose step count
    /// would exceed [`MAX_STEPS`].
    pub fn validate(&self) -> SimResult<()> {
        require_positive(self.params.mass, "mass")?;
        require_positive(self.params.spring_rate, "spring_rate")?;
        ensure_finite(self.initial.position, "initial position")?;
        ensure_finite(self.initial.velocity, "initial velocity")?;
        checked_steps(self.dt, self.t_max)?;
        Ok(())
    }
}

fn require_positive(x: Real, what: &'static str) -> SimResult<()> {
    if !x.is_finite() {
        return Err(SimError::NonFiniteConfig { what, value: x });
    }
    if x <= 0.0 {
        return Err(SimError::NotPositive { what, value: x });
    }
    Ok(())
}

/// Step count for the grid: `ceil(t_max / dt)`, bounded by [`MAX_STEPS`].
///
/// The float-to-usize cast saturates, so absurd ratios land in the budget
/// check instead of wrapping.
fn checked_steps(dt: Real, t_max: Real) -> SimResult<usize> {
    require_positive(dt, "dt")?;
    require_positive(t_max, "t_max")?;
    let steps = (t_max / dt).ceil() as usize;
    if steps > MAX_STEPS {
        return Err(SimError::StepBudget {
            requested: steps,
            max: MAX_STEPS,
        });
    }
    Ok(steps)
}

/// Run the oscillator described by `config` from `t = 0` through `t_max`.
///
/// Validation failures are the only error path. Numerical blow-up during
/// integration is not: non-finite values propagate through the remaining
/// samples and are observable via [`Trajectory::first_non_finite`].
pub fn solve(config: &SimulationConfig) -> SimResult<Trajectory> {
    config.validate()?;
    let model = Oscillator::new(config.params, config.initial, config.damping);
    solve_model(&model, &RK4, config.dt, config.t_max)
}

/// Integrate any oscillator-shaped model over the fixed grid.
///
/// [`solve`] always integrates with [`RK4`]; this entry point takes the
/// integrator as a parameter so accuracy comparisons can run the same grid
/// with a different scheme.
pub fn solve_model<M, I>(model: &M, integrator: &I, dt: Real, t_max: Real) -> SimResult<Trajectory>
where
    M: DynamicModel<State = OscState>,
    I: Integrator,
{
    let steps = checked_steps(dt, t_max)?;

    let mut samples = Vec::with_capacity(steps + 1);
    let mut t = 0.0;
    let mut x = model.initial_state();
    samples.push(StateSample {
        t,
        y: x.y,
        v: x.v,
    });

    for _ in 0..steps {
        let remaining = t_max - t;
        if remaining > 0.0 && remaining < dt {
            // Partial final step: land exactly on t_max.
            x = integrator.step(model, t, &x, remaining);
            t = t_max;
        } else {
            // Full step. When rounding leaves no positive remainder the
            // grid keeps its nominal spacing, so t stays strictly
            // increasing.
            x = integrator.step(model, t, &x, dt);
            t += dt;
        }
        samples.push(StateSample {
            t,
            y: x.y,
            v: x.v,
        });
    }

    Ok(Trajectory::new(samples, t_max, dt))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> SimulationConfig {
        SimulationConfig {
            params: OscillatorParams {
                mass: 1.0,
                spring_rate: 1.0,
            },
            initial: InitialState {
                position: 1.0,
                velocity: 0.0,
            },
            damping: DampingLaw::Constant,
            dt: 0.05,
            t_max: 35.0,
        }
    }

    #[test]
    fn rejects_non_positive_mass() {
        let mut cfg = base_config();
        cfg.params.mass = 0.0;
        match cfg.validate().unwrap_err() {
            SimError::NotPositive { what, .. } => assert_eq!(what, "mass"),
            other => panic!("unexpected error: {other}"),
        }
        cfg.params.mass = -2.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_spring_rate_dt_and_t_max() {
        let mut cfg = base_config();
        cfg.params.spring_rate = -1.0;
        assert!(cfg.validate().is_err());

        let mut cfg = base_config();
        cfg.dt = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = base_config();
        cfg.t_max = -1.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_fields() {
        let mut cfg = base_config();
        cfg.initial.position = f64::NAN;
        match cfg.validate().unwrap_err() {
            SimError::NonFiniteConfig { what, .. } => assert_eq!(what, "initial position"),
            other => panic!("unexpected error: {other}"),
        }

        let mut cfg = base_config();
        cfg.initial.velocity = f64::INFINITY;
        assert!(cfg.validate().is_err());

        let mut cfg = base_config();
        cfg.dt = f64::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_spans_beyond_the_step_budget() {
        let mut cfg = base_config();
        cfg.dt = 1e-9;
        cfg.t_max = 1e9;
        match cfg.validate().unwrap_err() {
            SimError::StepBudget { max, .. } => assert_eq!(max, MAX_STEPS),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn sample_count_is_ceil_of_span_over_step_plus_one() {
        let traj = solve(&base_config()).unwrap();
        // 35.0 / 0.05 divides evenly into 700 steps.
        assert_eq!(traj.len(), 701);

        let mut cfg = base_config();
        cfg.dt = 0.3;
        cfg.t_max = 1.0;
        // ceil(1.0 / 0.3) = 4 steps, the last one partial.
        let traj = solve(&cfg).unwrap();
        assert_eq!(traj.len(), 5);
    }

    #[test]
    fn one_sample_beyond_span_when_dt_exceeds_t_max() {
        let mut cfg = base_config();
        cfg.dt = 2.0;
        cfg.t_max = 1.0;
        let traj = solve(&cfg).unwrap();
        assert_eq!(traj.len(), 2);
        assert_eq!(traj.samples()[1].t, 1.0);
    }

    #[test]
    fn first_sample_is_the_exact_initial_condition() {
        let mut cfg = base_config();
        cfg.initial.position = 0.123_456_789;
        cfg.initial.velocity = -9.75;
        let traj = solve(&cfg).unwrap();
        let first = traj.first().unwrap();
        assert_eq!(first.t, 0.0);
        assert_eq!(first.y, 0.123_456_789);
        assert_eq!(first.v, -9.75);
    }

    #[test]
    fn times_are_strictly_increasing_and_end_on_t_max() {
        let mut cfg = base_config();
        cfg.dt = 0.3;
        cfg.t_max = 1.0;
        let traj = solve(&cfg).unwrap();
        for pair in traj.samples().windows(2) {
            assert!(pair[1].t > pair[0].t, "{} !> {}", pair[1].t, pair[0].t);
        }
        assert_eq!(traj.last().unwrap().t, 1.0);
    }

    #[test]
    fn times_stay_strictly_increasing_when_rounding_overshoots() {
        // 0.1 + 0.2 in f64 is slightly above 0.3, so ceil(t_max / dt) rounds
        // up to 4 and the last step has no positive remainder left.
        let mut cfg = base_config();
        cfg.dt = 0.1;
        cfg.t_max = 0.1 + 0.2;
        let traj = solve(&cfg).unwrap();
        assert_eq!(traj.len(), 5);
        for pair in traj.samples().windows(2) {
            assert!(pair[1].t > pair[0].t);
        }
    }

    #[test]
    fn identical_configs_yield_identical_trajectories() {
        let cfg = base_config();
        let a = solve(&cfg).unwrap();
        let b = solve(&cfg).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn solve_model_checks_its_grid_arguments() {
        let model = Oscillator::new(
            base_config().params,
            base_config().initial,
            DampingLaw::Constant,
        );
        assert!(solve_model(&model, &RK4, -0.1, 1.0).is_err());
        assert!(solve_model(&model, &RK4, 0.1, f64::INFINITY).is_err());
    }

    #[test]
    fn constant_damping_decays_the_envelope() {
        let traj = solve(&base_config()).unwrap();
        assert!(traj.first_non_finite().is_none());
        // gamma = 0.2 bleeds energy, so late displacement sits well under
        // the initial amplitude.
        let tail_peak = traj
            .samples()
            .iter()
            .filter(|s| s.t > 30.0)
            .fold(0.0_f64, |acc, s| acc.max(s.y.abs()));
        assert!(tail_peak < 0.1, "tail peak {tail_peak}");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use dp_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn grid_contract_holds_for_arbitrary_valid_spans(
            dt in 1e-3_f64..1.0,
            t_max in 1e-2_f64..20.0,
        ) {
            let cfg = SimulationConfig {
                params: OscillatorParams { mass: 1.0, spring_rate: 1.0 },
                initial: InitialState { position: 1.0, velocity: 0.0 },
                damping: DampingLaw::Constant,
                dt,
                t_max,
            };
            let traj = solve(&cfg).unwrap();
            prop_assert_eq!(traj.len(), (t_max / dt).ceil() as usize + 1);
            prop_assert_eq!(traj.first().unwrap().t, 0.0);
            for pair in traj.samples().windows(2) {
                prop_assert!(pair[1].t > pair[0].t);
            }
            // Every interval except the (possibly partial) last one is dt.
            for pair in traj.samples().windows(2).take(traj.len().saturating_sub(2)) {
                prop_assert!(nearly_equal(pair[1].t - pair[0].t, dt, Tolerances::default()));
            }
        }
    }
}
