//! Scenario execution and result summarization.

use dp_scenario::ScenarioDef;
use dp_sim::{StateSample, Trajectory, solve};

use crate::compile::compile_scenario;
use crate::error::{AppError, AppResult};

/// Derived figures for one solved trajectory.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub sample_count: usize,
    pub time_range: (f64, f64),
    pub peak_displacement: f64,
    pub final_sample: StateSample,
    /// First sample index carrying NaN/Inf, if the run went unstable.
    pub non_finite_onset: Option<usize>,
}

/// A completed scenario run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub scenario_id: String,
    pub trajectory: Trajectory,
    pub summary: RunSummary,
}

/// Compile and solve one scenario.
pub fn run_scenario(scenario: &ScenarioDef) -> AppResult<RunOutcome> {
    let config = compile_scenario(scenario);
    tracing::info!(
        scenario = %scenario.id,
        dt_s = config.dt,
        t_end_s = config.t_max,
        damping = config.damping.canonical_id(),
        "starting solve"
    );

    let trajectory = solve(&config)?;
    let summary = summarize(&trajectory)?;

    match summary.non_finite_onset {
        Some(onset) => tracing::warn!(
            scenario = %scenario.id,
            onset,
            "solve went non-finite mid-trajectory"
        ),
        None => tracing::info!(
            scenario = %scenario.id,
            samples = summary.sample_count,
            "solve complete"
        ),
    }

    Ok(RunOutcome {
        scenario_id: scenario.id.clone(),
        trajectory,
        summary,
    })
}

/// Summarize a trajectory for display.
pub fn summarize(trajectory: &Trajectory) -> AppResult<RunSummary> {
    let (Some(first), Some(last)) = (trajectory.first(), trajectory.last()) else {
        return Err(AppError::InvalidInput(
            "No samples in trajectory".to_string(),
        ));
    };

    Ok(RunSummary {
        sample_count: trajectory.len(),
        time_range: (first.t, last.t),
        peak_displacement: trajectory.peak_displacement(),
        final_sample: *last,
        non_finite_onset: trajectory.first_non_finite(),
    })
}
