//! One-shot trajectory export.

use serde::{Deserialize, Serialize};

use dp_sim::Trajectory;

use crate::error::{AppError, AppResult};

/// Supported export encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        if s.eq_ignore_ascii_case("csv") {
            Ok(ExportFormat::Csv)
        } else if s.eq_ignore_ascii_case("json") {
            Ok(ExportFormat::Json)
        } else {
            Err(AppError::InvalidInput(format!(
                "Unknown export format: {s} (expected csv or json)"
            )))
        }
    }
}

/// JSON export document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrajectoryExport {
    pub scenario_id: String,
    pub dt_s: f64,
    pub t_max_s: f64,
    pub samples: Vec<SampleRecord>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SampleRecord {
    pub t_s: f64,
    pub y_m: f64,
    pub v_m_per_s: f64,
}

/// Render the trajectory as CSV with a header row.
pub fn trajectory_to_csv(trajectory: &Trajectory) -> String {
    let mut csv = String::from("t_s,y_m,v_m_per_s\n");
    for s in trajectory.samples() {
        csv.push_str(&format!("{},{},{}\n", s.t, s.y, s.v));
    }
    csv
}

/// Render the trajectory as a pretty-printed JSON document.
pub fn trajectory_to_json(scenario_id: &str, trajectory: &Trajectory) -> AppResult<String> {
    let doc = TrajectoryExport {
        scenario_id: scenario_id.to_string(),
        dt_s: trajectory.dt(),
        t_max_s: trajectory.t_max(),
        samples: trajectory
            .samples()
            .iter()
            .map(|s| SampleRecord {
                t_s: s.t,
                y_m: s.y,
                v_m_per_s: s.v,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Render the trajectory in the requested format.
pub fn export_trajectory(
    scenario_id: &str,
    trajectory: &Trajectory,
    format: ExportFormat,
) -> AppResult<String> {
    match format {
        ExportFormat::Csv => Ok(trajectory_to_csv(trajectory)),
        ExportFormat::Json => trajectory_to_json(scenario_id, trajectory),
    }
}
