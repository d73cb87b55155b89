//! Scenario file loading and introspection.

use std::path::Path;

use dp_scenario::{ScenarioDef, ScenarioFile, from_yaml_str};

use crate::error::{AppError, AppResult};

/// Summary of a scenario for listing.
#[derive(Debug, Clone)]
pub struct ScenarioSummary {
    pub id: String,
    pub name: String,
    pub damping_id: &'static str,
    pub dt_s: f64,
    pub t_end_s: f64,
}

/// Load and validate a scenario file from YAML.
pub fn load_scenarios(path: &Path) -> AppResult<ScenarioFile> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let file = from_yaml_str(&content)?;
    Ok(file)
}

/// List all scenarios in the file with summaries.
pub fn list_scenarios(file: &ScenarioFile) -> Vec<ScenarioSummary> {
    file.scenarios
        .iter()
        .map(|scenario| ScenarioSummary {
            id: scenario.id.clone(),
            name: scenario.name.clone(),
            damping_id: crate::compile::damping_law_for(scenario.damping).canonical_id(),
            dt_s: scenario.run.dt_s,
            t_end_s: scenario.run.t_end_s,
        })
        .collect()
}

/// Get a specific scenario by ID.
pub fn get_scenario<'a>(file: &'a ScenarioFile, scenario_id: &str) -> AppResult<&'a ScenarioDef> {
    file.scenarios
        .iter()
        .find(|s| s.id == scenario_id)
        .ok_or_else(|| AppError::ScenarioNotFound(scenario_id.to_string()))
}
