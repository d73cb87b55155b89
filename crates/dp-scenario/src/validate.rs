//! Scenario validation logic.

use std::collections::HashSet;

use crate::schema::{LATEST_VERSION, ScenarioDef, ScenarioFile};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Empty ID in {context}")]
    EmptyId { context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_file(file: &ScenarioFile) -> Result<(), ValidationError> {
    if file.version != LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    let mut ids = HashSet::new();
    for scenario in &file.scenarios {
        if scenario.id.is_empty() {
            return Err(ValidationError::EmptyId {
                context: "scenarios".to_string(),
            });
        }
        if !ids.insert(&scenario.id) {
            return Err(ValidationError::DuplicateId {
                id: scenario.id.clone(),
                context: "scenarios".to_string(),
            });
        }
        validate_scenario(scenario)?;
    }

    Ok(())
}

fn validate_scenario(scenario: &ScenarioDef) -> Result<(), ValidationError> {
    require_positive(scenario.oscillator.mass_kg, "mass_kg", &scenario.id)?;
    require_positive(
        scenario.oscillator.spring_rate_n_per_m,
        "spring_rate_n_per_m",
        &scenario.id,
    )?;
    require_finite(scenario.initial.position_m, "position_m", &scenario.id)?;
    require_finite(
        scenario.initial.velocity_m_per_s,
        "velocity_m_per_s",
        &scenario.id,
    )?;
    require_positive(scenario.run.dt_s, "dt_s", &scenario.id)?;
    require_positive(scenario.run.t_end_s, "t_end_s", &scenario.id)?;
    Ok(())
}

fn require_positive(value: f64, field: &str, scenario_id: &str) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("scenario '{scenario_id}' {field}"),
            value: value.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }
    Ok(())
}

fn require_finite(value: f64, field: &str, scenario_id: &str) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidValue {
            field: format!("scenario '{scenario_id}' {field}"),
            value: value.to_string(),
            reason: "must be finite".to_string(),
        });
    }
    Ok(())
}
