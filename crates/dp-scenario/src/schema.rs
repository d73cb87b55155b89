//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

/// Schema version this build reads and writes.
pub const LATEST_VERSION: u32 = 1;

/// A scenario file: a named collection of runnable damper setups.
///
/// ```yaml
/// version: 1
/// name: Bench scenarios
/// scenarios:
///   - id: baseline
///     name: Constant damping baseline
///     oscillator:
///       mass_kg: 1.0
///       spring_rate_n_per_m: 1.0
///     initial:
///       position_m: 1.0
///       velocity_m_per_s: 0.0
///     damping:
///       type: constant
///     run:
///       dt_s: 0.05
///       t_end_s: 35.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioFile {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub scenarios: Vec<ScenarioDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioDef {
    pub id: String,
    pub name: String,
    pub oscillator: OscillatorDef,
    pub initial: InitialDef,
    pub damping: DampingDef,
    pub run: RunDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OscillatorDef {
    pub mass_kg: f64,
    pub spring_rate_n_per_m: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct InitialDef {
    pub position_m: f64,
    #[serde(default)]
    pub velocity_m_per_s: f64,
}

/// Damping law selection.
///
/// Closed set: an unknown `type` tag fails deserialization outright rather
/// than falling back to any default law.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum DampingDef {
    #[serde(rename = "exp_y")]
    ExpPosition,
    #[serde(rename = "exp_v")]
    ExpVelocity,
    #[serde(rename = "vdp")]
    VanDerPol,
    #[serde(rename = "constant")]
    Constant,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RunDef {
    pub dt_s: f64,
    pub t_end_s: f64,
}
