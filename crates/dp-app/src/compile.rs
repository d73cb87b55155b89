//! Scenario-to-simulation compilation.

use dp_scenario::{DampingDef, ScenarioDef};
use dp_sim::{DampingLaw, InitialState, OscillatorParams, SimulationConfig};

/// Map the schema damping tag onto the engine's law catalog.
///
/// Both sides are closed enums, so this match is the single place the two
/// vocabularies meet; adding a law without extending it fails to compile.
pub fn damping_law_for(def: DampingDef) -> DampingLaw {
    match def {
        DampingDef::ExpPosition => DampingLaw::ExpPosition,
        DampingDef::ExpVelocity => DampingLaw::ExpVelocity,
        DampingDef::VanDerPol => DampingLaw::VanDerPol,
        DampingDef::Constant => DampingLaw::Constant,
    }
}

/// Build the engine configuration for one scenario.
///
/// Purely structural; numeric validation happens in
/// [`SimulationConfig::validate`] when the solve starts.
pub fn compile_scenario(scenario: &ScenarioDef) -> SimulationConfig {
    SimulationConfig {
        params: OscillatorParams {
            mass: scenario.oscillator.mass_kg,
            spring_rate: scenario.oscillator.spring_rate_n_per_m,
        },
        initial: InitialState {
            position: scenario.initial.position_m,
            velocity: scenario.initial.velocity_m_per_s,
        },
        damping: damping_law_for(scenario.damping),
        dt: scenario.run.dt_s,
        t_max: scenario.run.t_end_s,
    }
}
