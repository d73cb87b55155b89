//! Fixed-step simulation engine for the active damper rig.
//!
//! Provides:
//! - Single degree of freedom mass-spring model with pluggable damping laws
//! - Closed damping-law catalog (displacement/velocity activated, Van der
//!   Pol, constant)
//! - Fixed-step RK4 integrator (plus Forward Euler for comparisons)
//! - Validated solve producing an immutable [`Trajectory`]

pub mod damping;
pub mod error;
pub mod integrator;
pub mod model;
pub mod oscillator;
pub mod sim;
pub mod trajectory;

// Re-exports for public API
pub use damping::{DAMPING_CATALOG, Damping, DampingCatalogEntry, DampingLaw};
pub use error::{SimError, SimResult};
pub use integrator::{ForwardEuler, Integrator, RK4};
pub use model::DynamicModel;
pub use oscillator::{InitialState, OscState, Oscillator, OscillatorParams};
pub use sim::{MAX_STEPS, SimulationConfig, solve, solve_model};
pub use trajectory::{StateSample, Trajectory};
