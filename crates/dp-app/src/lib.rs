//! Shared application service layer for dashpot.
//!
//! This crate provides a unified interface for frontends, centralizing
//! scenario loading, compilation to simulation configs, run execution,
//! summarization, playback previews, and export.

pub mod compile;
pub mod error;
pub mod export;
pub mod playback;
pub mod run_service;
pub mod scenario_service;

// Re-export key types for convenience
pub use compile::{compile_scenario, damping_law_for};
pub use error::{AppError, AppResult};
pub use export::{ExportFormat, SampleRecord, TrajectoryExport, export_trajectory};
pub use playback::{PlaybackTick, playback_table};
pub use run_service::{RunOutcome, RunSummary, run_scenario, summarize};
pub use scenario_service::{ScenarioSummary, get_scenario, list_scenarios, load_scenarios};
