//! dp-core: stable foundation for dashpot.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{DpError, DpResult};
pub use numeric::*;
