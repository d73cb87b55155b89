//! Playback support for precomputed trajectories.
//!
//! Maps a continuously advancing clock onto discrete trajectory samples for
//! animation. Two pieces:
//!
//! - [`index_for_time`] / [`PlaybackIndexer`]: pure clamp-only mapping from
//!   clock value to sample index
//! - [`PlaybackClock`]: the caller-side looping clock that owns the
//!   wrap-to-zero policy
//!
//! The indexer never wraps and the clock never indexes; the render loop
//! composes the two once per tick.

pub mod clock;
pub mod indexer;

// Re-exports for public API
pub use clock::PlaybackClock;
pub use indexer::{PlaybackIndexer, index_for_time, sample_for_time};
