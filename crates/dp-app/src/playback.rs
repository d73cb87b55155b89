//! Deterministic playback preview.

use dp_playback::{PlaybackClock, PlaybackIndexer};
use dp_sim::{StateSample, Trajectory};

/// One row of a playback preview: where the clock stood after a tick and
/// which sample it displayed.
#[derive(Debug, Clone, Copy)]
pub struct PlaybackTick {
    pub tick: usize,
    pub time_s: f64,
    pub index: usize,
    pub sample: StateSample,
}

/// Drive a playback clock over the trajectory for a fixed number of ticks.
///
/// The tick cadence is synthetic (`tick_s` of "elapsed wall time" per tick),
/// so the table is fully deterministic and needs no sleeping. Row 0 is the
/// state before any tick.
pub fn playback_table(
    trajectory: &Trajectory,
    rate: f64,
    tick_s: f64,
    ticks: usize,
) -> Vec<PlaybackTick> {
    let indexer = PlaybackIndexer::for_trajectory(trajectory);
    let mut clock = PlaybackClock::new(trajectory.t_max(), rate);

    let mut rows = Vec::with_capacity(ticks + 1);
    let push_row = |rows: &mut Vec<PlaybackTick>, tick: usize, time_s: f64| {
        let index = indexer.index_for(time_s);
        if let Some(sample) = trajectory.samples().get(index) {
            rows.push(PlaybackTick {
                tick,
                time_s,
                index,
                sample: *sample,
            });
        }
    };

    push_row(&mut rows, 0, clock.time());
    for tick in 1..=ticks {
        let time_s = clock.advance(tick_s);
        push_row(&mut rows, tick, time_s);
    }
    rows
}
