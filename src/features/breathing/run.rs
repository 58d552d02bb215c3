//! Headless breathing runs.
//!
//! Drives a controller for a fixed number of ticks without waiting on the
//! wall clock. Used by `mindful breathe --ticks` and handy in scripts.

use serde::Serialize;

use super::controller::{BreathingController, CueSink, Snapshot};
use super::history::SessionRecord;
use super::phase::Phase;

/// A transition and the tick that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimedTransition {
    /// 1-based tick number
    pub tick: u32,
    /// Phase that ended
    pub from: Phase,
    /// Phase that began
    pub to: Phase,
}

/// Outcome of a headless run.
#[derive(Debug, Clone, Serialize)]
pub struct BreathingRun {
    /// Ticks executed
    pub ticks: u32,
    /// Every phase change, in order
    pub transitions: Vec<TimedTransition>,
    /// Controller state after the last tick
    #[serde(rename = "final")]
    pub final_state: Snapshot,
    /// Session saved at the end, if requested
    pub saved: Option<SessionRecord>,
}

/// Start `controller`, tick it `ticks` times, then stop it.
///
/// With `save`, the session is saved after stopping so the record reflects
/// the final position.
pub fn simulate<S: CueSink>(
    controller: &mut BreathingController<S>,
    ticks: u32,
    save: bool,
) -> BreathingRun {
    controller.start();

    let transitions = (1..=ticks)
        .filter_map(|tick| {
            controller.tick().map(|t| TimedTransition {
                tick,
                from: t.from,
                to: t.to,
            })
        })
        .collect();

    controller.stop();
    let saved = save.then(|| controller.save_session().clone());

    BreathingRun {
        ticks,
        transitions,
        final_state: controller.snapshot(),
        saved,
    }
}
