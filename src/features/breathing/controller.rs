//! Breathing phase controller.
//!
//! Owns the inhale/hold/exhale cycle, the one-second ticker that drives it,
//! and the log of saved sessions. All state changes happen through the
//! methods here; progress is derived on read.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use super::history::{SessionHistory, SessionRecord};
use super::phase::{Phase, PhaseConfig};
use super::ticker::{Ticker, TICK_PERIOD};
use crate::error::MindfulError;

/// Receiver for the controller's outward notifications.
///
/// Implementations decide how a cue is presented (bell, flash, log line).
#[cfg_attr(test, mockall::automock)]
pub trait CueSink {
    /// Called exactly once for every phase transition.
    fn phase_changed(&mut self, from: Phase, to: Phase);

    /// Called after a session has been appended to the history.
    fn session_saved(&mut self, record: &SessionRecord);
}

/// A sink that ignores every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCues;

impl CueSink for NoCues {
    fn phase_changed(&mut self, _from: Phase, _to: Phase) {}

    fn session_saved(&mut self, _record: &SessionRecord) {}
}

/// A phase change produced by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// Phase that just ended
    pub from: Phase,
    /// Phase that just began
    pub to: Phase,
}

impl Transition {
    /// Whether this transition completes a full cycle.
    #[must_use]
    pub fn completes_cycle(&self) -> bool {
        self.from == Phase::Exhale && self.to == Phase::Inhale
    }
}

/// Read-only view of the controller for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    /// Current phase
    pub phase: Phase,
    /// Seconds elapsed in the current phase
    pub elapsed: u32,
    /// Seconds left in the current phase
    pub remaining: u32,
    /// Fraction of the current phase elapsed
    pub progress: f64,
    /// Whether the ticker is running
    pub active: bool,
    /// Full cycles completed since the last reset
    pub cycles: u32,
    /// Pattern in effect
    pub config: PhaseConfig,
}

/// The breathing state machine.
///
/// The ticker lives in an `Option` that is only `Some` while the controller
/// is active, so stopping, resetting or dropping the controller always
/// cancels it.
#[derive(Debug)]
pub struct BreathingController<S: CueSink = NoCues> {
    config: PhaseConfig,
    phase: Phase,
    elapsed: u32,
    cycles: u32,
    ticker: Option<Ticker>,
    history: SessionHistory,
    cues: S,
}

impl BreathingController<NoCues> {
    /// Create a controller that emits no cues.
    #[must_use]
    pub fn silent(config: PhaseConfig) -> Self {
        Self::new(config, NoCues)
    }
}

impl<S: CueSink> BreathingController<S> {
    /// Create an inactive controller at the start of the inhale phase.
    #[must_use]
    pub fn new(config: PhaseConfig, cues: S) -> Self {
        Self {
            config,
            phase: Phase::Inhale,
            elapsed: 0,
            cycles: 0,
            ticker: None,
            history: SessionHistory::new(),
            cues,
        }
    }

    /// Start or resume the cycle. Does nothing if already running.
    pub fn start(&mut self) {
        if self.ticker.is_some() {
            return;
        }
        self.ticker = Some(Ticker::new(TICK_PERIOD));
        info!(phase = %self.phase, elapsed = self.elapsed, "breathing started");
    }

    /// Pause the cycle, keeping the current phase and elapsed time.
    pub fn stop(&mut self) {
        if self.ticker.take().is_some() {
            info!(phase = %self.phase, elapsed = self.elapsed, "breathing stopped");
        }
    }

    /// Start when stopped, stop when running.
    pub fn toggle(&mut self) {
        if self.is_active() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Return to the beginning of the inhale phase, stopped.
    pub fn reset(&mut self) {
        self.ticker = None;
        self.phase = Phase::Inhale;
        self.elapsed = 0;
        self.cycles = 0;
        debug!("breathing reset");
    }

    /// Advance the cycle by one second.
    ///
    /// Has no effect while stopped. Returns the transition if this tick
    /// finished the current phase.
    pub fn tick(&mut self) -> Option<Transition> {
        if !self.is_active() {
            return None;
        }

        let duration = self.config.duration(self.phase);
        self.elapsed = (self.elapsed + 1).min(duration);
        if self.elapsed < duration {
            return None;
        }

        let transition = Transition {
            from: self.phase,
            to: self.phase.next(),
        };
        self.phase = transition.to;
        self.elapsed = 0;
        if transition.completes_cycle() {
            self.cycles += 1;
        }

        debug!(from = %transition.from, to = %transition.to, "phase changed");
        self.cues.phase_changed(transition.from, transition.to);
        Some(transition)
    }

    /// Run every tick that came due on the clock by `now`.
    ///
    /// Returns the transitions those ticks produced, in order. Runs nothing
    /// when stopped.
    pub fn pump(&mut self, now: Instant) -> Vec<Transition> {
        let due = match self.ticker.as_mut() {
            Some(ticker) => ticker.due(now),
            None => return Vec::new(),
        };

        (0..due).filter_map(|_| self.tick()).collect()
    }

    /// Time until the next tick is due, if running and armed.
    #[must_use]
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.as_ref().and_then(|t| t.until_next(now))
    }

    /// Save the current session to the history.
    pub fn save_session(&mut self) -> &SessionRecord {
        let record = SessionRecord::new(self.config, self.elapsed, self.phase, self.cycles);
        info!(
            elapsed = record.completed_elapsed,
            cycles = record.cycles,
            "breathing session saved"
        );
        self.cues.session_saved(&record);
        self.history.append(record)
    }

    /// Replace the breathing pattern and restart the cycle from inhale.
    ///
    /// # Errors
    ///
    /// Returns `MindfulError::SessionActive` while running.
    pub fn set_config(&mut self, config: PhaseConfig) -> Result<(), MindfulError> {
        if self.is_active() {
            return Err(MindfulError::SessionActive);
        }
        self.config = config;
        self.phase = Phase::Inhale;
        self.elapsed = 0;
        info!(%config, "breathing pattern changed");
        Ok(())
    }

    /// Drop every saved session.
    pub fn clear_history(&mut self) -> usize {
        self.history.clear()
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds elapsed in the current phase.
    #[must_use]
    pub const fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Seconds left in the current phase.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.config.duration(self.phase) - self.elapsed
    }

    /// Fraction of the current phase elapsed, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let duration = f64::from(self.config.duration(self.phase));
        (f64::from(self.elapsed) / duration).clamp(0.0, 1.0)
    }

    /// Whether the ticker is running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.ticker.is_some()
    }

    /// Full cycles completed since the last reset.
    #[must_use]
    pub const fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Pattern in effect.
    #[must_use]
    pub const fn config(&self) -> PhaseConfig {
        self.config
    }

    /// Saved sessions, oldest first.
    #[must_use]
    pub const fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// The cue sink.
    #[must_use]
    pub const fn cues(&self) -> &S {
        &self.cues
    }

    /// Mutable access to the cue sink, e.g. to toggle sound.
    pub fn cues_mut(&mut self) -> &mut S {
        &mut self.cues
    }

    /// Everything a renderer needs in one value.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            elapsed: self.elapsed,
            remaining: self.remaining(),
            progress: self.progress(),
            active: self.is_active(),
            cycles: self.cycles,
            config: self.config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn pattern(inhale: u32, hold: u32, exhale: u32) -> PhaseConfig {
        PhaseConfig::new(inhale, hold, exhale).unwrap()
    }

    fn started(config: PhaseConfig) -> BreathingController {
        let mut controller = BreathingController::silent(config);
        controller.start();
        controller
    }

    #[test]
    fn test_initial_state() {
        let controller = BreathingController::silent(PhaseConfig::default());
        assert_eq!(controller.phase(), Phase::Inhale);
        assert_eq!(controller.elapsed(), 0);
        assert!(!controller.is_active());
        assert_eq!(controller.progress(), 0.0);
        assert!(controller.history().is_empty());
    }

    #[test]
    fn test_full_cycle_takes_fourteen_ticks() {
        let mut controller = started(pattern(4, 4, 6));

        for _ in 0..3 {
            assert!(controller.tick().is_none());
        }
        let t = controller.tick().unwrap();
        assert_eq!((t.from, t.to), (Phase::Inhale, Phase::Hold));
        assert_eq!(controller.elapsed(), 0);

        for _ in 0..3 {
            assert!(controller.tick().is_none());
        }
        assert_eq!(controller.tick().map(|t| t.to), Some(Phase::Exhale));
        assert_eq!(controller.elapsed(), 0);

        for _ in 0..5 {
            assert!(controller.tick().is_none());
        }
        let t = controller.tick().unwrap();
        assert_eq!(t.to, Phase::Inhale);
        assert!(t.completes_cycle());
        assert_eq!(controller.elapsed(), 0);
        assert_eq!(controller.cycles(), 1);
    }

    #[test]
    fn test_phases_never_skip() {
        let mut controller = started(pattern(1, 2, 3));
        let mut expected = Phase::Inhale;

        for _ in 0..600 {
            if let Some(t) = controller.tick() {
                assert_eq!(t.from, expected);
                assert_eq!(t.to, expected.next());
                expected = t.to;
            }
            assert_eq!(controller.phase(), expected);
        }
        assert_eq!(controller.cycles(), 100);
    }

    #[test]
    fn test_elapsed_and_progress_stay_in_bounds() {
        let mut controller = started(pattern(3, 1, 5));

        for _ in 0..200 {
            controller.tick();
            let duration = controller.config().duration(controller.phase());
            assert!(controller.elapsed() < duration);
            let progress = controller.progress();
            assert!((0.0..=1.0).contains(&progress));
        }
    }

    #[test]
    fn test_one_second_phases_transition_every_tick() {
        let mut controller = started(pattern(1, 1, 1));
        for _ in 0..9 {
            assert!(controller.tick().is_some());
            assert_eq!(controller.elapsed(), 0);
        }
        assert_eq!(controller.cycles(), 3);
    }

    #[test]
    fn test_progress_is_ratio() {
        let mut controller = started(pattern(4, 4, 6));
        controller.tick();
        assert!((controller.progress() - 0.25).abs() < f64::EPSILON);
        controller.tick();
        assert!((controller.progress() - 0.5).abs() < f64::EPSILON);
        assert_eq!(controller.remaining(), 2);
    }

    #[test]
    fn test_tick_while_stopped_is_ignored() {
        let mut controller = BreathingController::silent(PhaseConfig::default());
        assert!(controller.tick().is_none());
        assert_eq!(controller.elapsed(), 0);
    }

    #[test]
    fn test_start_is_idempotent() {
        let start = Instant::now();
        let mut controller = started(PhaseConfig::default());
        controller.pump(start);
        controller.start();
        // A second start must not re-arm the schedule.
        assert_eq!(
            controller.until_next_tick(start),
            Some(Duration::from_secs(1))
        );
        assert!(controller.is_active());
    }

    #[test]
    fn test_stop_preserves_position() {
        let mut controller = started(pattern(4, 4, 6));
        for _ in 0..5 {
            controller.tick();
        }
        controller.stop();
        assert!(!controller.is_active());
        assert_eq!(controller.phase(), Phase::Hold);
        assert_eq!(controller.elapsed(), 1);

        controller.start();
        controller.tick();
        assert_eq!(controller.phase(), Phase::Hold);
        assert_eq!(controller.elapsed(), 2);
    }

    #[test]
    fn test_toggle() {
        let mut controller = BreathingController::silent(PhaseConfig::default());
        controller.toggle();
        assert!(controller.is_active());
        controller.toggle();
        assert!(!controller.is_active());
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut controller = started(pattern(2, 3, 4));
        for ticks in 0..20 {
            for _ in 0..ticks {
                controller.tick();
            }
            controller.reset();
            assert_eq!(controller.phase(), Phase::Inhale);
            assert_eq!(controller.elapsed(), 0);
            assert!(!controller.is_active());
            assert_eq!(controller.progress(), 0.0);
            assert_eq!(controller.cycles(), 0);
            controller.start();
        }
    }

    #[test]
    fn test_pump_follows_clock() {
        let start = Instant::now();
        let mut controller = started(pattern(4, 4, 6));

        assert!(controller.pump(start).is_empty());
        assert!(controller
            .pump(start + Duration::from_millis(3999))
            .is_empty());
        assert_eq!(controller.elapsed(), 3);

        let transitions = controller.pump(start + Duration::from_secs(4));
        assert_eq!(transitions.len(), 1);
        assert_eq!(controller.phase(), Phase::Hold);
    }

    #[test]
    fn test_no_ticks_after_stop() {
        let start = Instant::now();
        let mut controller = started(PhaseConfig::default());
        controller.pump(start);
        controller.pump(start + Duration::from_secs(2));
        assert_eq!(controller.elapsed(), 2);

        controller.stop();
        controller.pump(start + Duration::from_secs(10));
        controller.pump(start + Duration::from_secs(60));
        assert_eq!(controller.elapsed(), 2);
        assert_eq!(controller.phase(), Phase::Inhale);
        assert!(controller.until_next_tick(start).is_none());
    }

    #[test]
    fn test_restart_does_not_replay_paused_time() {
        let start = Instant::now();
        let mut controller = started(PhaseConfig::default());
        controller.pump(start);
        controller.pump(start + Duration::from_secs(1));
        controller.stop();

        controller.start();
        let resumed = start + Duration::from_secs(30);
        assert!(controller.pump(resumed).is_empty());
        assert_eq!(controller.elapsed(), 1);
        controller.pump(resumed + Duration::from_secs(1));
        assert_eq!(controller.elapsed(), 2);
    }

    #[test]
    fn test_cue_fires_once_per_transition() {
        let mut cues = MockCueSink::new();
        cues.expect_phase_changed()
            .with(eq(Phase::Inhale), eq(Phase::Hold))
            .times(1)
            .return_const(());
        cues.expect_phase_changed()
            .with(eq(Phase::Hold), eq(Phase::Exhale))
            .times(1)
            .return_const(());
        cues.expect_session_saved().never();

        let mut controller = BreathingController::new(pattern(3, 2, 5), cues);
        controller.start();
        for _ in 0..6 {
            controller.tick();
        }
        assert_eq!(controller.phase(), Phase::Exhale);
    }

    #[test]
    fn test_save_session_appends_in_order() {
        let mut cues = MockCueSink::new();
        cues.expect_phase_changed().return_const(());
        cues.expect_session_saved().times(2).return_const(());

        let mut controller = BreathingController::new(pattern(4, 4, 6), cues);
        controller.start();
        controller.tick();
        controller.save_session();
        controller.tick();
        controller.tick();
        let last = controller.save_session().clone();

        let saved: Vec<u32> = controller
            .history()
            .iter()
            .map(|r| r.completed_elapsed)
            .collect();
        assert_eq!(saved, vec![1, 3]);
        assert_eq!(last.config, pattern(4, 4, 6));
        assert_eq!(last.phase, Phase::Inhale);
    }

    #[test]
    fn test_set_config_rejected_while_running() {
        let mut controller = started(PhaseConfig::default());
        let err = controller.set_config(pattern(4, 7, 8)).unwrap_err();
        assert!(matches!(err, MindfulError::SessionActive));
        assert_eq!(controller.config(), PhaseConfig::default());
    }

    #[test]
    fn test_set_config_restarts_cycle() {
        let mut controller = started(pattern(4, 4, 6));
        for _ in 0..6 {
            controller.tick();
        }
        controller.stop();

        controller.set_config(pattern(4, 7, 8)).unwrap();
        assert_eq!(controller.phase(), Phase::Inhale);
        assert_eq!(controller.elapsed(), 0);
        assert_eq!(controller.config().hold(), 7);
    }

    #[test]
    fn test_clear_history() {
        let mut controller = BreathingController::silent(PhaseConfig::default());
        controller.save_session();
        controller.save_session();
        assert_eq!(controller.clear_history(), 2);
        assert!(controller.history().is_empty());
    }

    #[test]
    fn test_snapshot() {
        let mut controller = started(pattern(4, 4, 6));
        controller.tick();
        let snap = controller.snapshot();
        assert_eq!(snap.phase, Phase::Inhale);
        assert_eq!(snap.elapsed, 1);
        assert_eq!(snap.remaining, 3);
        assert!(snap.active);
    }
}
