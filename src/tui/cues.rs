//! Terminal presentation of breathing cues.

use std::time::{Duration, Instant};

use crate::features::breathing::{CueSink, Phase, SessionRecord};

/// How long the screen stays highlighted after a phase change.
const FLASH_DURATION: Duration = Duration::from_millis(400);

/// Turns controller cues into a terminal bell and a brief screen flash.
///
/// The bell stands in for the phone's sound cue and the flash for its
/// vibration. The render loop drains both.
#[derive(Debug, Clone, Default)]
pub struct TerminalCues {
    sound: bool,
    vibration: bool,
    bell_pending: bool,
    flash_until: Option<Instant>,
    message: Option<String>,
}

impl TerminalCues {
    /// Create cues with sound and vibration switched as given.
    #[must_use]
    pub const fn new(sound: bool, vibration: bool) -> Self {
        Self {
            sound,
            vibration,
            bell_pending: false,
            flash_until: None,
            message: None,
        }
    }

    /// Whether the bell rings on phase changes.
    #[must_use]
    pub const fn sound(&self) -> bool {
        self.sound
    }

    /// Whether the screen flashes on phase changes.
    #[must_use]
    pub const fn vibration(&self) -> bool {
        self.vibration
    }

    /// Flip the sound setting and return the new value.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound = !self.sound;
        if !self.sound {
            self.bell_pending = false;
        }
        self.sound
    }

    /// Flip the vibration setting and return the new value.
    pub fn toggle_vibration(&mut self) -> bool {
        self.vibration = !self.vibration;
        if !self.vibration {
            self.flash_until = None;
        }
        self.vibration
    }

    /// Take a pending bell, clearing it.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }

    /// Whether the flash is still showing at `now`.
    #[must_use]
    pub fn is_flashing(&self, now: Instant) -> bool {
        self.flash_until.is_some_and(|until| now < until)
    }

    /// Take the latest notification message, clearing it.
    pub fn take_message(&mut self) -> Option<String> {
        self.message.take()
    }
}

impl CueSink for TerminalCues {
    fn phase_changed(&mut self, _from: Phase, to: Phase) {
        if self.sound {
            self.bell_pending = true;
        }
        if self.vibration {
            self.flash_until = Some(Instant::now() + FLASH_DURATION);
        }
        self.message = Some(to.prompt().to_string());
    }

    fn session_saved(&mut self, record: &SessionRecord) {
        self.message = Some(format!("Session saved! {}", record.summary()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::breathing::PhaseConfig;

    #[test]
    fn test_phase_change_rings_and_flashes() {
        let mut cues = TerminalCues::new(true, true);
        cues.phase_changed(Phase::Inhale, Phase::Hold);

        assert!(cues.take_bell());
        assert!(!cues.take_bell());
        assert!(cues.is_flashing(Instant::now()));
        assert_eq!(cues.take_message().as_deref(), Some("Hold gently"));
    }

    #[test]
    fn test_muted_cues() {
        let mut cues = TerminalCues::new(false, false);
        cues.phase_changed(Phase::Hold, Phase::Exhale);

        assert!(!cues.take_bell());
        assert!(!cues.is_flashing(Instant::now()));
    }

    #[test]
    fn test_flash_expires() {
        let mut cues = TerminalCues::new(false, true);
        cues.phase_changed(Phase::Exhale, Phase::Inhale);
        assert!(!cues.is_flashing(Instant::now() + Duration::from_secs(1)));
    }

    #[test]
    fn test_toggle_sound_clears_pending_bell() {
        let mut cues = TerminalCues::new(true, true);
        cues.phase_changed(Phase::Inhale, Phase::Hold);
        assert!(!cues.toggle_sound());
        assert!(!cues.take_bell());
        assert!(!cues.toggle_vibration());
        assert!(!cues.is_flashing(Instant::now()));
    }

    #[test]
    fn test_session_saved_message() {
        let mut cues = TerminalCues::default();
        let record = SessionRecord::new(PhaseConfig::default(), 2, Phase::Inhale, 0);
        cues.session_saved(&record);
        assert!(cues
            .take_message()
            .is_some_and(|m| m.starts_with("Session saved!")));
    }
}
