//! Breathing phases and the per-phase duration pattern.

use serde::{Deserialize, Serialize};

use crate::error::MindfulError;

/// One step of the breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Breathe in
    Inhale,
    /// Hold the breath
    Hold,
    /// Breathe out
    Exhale,
}

impl Phase {
    /// All phases in cycle order.
    pub const ALL: [Self; 3] = [Self::Inhale, Self::Hold, Self::Exhale];

    /// The phase that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Inhale => Self::Hold,
            Self::Hold => Self::Exhale,
            Self::Exhale => Self::Inhale,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Inhale => "Inhale",
            Self::Hold => "Hold",
            Self::Exhale => "Exhale",
        }
    }

    /// Short instruction shown while the phase runs.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Inhale => "Breathe in slowly",
            Self::Hold => "Hold gently",
            Self::Exhale => "Let it all out",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Seconds spent in each phase of one breathing cycle.
///
/// Every duration is at least one second. The fields are private so the
/// only ways to build a value are [`PhaseConfig::new`], [`Default`] and
/// deserialization, all of which enforce that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPhaseConfig", into = "RawPhaseConfig")]
pub struct PhaseConfig {
    inhale: u32,
    hold: u32,
    exhale: u32,
}

impl PhaseConfig {
    /// Build a pattern, rejecting any zero-length phase.
    ///
    /// # Errors
    ///
    /// Returns `MindfulError::InvalidPhaseDuration` naming the first phase
    /// whose duration is zero.
    pub fn new(inhale: u32, hold: u32, exhale: u32) -> Result<Self, MindfulError> {
        for (phase, seconds) in Phase::ALL.into_iter().zip([inhale, hold, exhale]) {
            if seconds == 0 {
                return Err(MindfulError::InvalidPhaseDuration { phase });
            }
        }
        Ok(Self {
            inhale,
            hold,
            exhale,
        })
    }

    /// Duration of `phase` in seconds. Never zero.
    #[must_use]
    pub const fn duration(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Inhale => self.inhale,
            Phase::Hold => self.hold,
            Phase::Exhale => self.exhale,
        }
    }

    /// Seconds in one full inhale/hold/exhale cycle, saturating at
    /// `u32::MAX`.
    #[must_use]
    pub const fn cycle_seconds(&self) -> u32 {
        self.inhale.saturating_add(self.hold).saturating_add(self.exhale)
    }

    /// Inhale duration in seconds.
    #[must_use]
    pub const fn inhale(&self) -> u32 {
        self.inhale
    }

    /// Hold duration in seconds.
    #[must_use]
    pub const fn hold(&self) -> u32 {
        self.hold
    }

    /// Exhale duration in seconds.
    #[must_use]
    pub const fn exhale(&self) -> u32 {
        self.exhale
    }

    /// Return a copy with some phases overridden.
    ///
    /// # Errors
    ///
    /// Returns `MindfulError::InvalidPhaseDuration` if an override is zero.
    pub fn with_overrides(
        &self,
        inhale: Option<u32>,
        hold: Option<u32>,
        exhale: Option<u32>,
    ) -> Result<Self, MindfulError> {
        Self::new(
            inhale.unwrap_or(self.inhale),
            hold.unwrap_or(self.hold),
            exhale.unwrap_or(self.exhale),
        )
    }
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            inhale: 4,
            hold: 4,
            exhale: 6,
        }
    }
}

impl std::fmt::Display for PhaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "inhale {}s / hold {}s / exhale {}s",
            self.inhale, self.hold, self.exhale
        )
    }
}

/// Unvalidated wire form of [`PhaseConfig`].
#[derive(Serialize, Deserialize)]
struct RawPhaseConfig {
    inhale: u32,
    hold: u32,
    exhale: u32,
}

impl TryFrom<RawPhaseConfig> for PhaseConfig {
    type Error = MindfulError;

    fn try_from(raw: RawPhaseConfig) -> Result<Self, Self::Error> {
        Self::new(raw.inhale, raw.hold, raw.exhale)
    }
}

impl From<PhaseConfig> for RawPhaseConfig {
    fn from(config: PhaseConfig) -> Self {
        Self {
            inhale: config.inhale,
            hold: config.hold,
            exhale: config.exhale,
        }
    }
}
