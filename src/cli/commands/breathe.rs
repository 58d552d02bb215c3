//! Breathing command implementation.

use tracing::info;

use crate::cli::args::{BreatheArgs, OutputFormat};
use crate::cli::commands::companion::companion_with;
use crate::config::BreathingSettings;
use crate::error::MindfulError;
use crate::features::breathing::{simulate, BreathingController, PhaseConfig};
use crate::output::format_breathing_run;
use crate::tui::Tab;

/// Execute the breathe command.
///
/// Runs headless when `--ticks` is given, otherwise opens the interactive
/// screen on the breathing tab and prints what was logged after it closes.
///
/// # Errors
///
/// Returns an error for a zero-length phase, terminal failures, or output
/// formatting failures.
pub fn breathe(
    settings: &BreathingSettings,
    args: &BreatheArgs,
    format: OutputFormat,
) -> Result<String, MindfulError> {
    let pattern = resolve_pattern(settings.pattern, args)?;
    info!(%pattern, "breathing pattern");

    if let Some(ticks) = args.ticks {
        let mut controller = BreathingController::silent(pattern);
        let run = simulate(&mut controller, ticks, args.save);
        return format_breathing_run(&run, format);
    }

    companion_with(settings, pattern, Tab::Breathe, format)
}

/// Apply command-line overrides to the configured pattern.
fn resolve_pattern(base: PhaseConfig, args: &BreatheArgs) -> Result<PhaseConfig, MindfulError> {
    base.with_overrides(args.inhale, args.hold, args.exhale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::breathing::Phase;

    #[test]
    fn test_resolve_pattern_overrides() {
        let args = BreatheArgs {
            hold: Some(7),
            exhale: Some(8),
            ..BreatheArgs::default()
        };
        let pattern = resolve_pattern(PhaseConfig::default(), &args).unwrap();
        assert_eq!(pattern.duration(Phase::Inhale), 4);
        assert_eq!(pattern.duration(Phase::Hold), 7);
        assert_eq!(pattern.duration(Phase::Exhale), 8);
    }

    #[test]
    fn test_zero_override_rejected() {
        let args = BreatheArgs {
            inhale: Some(0),
            ticks: Some(1),
            ..BreatheArgs::default()
        };
        let err = breathe(&BreathingSettings::default(), &args, OutputFormat::Json).unwrap_err();
        assert!(matches!(
            err,
            MindfulError::InvalidPhaseDuration {
                phase: Phase::Inhale
            }
        ));
    }

    #[test]
    fn test_headless_json() {
        let args = BreatheArgs {
            ticks: Some(14),
            save: true,
            ..BreatheArgs::default()
        };
        let output = breathe(&BreathingSettings::default(), &args, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["transitions"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["final"]["cycles"], 1);
        assert_eq!(value["saved"]["completed_elapsed"], 0);
    }
}
