use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "mindful")]
#[command(about = "A calm terminal companion: guided breathing, mood, journal and gratitude logs")]
#[command(long_about = "mindful - a mental health companion for the terminal

Guided breathing with a configurable inhale/hold/exhale pattern,
mood check-ins, a journal and a gratitude log in one interactive screen,
daily affirmations, and a list of people to reach out to.

QUICK START:
  mindful breathe                 Open the breathing screen
  mindful breathe --hold 7 --exhale 8
  mindful mood                    Check in with how you feel
  mindful journal                 Write and search journal entries
  mindful gratitude               Note what you're grateful for
  mindful affirm                  Today's affirmation
  mindful resources               Crisis and support contacts

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  mindful <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to the `general.default_output` config value.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Guided breathing exercise
    ///
    /// Opens an interactive screen that walks you through a repeating
    /// inhale, hold and exhale cycle. Durations come from the config file
    /// unless overridden here.
    ///
    /// Keys: space start/stop, r reset, s save session, m sound,
    /// v vibration, ? help, q quit.
    ///
    /// # Examples
    ///
    ///   mindful breathe
    ///   mindful breathe --inhale 4 --hold 7 --exhale 8
    ///   mindful breathe --ticks 14 --save     Run one cycle instantly
    #[command(alias = "b")]
    Breathe(BreatheArgs),

    /// Mood check-ins
    ///
    /// Opens the companion screen on the mood tab. Pick a mood with the
    /// arrow keys, Enter records it, n adds a note. Tab moves between
    /// breathing, mood, journal and gratitude.
    #[command(alias = "m")]
    Mood,

    /// Write in the journal
    ///
    /// Opens the companion screen on the journal tab. a writes an entry,
    /// / searches (#tag matches a tag), arrow keys pick a mood for new
    /// entries.
    #[command(alias = "j")]
    Journal,

    /// Keep a gratitude log
    ///
    /// Opens the companion screen on the gratitude tab. a adds, e edits,
    /// d deletes. Words starting with # become tags.
    #[command(alias = "g")]
    Gratitude,

    /// Show an affirmation
    ///
    /// Shows today's affirmation, or every affirmation with --all.
    #[command(alias = "a")]
    Affirm {
        /// Show all affirmations
        #[arg(long)]
        all: bool,
    },

    /// List mental health support resources
    #[command(alias = "r")]
    Resources,

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Outputs completion script for the specified shell.
    ///
    /// Example: mindful completions bash > ~/.bash_completion.d/mindful
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Longest headless run: one day of one-second ticks.
pub const MAX_TICKS: u32 = 86_400;

/// Arguments for the breathing exercise.
#[derive(Args, Debug, Default)]
pub struct BreatheArgs {
    /// Inhale duration in seconds
    #[arg(long, short = 'i')]
    pub inhale: Option<u32>,

    /// Hold duration in seconds
    #[arg(long, short = 'H')]
    pub hold: Option<u32>,

    /// Exhale duration in seconds
    #[arg(long, short = 'e')]
    pub exhale: Option<u32>,

    /// Run this many ticks instantly without opening the screen (at most a day)
    #[arg(long, short = 't', value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_TICKS)))]
    pub ticks: Option<u32>,

    /// Save a session at the end of a --ticks run
    #[arg(long, short = 's', requires = "ticks")]
    pub save: bool,
}

/// Arguments for config management.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}
