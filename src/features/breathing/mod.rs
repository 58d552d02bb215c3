//! Guided breathing.
//!
//! A repeating inhale/hold/exhale cycle:
//! - Configurable phase durations
//! - One-second ticks from an external clock
//! - Start/stop/reset with stop preserving position
//! - Saved session history

pub mod controller;
pub mod history;
pub mod phase;
pub mod run;
pub mod ticker;

pub use controller::{BreathingController, CueSink, NoCues, Snapshot, Transition};
pub use history::{SessionHistory, SessionRecord};
pub use phase::{Phase, PhaseConfig};
pub use run::{simulate, BreathingRun, TimedTransition};
pub use ticker::{Ticker, TICK_PERIOD};
