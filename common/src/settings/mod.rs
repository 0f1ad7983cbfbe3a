//! Compiled-in configuration.
//!
//! cyclekey reads no configuration file and no environment: every tunable lives here with its
//! default, and [`ApplicationConfig::default`] is what the daemon runs with.

pub mod cycle;
pub mod input;
pub mod log;

use cycle::CycleSettings;
use input::ButtonSettings;
use log::LogSettings;

/// Type representing a *read-only* view of the cyclekey configuration.
/// Contains a section for each part of the daemon it controls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationConfig {
	/// Cycling range and double-tap timing.
	pub cycle: CycleSettings,
	/// Which auxiliary mouse buttons trigger the macros.
	pub buttons: ButtonSettings,
	/// Logging verbosity.
	pub log: LogSettings,
}
