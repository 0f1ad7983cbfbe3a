//! Cycle range and double-tap timing.

use crate::types::Slot;
use std::time::Duration;

/// Two presses of the same numeric key closer together than this are a double-tap.
pub const DOUBLE_TAP_THRESHOLD: Duration = Duration::from_millis(250);

/// The selection the daemon starts on.
pub const INITIAL_INDEX: Slot = match Slot::new(2) {
	Some(slot) => slot,
	None => Slot::MIN,
};

/// Settings for the slot cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSettings {
	/// The selection at startup; see [`INITIAL_INDEX`].
	pub initial_index: Slot,
	/// The top of the cycling range at startup.
	pub max_index: Slot,
	/// See [`DOUBLE_TAP_THRESHOLD`].
	pub double_tap_threshold: Duration,
}

impl Default for CycleSettings {
	fn default() -> Self {
		Self {
			initial_index: INITIAL_INDEX,
			max_index: Slot::MAX,
			double_tap_threshold: DOUBLE_TAP_THRESHOLD,
		}
	}
}
