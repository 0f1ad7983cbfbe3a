//! The selection cycle.

use cyclekey_common::{
	settings::cycle::CycleSettings,
	types::{Direction, Slot},
};

/// The current selection and the top of the range it cycles through.
///
/// [`Self::set_max`] does not clamp the current selection. If it leaves `current` above `max`,
/// the state stays that way until the next [`Self::advance`] with [`Direction::Next`], which wraps
/// to `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleState {
	current: Slot,
	max: Slot,
}

impl CycleState {
	/// Create a cycle; no relation between `current` and `max` is enforced.
	#[must_use]
	pub fn new(current: Slot, max: Slot) -> Self {
		Self { current, max }
	}

	/// The current selection.
	#[must_use]
	pub fn current(&self) -> Slot {
		self.current
	}

	/// The top of the cycling range.
	#[must_use]
	pub fn max(&self) -> Slot {
		self.max
	}

	/// Move one step in `direction`, wrapping around `1..=max`, and return the new selection.
	pub fn advance(&mut self, direction: Direction) -> Slot {
		self.current = match direction {
			Direction::Next => self.current.successor_within(self.max),
			Direction::Prev => self.current.predecessor_within(self.max),
		};
		self.current
	}

	/// Select a slot directly.
	pub fn set_current(&mut self, slot: Slot) {
		self.current = slot;
	}

	/// Change the top of the range.
	pub fn set_max(&mut self, slot: Slot) {
		self.max = slot;
	}
}

impl From<&CycleSettings> for CycleState {
	fn from(settings: &CycleSettings) -> Self {
		Self::new(settings.initial_index, settings.max_index)
	}
}
