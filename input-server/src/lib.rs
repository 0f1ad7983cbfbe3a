//! `cyclekey-input-server`
//!
//! Library holding the state machine of the cyclekey input remapper.
//! The scroll wheel cycles through the number-row keys `1` to `max`, the mouse side buttons type
//! `E` or run a select-and-return macro, and double-tapping a number key changes `max`.
//!
//! Events are intercepted by the backend in [`platform`]; [`callback`] decides, for every event, whether
//! to pass it through or swallow it and type replacement keys instead.

#![deny(
	clippy::all,
	clippy::pedantic,
	missing_docs,
	clippy::perf,
	clippy::complexity,
	clippy::style,
	rustdoc::all,
	clippy::print_stdout,
	clippy::print_stderr
)]


#[cfg(test)]
mod proptests;

pub mod action;
pub mod cycle;
pub mod double_tap;
pub mod events;
pub mod host;
pub mod keymap;
pub mod platform;
pub mod synth;

pub use action::{Action, KeySequence};
pub use cycle::CycleState;
pub use double_tap::DoubleTapDetector;
pub use events::InputEvent;
pub use host::{intercept, Host, RdevHost};

use cyclekey_common::{
	settings::{cycle::CycleSettings, input::ButtonSettings, ApplicationConfig},
	types::{Direction, Slot},
};
use keymap::{code_to_slot, slot_to_code, BACK_KEY, SELECT_KEY};
use rdev::Event;

use std::cmp::Ordering;

/// The primary holder of state for the remapper.
/// Owned by whoever drives the input callback, and only ever touched from inside it.
#[derive(Debug, Clone)]
pub struct State {
	/// Current selection and range.
	pub cycle: CycleState,
	/// Watches the number keys for double-taps.
	pub double_tap: DoubleTapDetector,
	/// Which mouse buttons are the side buttons.
	pub buttons: ButtonSettings,
}

impl State {
	/// Build the startup state from the configuration.
	#[must_use]
	pub fn new(config: &ApplicationConfig) -> Self {
		Self {
			cycle: CycleState::from(&config.cycle),
			double_tap: DoubleTapDetector::new(config.cycle.double_tap_threshold),
			buttons: config.buttons,
		}
	}
}

impl Default for State {
	fn default() -> Self {
		Self::new(&ApplicationConfig::default())
	}
}

/// Decide what to do with one event, updating `state` along the way.
///
/// - Number keys are never consumed; they select their slot, and a double-tap also makes that
///   slot the top of the range.
/// - The scroll wheel moves through the range and types the newly selected key, unless Caps Lock
///   is on.
/// - The back button types [`BACK_KEY`]. The forward button types `1`, [`SELECT_KEY`], then the
///   current slot's key, returning to where it started; on slot `1` it types only
///   [`SELECT_KEY`].
///
/// Everything else passes through.
pub fn classify(event: InputEvent, caps_lock_on: bool, state: &mut State) -> Action {
	match event {
		InputEvent::KeyDown { key, at } => {
			if let Some(slot) = code_to_slot(key) {
				if state.double_tap.observe(key, at) {
					state.cycle.set_max(slot);
					tracing::info!(max = %slot, "Max cycle range set to 1-{slot}");
				}
				state.cycle.set_current(slot);
			}
			Action::PassThrough
		}
		InputEvent::ScrollWheel { .. } if caps_lock_on => Action::PassThrough,
		InputEvent::ScrollWheel { delta } => {
			let direction = match delta.cmp(&0) {
				Ordering::Greater => Direction::Next,
				Ordering::Less => Direction::Prev,
				// horizontal scrolling
				Ordering::Equal => return Action::PassThrough,
			};
			let slot = state.cycle.advance(direction);
			Action::Suppress(KeySequence::single(slot_to_code(slot)))
		}
		InputEvent::SideButtonDown(id) if id == state.buttons.back => {
			Action::Suppress(KeySequence::single(BACK_KEY))
		}
		InputEvent::SideButtonDown(id) if id == state.buttons.forward => {
			let current = state.cycle.current();
			if current == Slot::MIN {
				Action::Suppress(KeySequence::single(SELECT_KEY))
			} else {
				Action::Suppress(KeySequence::triple(
					slot_to_code(Slot::MIN),
					SELECT_KEY,
					slot_to_code(current),
				))
			}
		}
		InputEvent::SideButtonDown(_) | InputEvent::Other => Action::PassThrough,
	}
}

/// The callback function to call for every intercepted event.
/// Returns [`None`] to indicate a desire to swallow an event,
/// Returns `Some(event)` to indicate a passthrough of the event.
///
/// Any replacement keys are typed through `host` before returning.
pub fn callback<H: Host + ?Sized>(event: Event, state: &mut State, host: &mut H) -> Option<Event> {
	host.witness(&event.event_type);
	let input = InputEvent::from_event_type(&event.event_type, host.now());
	// Caps Lock only gates the scroll wheel
	let caps_lock_on = matches!(input, InputEvent::ScrollWheel { .. }) && host.caps_lock_on();
	match classify(input, caps_lock_on, state) {
		Action::PassThrough => Some(event),
		Action::Suppress(keys) => {
			tracing::trace!(?keys, "Replacing {:?}", event.event_type);
			synth::play(host, &keys);
			None
		}
	}
}

/// The status text shown at startup: what each binding does, and the starting selection.
#[must_use]
pub fn banner(config: &ApplicationConfig) -> String {
	let CycleSettings { initial_index, max_index, .. } = config.cycle;
	format!(
		"Starting cyclekey...
1. Scroll wheel  : cycles 1-{max_index} (disabled while Caps Lock is on)
2. Side 1 (back) : 'e'
3. Side 2 (fwd)  : 'f' (returns to the current slot)
4. Double tap #  : sets the max cycle range
   Default slot  : {initial_index}"
	)
}
