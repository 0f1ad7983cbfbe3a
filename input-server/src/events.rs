//! The slice of the host's input stream the classifier cares about.

use rdev::{Button, EventType, Key};
use std::time::Instant;

/// An intercepted input event, reduced to the data the classifier needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
	/// A key went down.
	KeyDown {
		/// Which key.
		key: Key,
		/// When, on a monotonic clock.
		at: Instant,
	},
	/// The wheel moved.
	ScrollWheel {
		/// Vertical movement; positive is away from the user. `0` for purely horizontal scrolls.
		delta: i64,
	},
	/// An auxiliary mouse button went down, identified by its platform button number.
	SideButtonDown(u8),
	/// Anything else: releases, motion, the primary buttons.
	Other,
}

impl InputEvent {
	/// Convert a raw [`EventType`], stamping key events with `at`.
	///
	/// ```
	/// use cyclekey_input_server::events::InputEvent;
	/// use rdev::{Button, EventType};
	/// use std::time::Instant;
	/// let now = Instant::now();
	/// assert_eq!(
	///   InputEvent::from_event_type(&EventType::Wheel { delta_x: 3, delta_y: 0 }, now),
	///   InputEvent::ScrollWheel { delta: 0 },
	/// );
	/// assert_eq!(
	///   InputEvent::from_event_type(&EventType::ButtonPress(Button::Left), now),
	///   InputEvent::Other,
	/// );
	/// ```
	#[must_use]
	pub fn from_event_type(event_type: &EventType, at: Instant) -> Self {
		match *event_type {
			EventType::KeyPress(key) => Self::KeyDown { key, at },
			EventType::Wheel { delta_y, .. } => Self::ScrollWheel { delta: delta_y },
			EventType::ButtonPress(Button::Unknown(id)) => Self::SideButtonDown(id),
			_ => Self::Other,
		}
	}
}
