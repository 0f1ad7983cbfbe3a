//! A Quartz event tap at the session level.
//!
//! The tap listens for key downs, modifier changes, the scroll wheel and the "other" mouse
//! buttons. Quartz numbers the side buttons 3 (back) and 4 (forward).

use core_foundation::runloop::{kCFRunLoopCommonModes, CFRunLoop};
use core_graphics::{
	event::{
		CGEvent, CGEventFlags, CGEventTap, CGEventTapLocation, CGEventTapOptions,
		CGEventTapPlacement, CGEventType, CGKeyCode, EventField,
	},
	event_source::{CGEventSource, CGEventSourceStateID},
};
use cyclekey_common::{errors::CyclekeyError, CyclekeyResult};
use rdev::{Button, Event, EventType, Key};
use std::time::SystemTime;

const CAPS_LOCK: CGKeyCode = 57;

fn key_of(code: CGKeyCode) -> Key {
	match code {
		18 => Key::Num1,
		19 => Key::Num2,
		20 => Key::Num3,
		21 => Key::Num4,
		23 => Key::Num5,
		22 => Key::Num6,
		26 => Key::Num7,
		28 => Key::Num8,
		25 => Key::Num9,
		29 => Key::Num0,
		14 => Key::KeyE,
		3 => Key::KeyF,
		CAPS_LOCK => Key::CapsLock,
		other => Key::Unknown(other.into()),
	}
}

fn keycode(event: &CGEvent) -> Option<CGKeyCode> {
	CGKeyCode::try_from(event.get_integer_value_field(EventField::KEYBOARD_EVENT_KEYCODE)).ok()
}

/// The lock itself is carried in the flags: the key "goes down" when the lock turns on.
fn caps_lock_transition(flags: CGEventFlags) -> EventType {
	if flags.contains(CGEventFlags::CGEventFlagAlphaShift) {
		EventType::KeyPress(Key::CapsLock)
	} else {
		EventType::KeyRelease(Key::CapsLock)
	}
}

fn other_button(number: i64) -> Option<EventType> {
	let button = match u8::try_from(number).ok()? {
		2 => Button::Middle,
		n => Button::Unknown(n),
	};
	Some(EventType::ButtonPress(button))
}

fn event_type_of(kind: CGEventType, event: &CGEvent) -> Option<EventType> {
	match kind {
		CGEventType::KeyDown => Some(EventType::KeyPress(key_of(keycode(event)?))),
		CGEventType::FlagsChanged if keycode(event)? == CAPS_LOCK => {
			Some(caps_lock_transition(event.get_flags()))
		}
		CGEventType::ScrollWheel => Some(EventType::Wheel {
			delta_x: event.get_integer_value_field(EventField::SCROLL_WHEEL_EVENT_DELTA_AXIS_2),
			delta_y: event.get_integer_value_field(EventField::SCROLL_WHEEL_EVENT_DELTA_AXIS_1),
		}),
		CGEventType::OtherMouseDown => {
			other_button(event.get_integer_value_field(EventField::MOUSE_EVENT_BUTTON_NUMBER))
		}
		_ => None,
	}
}

/// Create the event tap and run the current thread's run loop.
///
/// # Errors
///
/// [`CyclekeyError::Interceptor`] if the tap cannot be created, which is what happens without the
/// accessibility permission.
pub fn grab<F>(filter: F) -> CyclekeyResult<()>
where
	F: Fn(Event) -> Option<Event> + 'static,
{
	let tap = CGEventTap::new(
		CGEventTapLocation::Session,
		CGEventTapPlacement::HeadInsertEventTap,
		CGEventTapOptions::Default,
		vec![
			CGEventType::KeyDown,
			CGEventType::FlagsChanged,
			CGEventType::ScrollWheel,
			CGEventType::OtherMouseDown,
		],
		move |_proxy, kind, cg_event| {
			let event_type = event_type_of(kind, cg_event)?;
			if filter(Event { event_type, time: SystemTime::now(), name: None }).is_none() {
				// a null event is dropped by the window server
				cg_event.set_type(CGEventType::Null);
			}
			None
		},
	)
	.map_err(|()| CyclekeyError::Interceptor("the event tap could not be created".into()))?;
	let source = tap.mach_port.create_runloop_source(0).map_err(|()| {
		CyclekeyError::Interceptor("the event tap could not be added to the run loop".into())
	})?;
	let run_loop = CFRunLoop::get_current();
	// SAFETY: kCFRunLoopCommonModes is an immutable constant exported by CoreFoundation.
	run_loop.add_source(&source, unsafe { kCFRunLoopCommonModes });
	tap.enable();
	CFRunLoop::run_current();
	Ok(())
}

/// The AlphaShift flag of a fresh event carries the current lock state.
#[must_use]
pub fn caps_lock_state() -> Option<bool> {
	let source = CGEventSource::new(CGEventSourceStateID::CombinedSessionState).ok()?;
	let event = CGEvent::new(source).ok()?;
	Some(event.get_flags().contains(CGEventFlags::CGEventFlagAlphaShift))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{classify, keymap::SELECT_KEY, Action, InputEvent, State};
	use std::time::Instant;

	#[test]
	fn forward_button_runs_the_macro() {
		let mut state = State::default();
		let event_type = other_button(4).expect("Button 4 is a valid button number!");
		let event = InputEvent::from_event_type(&event_type, Instant::now());
		assert_eq!(event, InputEvent::SideButtonDown(state.buttons.forward));
		let Action::Suppress(keys) = classify(event, false, &mut state) else {
			panic!("The forward button must be swallowed!");
		};
		assert_eq!(keys, [Key::Num1, SELECT_KEY, Key::Num2]);
	}

	#[test]
	fn back_button_is_three() {
		let event_type = other_button(3).expect("Button 3 is a valid button number!");
		let event = InputEvent::from_event_type(&event_type, Instant::now());
		assert_eq!(event, InputEvent::SideButtonDown(State::default().buttons.back));
	}

	#[test]
	fn middle_button_is_not_a_side_button() {
		assert_eq!(other_button(2), Some(EventType::ButtonPress(Button::Middle)));
		assert_eq!(other_button(300), None);
	}

	#[test]
	fn caps_lock_follows_the_flag() {
		assert_eq!(
			caps_lock_transition(CGEventFlags::CGEventFlagAlphaShift),
			EventType::KeyPress(Key::CapsLock)
		);
		assert_eq!(
			caps_lock_transition(CGEventFlags::CGEventFlagNull),
			EventType::KeyRelease(Key::CapsLock)
		);
	}

	#[test]
	fn number_row_keycodes() {
		assert_eq!(key_of(18), Key::Num1);
		assert_eq!(key_of(25), Key::Num9);
		assert_eq!(key_of(0), Key::Unknown(0));
	}
}
