use std::time::{Duration, Instant};

use cyclekey_common::{
	settings::cycle::DOUBLE_TAP_THRESHOLD,
	types::{Direction, Slot},
};
use proptest::prelude::*;
use rdev::{Button, Event, EventType, Key};

use crate::{
	callback, classify,
	keymap::{slot_to_code, SELECT_KEY},
	tests::{EventFromEventType, RecordingHost},
	Action, CycleState, DoubleTapDetector, InputEvent, State,
};

/// An operation a [`CycleState`] can be put through.
#[derive(Debug, Clone, Copy)]
enum Op {
	Advance(Direction),
	SetCurrent(Slot),
	SetMax(Slot),
}

fn slot() -> impl Strategy<Value = Slot> {
	(1u8..=9).prop_map(|n| Slot::new(n).expect("Strategy only yields valid slots!"))
}

fn direction() -> impl Strategy<Value = Direction> {
	prop_oneof![Just(Direction::Next), Just(Direction::Prev)]
}

fn op() -> impl Strategy<Value = Op> {
	prop_oneof![
		direction().prop_map(Op::Advance),
		slot().prop_map(Op::SetCurrent),
		slot().prop_map(Op::SetMax),
	]
}

fn cycle() -> impl Strategy<Value = CycleState> {
	(slot(), slot()).prop_map(|(current, max)| CycleState::new(current, max))
}

fn number_key() -> impl Strategy<Value = Key> {
	slot().prop_map(slot_to_code)
}

fn apply(cycle: &mut CycleState, op: Op) {
	match op {
		Op::Advance(direction) => {
			cycle.advance(direction);
		}
		Op::SetCurrent(slot) => cycle.set_current(slot),
		Op::SetMax(slot) => cycle.set_max(slot),
	}
}

/// Any event that reaches the callback with a given host state.
fn event_type() -> impl Strategy<Value = EventType> {
	prop_oneof![
		number_key().prop_map(EventType::KeyPress),
		number_key().prop_map(EventType::KeyRelease),
		Just(EventType::KeyPress(Key::KeyA)),
		Just(EventType::KeyPress(Key::CapsLock)),
		any::<i64>().prop_map(|delta_y| EventType::Wheel { delta_x: 0, delta_y }),
		any::<u8>().prop_map(|id| EventType::ButtonPress(Button::Unknown(id))),
		Just(EventType::ButtonPress(Button::Left)),
	]
}

proptest! {
	#[test]
	fn next_always_lands_in_range(
		mut cycle in cycle(),
		ops in prop::collection::vec(op(), 0..64),
	) {
		for op in ops {
			apply(&mut cycle, op);
		}
		let landed = cycle.advance(Direction::Next);
		prop_assert!(landed <= cycle.max(), "{landed} is above max {}", cycle.max());
	}

	#[test]
	fn full_cycle_returns_to_start(
		max in slot(),
		start in slot(),
		direction in direction(),
	) {
		prop_assume!(start <= max);
		let mut cycle = CycleState::new(start, max);
		for _ in 0..max.get() {
			cycle.advance(direction);
		}
		prop_assert_eq!(cycle.current(), start);
	}

	#[test]
	fn double_tap_window(
		key in number_key(),
		other in number_key(),
		gap_ms in 0u64..1_000,
	) {
		let t = Instant::now();
		let gap = Duration::from_millis(gap_ms);
		let mut same = DoubleTapDetector::new(DOUBLE_TAP_THRESHOLD);
		same.observe(key, t);
		prop_assert_eq!(same.observe(key, t + gap), gap < DOUBLE_TAP_THRESHOLD);

		prop_assume!(key != other);
		let mut different = DoubleTapDetector::new(DOUBLE_TAP_THRESHOLD);
		different.observe(key, t);
		prop_assert!(!different.observe(other, t + gap));
	}

	#[test]
	fn caps_lock_never_touches_scroll(
		cycle in cycle(),
		delta in any::<i64>(),
	) {
		let mut state = State::default();
		state.cycle = cycle;
		prop_assert_eq!(classify(InputEvent::ScrollWheel { delta }, true, &mut state), Action::PassThrough);
		prop_assert_eq!(state.cycle, cycle);
	}

	#[test]
	fn forward_macro_returns_to_current(cycle in cycle()) {
		let mut state = State::default();
		state.cycle = cycle;
		let event = InputEvent::SideButtonDown(state.buttons.forward);
		let Action::Suppress(keys) = classify(event, false, &mut state) else {
			return Err(TestCaseError::fail("Forward button was not suppressed!"));
		};
		prop_assert_eq!(state.cycle, cycle, "The macro changed the selection!");
		let current = slot_to_code(cycle.current());
		if cycle.current() == Slot::MIN {
			prop_assert_eq!(keys, [SELECT_KEY]);
		} else {
			prop_assert_eq!(keys, [slot_to_code(Slot::MIN), SELECT_KEY, current]);
		}
	}

	#[test]
	fn callback_injects_only_when_swallowing(
		event_types in prop::collection::vec(event_type(), 0..64),
		caps_lock in any::<bool>(),
	) {
		let mut state = State::default();
		let mut host = RecordingHost::new();
		host.caps_lock = caps_lock;
		for event_type in event_types {
			let before = host.injected.len();
			let passed = callback(Event::from_event_type(event_type), &mut state, &mut host);
			let injected = &host.injected[before..];
			if passed.is_some() {
				prop_assert!(injected.is_empty());
			} else {
				prop_assert!(!injected.is_empty());
				// every key is pressed and then released
				for pair in injected.chunks(2) {
					prop_assert_eq!(pair.len(), 2);
					prop_assert_eq!(pair[0].0, pair[1].0);
					prop_assert!(pair[0].1 && !pair[1].1);
				}
			}
			host.sleep(Duration::from_millis(40));
		}
	}
}
