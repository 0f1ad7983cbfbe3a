//! Drive the public callback through a whole session, the way the grab loop would.

use std::time::{Duration, Instant, SystemTime};

use cyclekey_common::{settings::ApplicationConfig, types::Slot};
use cyclekey_input_server::{callback, Host, State};
use rdev::{Button, Event, EventType, Key};

/// A host with a manual clock and a log of injected keys.
struct FakeHost {
	caps_lock: bool,
	now: Instant,
	typed: Vec<Key>,
}

impl Host for FakeHost {
	fn caps_lock_on(&self) -> bool {
		self.caps_lock
	}
	fn now(&self) -> Instant {
		self.now
	}
	fn synthesize_key_event(&mut self, key: Key, pressed: bool) {
		// only keep the presses; releases are checked in the unit tests
		if pressed {
			self.typed.push(key);
		}
	}
	fn witness(&mut self, event_type: &EventType) {
		if let EventType::KeyPress(Key::CapsLock) = event_type {
			self.caps_lock = !self.caps_lock;
		}
	}
}

struct Session {
	state: State,
	host: FakeHost,
	config: ApplicationConfig,
}

impl Session {
	fn new() -> Self {
		let config = ApplicationConfig::default();
		Self {
			state: State::new(&config),
			host: FakeHost { caps_lock: false, now: Instant::now(), typed: Vec::new() },
			config,
		}
	}
	/// Returns `true` if the event was passed through.
	fn send(&mut self, event_type: EventType) -> bool {
		let event = Event { event_type, time: SystemTime::now(), name: None };
		self.host.now += Duration::from_millis(30);
		callback(event, &mut self.state, &mut self.host).is_some()
	}
	fn tap(&mut self, key: Key) -> bool {
		let passed = self.send(EventType::KeyPress(key));
		self.send(EventType::KeyRelease(key));
		passed
	}
	fn scroll(&mut self, delta_y: i64) -> bool {
		self.send(EventType::Wheel { delta_x: 0, delta_y })
	}
	fn click(&mut self, button: u8) -> bool {
		let passed = self.send(EventType::ButtonPress(Button::Unknown(button)));
		self.send(EventType::ButtonRelease(Button::Unknown(button)));
		passed
	}
	fn wait(&mut self, ms: u64) {
		self.host.now += Duration::from_millis(ms);
	}
	fn typed(&mut self) -> Vec<Key> {
		std::mem::take(&mut self.host.typed)
	}
}

#[test]
fn scroll_from_default_selection() {
	let mut s = Session::new();
	assert!(!s.scroll(1));
	assert!(!s.scroll(1));
	assert!(!s.scroll(-1));
	assert_eq!(s.typed(), [Key::Num3, Key::Num4, Key::Num3]);
}

#[test]
fn double_tap_narrows_the_cycle() {
	let mut s = Session::new();
	assert!(s.tap(Key::Num3));
	assert!(s.tap(Key::Num3));
	assert_eq!(s.state.cycle.max(), Slot::new(3).expect("Valid slot!"));
	for _ in 0..4 {
		s.scroll(1);
	}
	assert_eq!(s.typed(), [Key::Num1, Key::Num2, Key::Num3, Key::Num1]);

	// widen it again
	s.wait(1_000);
	s.tap(Key::Num9);
	s.tap(Key::Num9);
	s.scroll(1);
	assert_eq!(s.typed(), [Key::Num1]);
	assert_eq!(s.state.cycle.max(), Slot::MAX);
}

#[test]
fn alternating_keys_are_not_double_taps() {
	let mut s = Session::new();
	s.tap(Key::Num2);
	s.tap(Key::Num5);
	s.tap(Key::Num2);
	assert_eq!(s.state.cycle.max(), Slot::MAX);
	assert_eq!(s.state.cycle.current(), Slot::new(2).expect("Valid slot!"));
}

#[test]
fn side_buttons() {
	let mut s = Session::new();
	let (back, forward) = (s.config.buttons.back, s.config.buttons.forward);
	assert!(!s.click(back));
	assert_eq!(s.typed(), [Key::KeyE]);

	s.tap(Key::Num6);
	assert!(!s.click(forward));
	assert_eq!(s.typed(), [Key::Num1, Key::KeyF, Key::Num6]);

	s.tap(Key::Num1);
	assert!(!s.click(forward));
	assert_eq!(s.typed(), [Key::KeyF]);

	assert!(s.click(back.wrapping_add(100)));
	assert!(s.typed().is_empty());
}

#[test]
fn caps_lock_toggles_the_wheel() {
	let mut s = Session::new();
	assert!(s.tap(Key::CapsLock));
	assert!(s.scroll(1));
	assert!(s.scroll(-1));
	assert!(s.typed().is_empty());
	// buttons keep working
	let back = s.config.buttons.back;
	assert!(!s.click(back));
	assert_eq!(s.typed(), [Key::KeyE]);

	s.tap(Key::CapsLock);
	assert!(!s.scroll(1));
	assert_eq!(s.typed(), [Key::Num3]);
}

#[test]
fn horizontal_scroll_passes_through() {
	let mut s = Session::new();
	assert!(s.send(EventType::Wheel { delta_x: 5, delta_y: 0 }));
	assert!(s.typed().is_empty());
}
