//! The boundary with the operating system's input pipeline.
//!
//! Everything with a side effect or a dependency on the outside world sits behind [`Host`], so
//! the classifier can be driven by tests without grabbing real devices.

use crate::{callback, platform, State};
use cyclekey_common::CyclekeyResult;
use rdev::{EventType, Key};
use std::{cell::RefCell, time::Instant};

/// Services the remapper needs from the platform.
pub trait Host {
	/// If Caps Lock is currently on.
	fn caps_lock_on(&self) -> bool;
	/// The current time on a monotonic clock.
	fn now(&self) -> Instant;
	/// Inject a single key transition into the system input stream.
	/// Failures are not reported back.
	fn synthesize_key_event(&mut self, key: Key, pressed: bool);
	/// Called with every intercepted event before it is classified.
	fn witness(&mut self, _event_type: &EventType) {}
}

/// The production [`Host`]: keys are typed with [`rdev::simulate`].
///
/// Caps Lock is read from the system once, when the host is created, and then followed from the
/// key events this host witnesses.
#[derive(Debug)]
pub struct RdevHost {
	caps_lock: bool,
	#[cfg_attr(target_os = "macos", allow(dead_code))]
	caps_held: bool,
}

impl RdevHost {
	/// Create a host seeded with the system's current Caps Lock state.
	/// If the platform cannot report it, the lock is assumed off.
	#[must_use]
	pub fn from_system() -> Self {
		let caps_lock = platform::caps_lock_state();
		if caps_lock.is_none() {
			tracing::warn!("Could not read the Caps Lock state, assuming it is off");
		}
		tracing::debug!(?caps_lock, "Caps Lock state at startup");
		Self::with_caps_lock(caps_lock.unwrap_or(false))
	}
	/// Create a host with a known initial Caps Lock state.
	#[must_use]
	pub fn with_caps_lock(on: bool) -> Self {
		Self { caps_lock: on, caps_held: false }
	}
}

impl Host for RdevHost {
	fn caps_lock_on(&self) -> bool {
		self.caps_lock
	}
	fn now(&self) -> Instant {
		Instant::now()
	}
	fn synthesize_key_event(&mut self, key: Key, pressed: bool) {
		let event_type =
			if pressed { EventType::KeyPress(key) } else { EventType::KeyRelease(key) };
		if let Err(error) = rdev::simulate(&event_type) {
			tracing::debug!(?error, ?event_type, "Could not synthesize key event");
		}
	}
	// Quartz reports Caps Lock as a modifier flag: "press" when the lock turns on and "release"
	// when it turns off.
	#[cfg(target_os = "macos")]
	fn witness(&mut self, event_type: &EventType) {
		match event_type {
			EventType::KeyPress(Key::CapsLock) => self.caps_lock = true,
			EventType::KeyRelease(Key::CapsLock) => self.caps_lock = false,
			_ => {}
		}
	}
	// Elsewhere every physical press toggles the lock; auto-repeat must not.
	#[cfg(not(target_os = "macos"))]
	fn witness(&mut self, event_type: &EventType) {
		match event_type {
			EventType::KeyPress(Key::CapsLock) if !self.caps_held => {
				self.caps_held = true;
				self.caps_lock = !self.caps_lock;
			}
			EventType::KeyRelease(Key::CapsLock) => self.caps_held = false,
			_ => {}
		}
	}
}

/// Register the global interceptor and process events until the process exits.
/// Events come from the backend in [`crate::platform`].
///
/// This will block. It only returns if the interceptor could not be registered, usually because
/// of missing privileges.
///
/// # Errors
///
/// [`cyclekey_common::errors::CyclekeyError::Interceptor`] if the platform refuses the grab.
pub fn intercept<H>(state: State, host: H) -> CyclekeyResult<()>
where
	H: Host + 'static,
{
	let remapper = RefCell::new((state, host));
	platform::grab(move |event| {
		// the host serializes deliveries; a held borrow can only mean re-entrant delivery
		let Ok(mut guard) = remapper.try_borrow_mut() else {
			return Some(event);
		};
		let (state, host) = &mut *guard;
		callback(event, state, host)
	})
}
