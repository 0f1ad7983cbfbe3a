//! Typing keys through the [`Host`].
//!
//! Each key is sent as a press immediately followed by its release. Nothing here sleeps: this
//! runs inside the input callback, and the host disables slow interceptors.

use crate::{action::KeySequence, host::Host};
use rdev::Key;

/// Type one key: press, then release.
pub fn tap<H: Host + ?Sized>(host: &mut H, key: Key) {
	host.synthesize_key_event(key, true);
	host.synthesize_key_event(key, false);
}

/// Type every key of `keys`, in order.
pub fn play<H: Host + ?Sized>(host: &mut H, keys: &KeySequence) {
	for &key in keys {
		tap(host, key);
	}
}
