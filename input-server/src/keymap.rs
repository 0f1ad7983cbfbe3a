//! The fixed table relating slots to the number-row keys, plus the two letter keys typed by the
//! side-button macros.

use cyclekey_common::types::Slot;
use rdev::Key;

/// Typed when the "back" side button is pressed.
pub const BACK_KEY: Key = Key::KeyE;
/// Typed when the "forward" side button is pressed.
pub const SELECT_KEY: Key = Key::KeyF;

/// Indexed by [`Slot::index`].
const SLOT_KEYS: [Key; 9] = [
	Key::Num1,
	Key::Num2,
	Key::Num3,
	Key::Num4,
	Key::Num5,
	Key::Num6,
	Key::Num7,
	Key::Num8,
	Key::Num9,
];

/// The number-row key for a slot.
///
/// ```
/// use cyclekey_common::types::Slot;
/// use cyclekey_input_server::keymap::slot_to_code;
/// use rdev::Key;
/// assert_eq!(slot_to_code(Slot::MAX), Key::Num9);
/// ```
#[must_use]
pub fn slot_to_code(slot: Slot) -> Key {
	SLOT_KEYS[slot.index()]
}

/// The slot a key is bound to, if it is one of the nine tracked number-row keys.
/// `0` and the keypad digits are not tracked.
#[must_use]
pub fn code_to_slot(code: Key) -> Option<Slot> {
	let n = match code {
		Key::Num1 => 1,
		Key::Num2 => 2,
		Key::Num3 => 3,
		Key::Num4 => 4,
		Key::Num5 => 5,
		Key::Num6 => 6,
		Key::Num7 => 7,
		Key::Num8 => 8,
		Key::Num9 => 9,
		_ => return None,
	};
	Slot::new(n)
}
