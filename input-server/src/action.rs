//! What to do with an intercepted event.

use rdev::Key;
use std::fmt;

const MAX_KEYS: usize = 3;

/// A short, fixed-capacity list of keys to type, stored inline so that building one inside the
/// input callback never allocates.
#[derive(Clone, Copy)]
pub struct KeySequence {
	keys: [Key; MAX_KEYS],
	len: usize,
}

impl KeySequence {
	/// A single key.
	#[must_use]
	pub const fn single(key: Key) -> Self {
		Self { keys: [key; MAX_KEYS], len: 1 }
	}

	/// Three keys, typed in the order given.
	#[must_use]
	pub const fn triple(first: Key, second: Key, third: Key) -> Self {
		Self { keys: [first, second, third], len: 3 }
	}

	/// The keys, in the order they are typed.
	#[must_use]
	pub fn as_slice(&self) -> &[Key] {
		&self.keys[..self.len]
	}
}

impl fmt::Debug for KeySequence {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		self.as_slice().fmt(fmt)
	}
}

impl PartialEq for KeySequence {
	fn eq(&self, other: &Self) -> bool {
		self.as_slice() == other.as_slice()
	}
}

impl<const N: usize> PartialEq<[Key; N]> for KeySequence {
	fn eq(&self, other: &[Key; N]) -> bool {
		self.as_slice() == other
	}
}

impl<'a> IntoIterator for &'a KeySequence {
	type IntoIter = std::slice::Iter<'a, Key>;
	type Item = &'a Key;
	fn into_iter(self) -> Self::IntoIter {
		self.as_slice().iter()
	}
}

/// The outcome of classifying one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
	/// Let the event continue down the input pipeline untouched.
	PassThrough,
	/// Swallow the event, then type the given keys.
	Suppress(KeySequence),
}
