//! Small value types used by every layer of the remapper.
//! A [`Slot`] can only ever hold `1..=9`, so code holding one never has to re-check bounds.

use crate::errors::CyclekeyError;
use std::fmt;

/// A logical numeric position, `1..=9`, naming one bindable target key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Slot(u8);

impl Slot {
	/// The lowest slot.
	pub const MIN: Slot = Slot(1);
	/// The highest slot.
	pub const MAX: Slot = Slot(9);

	/// Create a slot, if `n` is in `1..=9`.
	///
	/// ```
	/// use cyclekey_common::types::Slot;
	/// assert_eq!(Slot::new(4).map(Slot::get), Some(4));
	/// assert!(Slot::new(0).is_none());
	/// assert!(Slot::new(10).is_none());
	/// ```
	#[must_use]
	pub const fn new(n: u8) -> Option<Self> {
		if n >= Self::MIN.0 && n <= Self::MAX.0 {
			Some(Slot(n))
		} else {
			None
		}
	}

	/// The numeric value of the slot.
	#[must_use]
	pub const fn get(self) -> u8 {
		self.0
	}

	/// Zero-based position, suitable for indexing a table of nine entries.
	#[must_use]
	pub const fn index(self) -> usize {
		(self.0 - 1) as usize
	}

	/// Iterate over every slot, in ascending order.
	pub fn all() -> impl Iterator<Item = Slot> {
		(Self::MIN.0..=Self::MAX.0).map(Slot)
	}

	/// The slot after `self` within `1..=max`, wrapping to `1` once `max` is passed.
	///
	/// When `self` is already above `max`, the result is `1`.
	///
	/// ```
	/// use cyclekey_common::types::Slot;
	/// let max = Slot::new(5).unwrap();
	/// assert_eq!(Slot::new(3).unwrap().successor_within(max).get(), 4);
	/// assert_eq!(Slot::new(5).unwrap().successor_within(max).get(), 1);
	/// assert_eq!(Slot::new(8).unwrap().successor_within(max).get(), 1);
	/// ```
	#[must_use]
	pub const fn successor_within(self, max: Slot) -> Slot {
		if self.0 >= max.0 {
			Self::MIN
		} else {
			Slot(self.0 + 1)
		}
	}

	/// The slot before `self`, wrapping to `max` once `1` is passed.
	///
	/// No clamping happens when `self` is above `max`: the result is simply `self - 1`.
	///
	/// ```
	/// use cyclekey_common::types::Slot;
	/// let max = Slot::new(5).unwrap();
	/// assert_eq!(Slot::new(1).unwrap().predecessor_within(max).get(), 5);
	/// assert_eq!(Slot::new(3).unwrap().predecessor_within(max).get(), 2);
	/// ```
	#[must_use]
	pub const fn predecessor_within(self, max: Slot) -> Slot {
		if self.0 <= Self::MIN.0 {
			max
		} else {
			Slot(self.0 - 1)
		}
	}
}

impl TryFrom<u8> for Slot {
	type Error = CyclekeyError;
	fn try_from(n: u8) -> Result<Self, Self::Error> {
		Slot::new(n).ok_or(CyclekeyError::InvalidSlot(n))
	}
}

impl From<Slot> for u8 {
	fn from(slot: Slot) -> u8 {
		slot.0
	}
}

impl fmt::Display for Slot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// Which way to move through the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	/// Towards higher slots; scrolling up.
	Next,
	/// Towards lower slots; scrolling down.
	Prev,
}
