//! Double-tap detection for the number keys.

use rdev::Key;
use std::time::{Duration, Instant};

/// Detects two presses of the same key within a time window.
///
/// Only the most recent press is remembered, and it is overwritten on every call to
/// [`Self::observe`]; nothing ever clears it. A press of another key in between therefore breaks
/// the pair: `1`, `2`, `1` in quick succession is not a double-tap of `1`.
#[derive(Debug, Clone)]
pub struct DoubleTapDetector {
	last: Option<(Key, Instant)>,
	threshold: Duration,
}

impl DoubleTapDetector {
	/// A detector with no prior press recorded.
	#[must_use]
	pub fn new(threshold: Duration) -> Self {
		Self { last: None, threshold }
	}

	/// Record a press of `code` at `now`.
	/// Returns `true` if the previous press was the same key, strictly less than the threshold
	/// ago.
	pub fn observe(&mut self, code: Key, now: Instant) -> bool {
		let double = match self.last {
			Some((last_code, at)) => {
				last_code == code
					&& now.saturating_duration_since(at) < self.threshold
			}
			None => false,
		};
		self.last = Some((code, now));
		double
	}
}

#[cfg(test)]
impl DoubleTapDetector {
	/// The key and time of the most recent press, if any.
	pub(crate) fn last(&self) -> Option<(Key, Instant)> {
		self.last
	}

	/// The window two presses must fall within.
	pub(crate) fn threshold(&self) -> Duration {
		self.threshold
	}
}
