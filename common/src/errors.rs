//! # Errors
//!
//! Error types for the cyclekey components.
//! The classification core itself cannot fail; everything here happens either while building a
//! value from untrusted numbers or while starting up.

use thiserror::Error;

/// The common cyclekey error type.
/// This is specifically typed as a `#[non_exhaustive]` enum so that adding a new variant of error type does not cause an API break.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CyclekeyError {
	/// A number outside `1..=9` was used where a [`crate::types::Slot`] was expected.
	#[error("slot {0} is outside of the range 1-9")]
	InvalidSlot(u8),
	/// The global input interceptor could not be registered.
	/// This usually means the process lacks the privilege to observe input system-wide.
	/// The platform error is preserved as a string, since it does not implement [`std::error::Error`].
	#[error("failed to register the global input interceptor (are you running with enough privilege?): {0}")]
	Interceptor(String),
	/// Installing the termination signal handler failed.
	#[error("failed to install the signal handler")]
	Signal(#[from] std::io::Error),
}
