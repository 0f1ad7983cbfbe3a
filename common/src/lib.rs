#![deny(
	clippy::all,
	clippy::pedantic,
	clippy::cargo,
	clippy::map_unwrap_or,
	clippy::unwrap_used,
	missing_docs,
	unsafe_code
)]

//! # `cyclekey-common`
//!
//! Types shared between the cyclekey crates which carry no platform dependency:
//! the validated [`types::Slot`], the cycling [`types::Direction`], errors, and the compiled-in
//! settings.

pub mod errors;
pub mod settings;
pub mod types;

/// A result type that is generally quicker to write when using `Result<T, CyclekeyError>`.
pub type CyclekeyResult<T> = Result<T, errors::CyclekeyError>;
