//! Where intercepted events come from.
//!
//! Each backend exposes the same two functions:
//!
//! - `grab` registers a system-wide interceptor and hands every event it can represent to a
//!   filter. Returning [`None`] from the filter swallows the event. It blocks for the life of the
//!   process.
//! - `caps_lock_state` reads the lock state from the system, when the platform can tell.
//!
//! `rdev`'s own grab does not report the mouse side buttons on Linux or macOS, so those two
//! platforms read the devices themselves. Windows reports them through `rdev` as buttons 1 and 2.

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
pub use linux::{caps_lock_state, grab, BUTTON_EXTRA, BUTTON_SIDE};

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub use macos::{caps_lock_state, grab};

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
pub use windows::{caps_lock_state, grab};
