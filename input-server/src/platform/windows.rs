use cyclekey_common::{errors::CyclekeyError, CyclekeyResult};
use rdev::Event;
use winapi::um::winuser::{GetKeyState, VK_CAPITAL};

/// Install the low-level hooks through [`rdev::grab`].
/// `WM_XBUTTONDOWN` arrives as `Button::Unknown(1)` for back and `Button::Unknown(2)` for forward.
///
/// # Errors
///
/// [`CyclekeyError::Interceptor`] if the hooks could not be installed.
pub fn grab<F>(filter: F) -> CyclekeyResult<()>
where
	F: Fn(Event) -> Option<Event> + 'static,
{
	rdev::grab(filter).map_err(|error| CyclekeyError::Interceptor(format!("{error:?}")))
}

/// The low bit of the Caps Lock key state is its toggle.
#[must_use]
pub fn caps_lock_state() -> Option<bool> {
	// SAFETY: GetKeyState only reads the calling thread's key state table.
	let state = unsafe { GetKeyState(VK_CAPITAL) };
	Some(state & 1 != 0)
}
