//! Mouse button settings.

/// Platform button numbers for the two side buttons, as the input backend reports them.
///
/// - macOS: Quartz numbers the back and forward buttons 3 and 4.
/// - Linux: `BTN_SIDE` and `BTN_EXTRA` are reported as 8 and 9, the numbers X11 gives them.
/// - Windows: `XBUTTON1` and `XBUTTON2` are reported as 1 and 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSettings {
	/// The "back" side button; types `E`.
	pub back: u8,
	/// The "forward" side button; runs the select-and-return macro.
	pub forward: u8,
}

#[cfg(target_os = "macos")]
impl Default for ButtonSettings {
	fn default() -> Self {
		Self { back: 3, forward: 4 }
	}
}

#[cfg(target_os = "windows")]
impl Default for ButtonSettings {
	fn default() -> Self {
		Self { back: 1, forward: 2 }
	}
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
impl Default for ButtonSettings {
	fn default() -> Self {
		Self { back: 8, forward: 9 }
	}
}
