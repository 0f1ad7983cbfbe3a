//! Logging settings.

/// Structure used for all the configurable options related to logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
	/// A filter directive, in the syntax of `tracing_subscriber::EnvFilter`.
	pub level: String,
}
impl Default for LogSettings {
	fn default() -> Self {
		Self { level: "info".to_owned() }
	}
}
