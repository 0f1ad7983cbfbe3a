//! Logging with the [`tracing`] crate.
//!
//! Output goes to stdout next to the startup banner.

use std::io;

use cyclekey_common::settings::ApplicationConfig;
use tracing_error::ErrorLayer;
use tracing_subscriber::{prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

/// Initialise the logging stack.
/// This requires an application configuration structure, so configuration must be initialized before logging is.
pub fn init(config: &ApplicationConfig) -> eyre::Result<()> {
	let env_filter = EnvFilter::try_new(&config.log.level)?;
	let tree = HierarchicalLayer::new(4)
		.with_bracketed_fields(true)
		.with_targets(true)
		.with_indent_lines(true)
		.with_writer(io::stdout);
	tracing_subscriber::registry()
		.with(env_filter)
		.with(ErrorLayer::default())
		.with(tree)
		.try_init()?;
	Ok(())
}
