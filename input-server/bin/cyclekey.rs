#![deny(
	clippy::all,
	clippy::pedantic,
	clippy::map_unwrap_or,
	clippy::unwrap_used,
	unsafe_code
)]

mod cli;
mod logging;

use clap::Parser;
use cli::CliArgs;
use cyclekey_common::{settings::ApplicationConfig, CyclekeyResult};
use cyclekey_input_server::{banner, intercept, RdevHost, State};

#[cfg(unix)]
fn spawn_termination_signal_watcher() -> CyclekeyResult<()> {
	use signal_hook::{
		consts::{SIGINT, SIGTERM},
		iterator::Signals,
	};
	let mut signals = Signals::new([SIGINT, SIGTERM])?;
	let _ = std::thread::spawn(move || {
		if let Some(signal) = signals.forever().next() {
			tracing::info!(signal, "Goodbye, cyclekey!");
			std::process::exit(0);
		}
	});
	Ok(())
}

#[cfg(not(unix))]
fn spawn_termination_signal_watcher() -> CyclekeyResult<()> {
	Ok(())
}

fn main() -> eyre::Result<()> {
	let _args = CliArgs::parse();

	let config = ApplicationConfig::default();
	logging::init(&config)?;
	tracing::debug!(?config, "this configuration was used to prepare cyclekey");

	println!("{}", banner(&config));

	spawn_termination_signal_watcher()?;

	let state = State::new(&config);
	// This will block.
	intercept(state, RdevHost::from_system())?;
	Ok(())
}
