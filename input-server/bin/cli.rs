use clap::Parser;

/// Cycle through the number keys with the scroll wheel.
///
/// Scroll up/down moves through 1-max, the back side button types 'e', and the forward side button
/// types '1', 'f', then returns to the current number. Double-tap a number key to make it the top
/// of the range. Turn Caps Lock on to scroll normally.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct CliArgs {}
