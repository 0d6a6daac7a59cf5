//! Structured logging setup for the `photogrid` binary.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! left to the embedder. [`initialize`] is the subscriber the command line
//! front-end uses.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "PHOTOGRID_LOG";

/// Map the number of `-v` flags to a default filter directive.
#[must_use]
pub fn default_directive(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

/// Install a stderr subscriber.
///
/// Explicit `-v` flags win over [`LOG_ENV`]; without them the environment
/// filter applies, falling back to warnings only. Installing twice is a no-op.
pub fn initialize(verbosity: u8) {
	let filter = if verbosity > 0 {
		EnvFilter::new(default_directive(verbosity))
	} else {
		EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(0)))
	};

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}
