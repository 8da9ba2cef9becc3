//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `RUST_LOG` overrides the verbosity flag.
pub fn init_logging(verbosity: u8) {
	let level = match verbosity {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("blockfeed={level}")));

	if let Err(err) = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init() {
		eprintln!("blockfeed: failed to install log subscriber: {err}");
	}
}
