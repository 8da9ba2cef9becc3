//! Command dispatch.

mod generate;
mod preview;

use anyhow::{Context, Result};
use blockfeed::ConfigFile;
use serde::Serialize;

use crate::cli::{Cli, Commands};

/// Result envelope printed to stdout by every command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult<T: Serialize> {
	pub ok: bool,
	pub command: &'static str,
	pub data: T,
}

pub async fn dispatch(cli: Cli) -> Result<()> {
	let config = ConfigFile::load(&cli.config).with_context(|| format!("loading configuration {}", cli.config.display()))?;

	match cli.command {
		Commands::Generate(args) => generate::run(&config, args).await,
		Commands::Preview(args) => preview::run(&config, args).await,
	}
}

pub(crate) fn print_result<T: Serialize>(command: &'static str, data: T) -> Result<()> {
	let result = CommandResult { ok: true, command, data };
	println!("{}", serde_json::to_string_pretty(&result)?);
	Ok(())
}
