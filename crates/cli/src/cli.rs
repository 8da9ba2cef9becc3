use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "blockfeed")]
#[command(about = "Generate RSS, Atom and JSON feeds from block-structured content")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Site configuration file (JSON)
	#[arg(short, long, global = true, value_name = "FILE", default_value = "blockfeed.json")]
	pub config: PathBuf,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Build feed.xml, atom.xml and feed.json from the latest documents
	#[command(alias = "gen")]
	Generate(GenerateArgs),

	/// Print the composed content of a single document as JSON
	Preview(PreviewArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
	/// Document listing (JSON array), most recent first
	#[arg(long, value_name = "FILE")]
	pub documents: PathBuf,

	/// Directory holding one `<document-id>.json` block tree per document
	#[arg(long, value_name = "DIR")]
	pub blocks: PathBuf,

	/// Output directory for the feed files
	#[arg(short, long, value_name = "DIR", default_value = "public/rss")]
	pub out: PathBuf,

	/// Regenerate even if the feed was updated recently
	#[arg(long)]
	pub force: bool,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
	/// Document id; its block tree is read from `<blocks>/<id>.json`
	pub document_id: String,

	/// Directory holding block trees
	#[arg(long, value_name = "DIR")]
	pub blocks: PathBuf,

	/// Slug used to build the document link (defaults to the id)
	#[arg(long)]
	pub slug: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_generate_with_defaults() {
		let cli = Cli::parse_from(["blockfeed", "-vv", "generate", "--documents", "posts.json", "--blocks", "blocks"]);
		assert_eq!(cli.verbose, 2);
		assert_eq!(cli.config, PathBuf::from("blockfeed.json"));
		let Commands::Generate(args) = cli.command else {
			panic!("expected generate");
		};
		assert_eq!(args.out, PathBuf::from("public/rss"));
		assert!(!args.force);
	}

	#[test]
	fn parses_preview() {
		let cli = Cli::parse_from(["blockfeed", "preview", "abc", "--blocks", "b", "--slug", "hello", "-c", "site.json"]);
		assert_eq!(cli.config, PathBuf::from("site.json"));
		let Commands::Preview(args) = cli.command else {
			panic!("expected preview");
		};
		assert_eq!(args.document_id, "abc");
		assert_eq!(args.slug.as_deref(), Some("hello"));
	}
}
