use anyhow::{Context, Result};
use blockfeed::output::{RSS_FILE, is_recently_updated};
use blockfeed::{Channel, ConfigFile, DirectoryProvider, Feed, FeedPipeline};
use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};

use crate::cli::GenerateArgs;
use crate::commands::print_result;
use crate::input::load_documents;

pub async fn run(config: &ConfigFile, args: GenerateArgs) -> Result<()> {
	let site = config.site_config().context("resolving site configuration")?;

	let rss_path = args.out.join(RSS_FILE);
	if !args.force && is_recently_updated(&rss_path, config.feed.refresh_interval()) {
		info!(target = "blockfeed.cli", path = %rss_path.display(), "feed is fresh; skipping");
		return print_result("generate", json!({ "skipped": true, "reason": "fresh", "path": rss_path }));
	}

	let documents = load_documents(&args.documents)?;
	info!(target = "blockfeed.cli", path = %rss_path.display(), documents = documents.len(), "generating feeds");

	let provider = DirectoryProvider::new(&args.blocks);
	let built = FeedPipeline::new(&provider, &site, &config.feed).build(&documents).await;

	let degraded: Vec<_> = built
		.iter()
		.filter(|b| b.status.is_degraded())
		.map(|b| json!({ "title": b.item.title, "link": b.item.link, "status": format!("{:?}", b.status) }))
		.collect();
	let item_count = built.len();

	let feed = Feed::new(Channel::from_site(&site, Utc::now()), built.into_iter().map(|b| b.item).collect());
	let rendered = feed.render().context("encoding feeds")?;

	let written = match rendered.write_to(&args.out) {
		Ok(paths) => paths,
		Err(err) => {
			warn!(target = "blockfeed.cli", dir = %args.out.display(), error = %err, "feed files not written; output directory may be read-only");
			Vec::new()
		}
	};

	print_result(
		"generate",
		json!({
			"skipped": false,
			"items": item_count,
			"degraded": degraded,
			"written": written,
		}),
	)
}
