use anyhow::{Context, Result};
use blockfeed::{ConfigFile, DirectoryProvider, Document, FeedPipeline};
use chrono::Utc;
use serde_json::json;

use crate::cli::PreviewArgs;
use crate::commands::print_result;

pub async fn run(config: &ConfigFile, args: PreviewArgs) -> Result<()> {
	let site = config.site_config().context("resolving site configuration")?;
	let provider = DirectoryProvider::new(&args.blocks);
	let pipeline = FeedPipeline::new(&provider, &site, &config.feed);

	let document = Document {
		slug: args.slug.clone().unwrap_or_else(|| args.document_id.clone()),
		title: args.document_id.clone(),
		id: args.document_id,
		published: Utc::now(),
		summary: None,
	};
	let built = pipeline.build_item(&document).await;

	print_result(
		"preview",
		json!({
			"id": document.id,
			"link": built.item.link,
			"status": format!("{:?}", built.status),
			"content": built.item.content,
			"description": built.item.description,
		}),
	)
}
