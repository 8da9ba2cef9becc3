//! Orchestration from documents to feed items.
//!
//! Documents are processed independently: a failing fetch, extraction or
//! composition only degrades that document's item, and the item order always
//! matches the input order.

use futures_util::stream::{self, StreamExt};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::{FeedOptions, SiteConfig};
use crate::content::{BlockKind, Composer, ExtractedUnit, Extractor, Normalize, Sanitizer};
use crate::document::{Document, FeedItem};
use crate::provider::BlockProvider;

/// Which path produced an item's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
	/// Content came from the block tree.
	Rendered,
	/// The block tree had no text; the document summary was used instead.
	SummaryOnly,
	/// Neither the block tree nor the summary had text; the notice was used.
	Empty,
	FetchFailed(String),
	ExtractionFallback(String),
	CompositionFallback(String),
}

impl ItemStatus {
	pub fn is_degraded(&self) -> bool {
		!matches!(self, ItemStatus::Rendered | ItemStatus::SummaryOnly)
	}
}

/// A feed item together with the path that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltItem {
	pub item: FeedItem,
	pub status: ItemStatus,
}

/// Builds feed items from documents using a block provider.
pub struct FeedPipeline<'a, P: ?Sized, N = Sanitizer> {
	provider: &'a P,
	site: &'a SiteConfig,
	extractor: Extractor<N>,
	composer: Composer<N>,
	max_items: usize,
	fetch_concurrency: usize,
}

impl<'a, P: BlockProvider + ?Sized> FeedPipeline<'a, P> {
	pub fn new(provider: &'a P, site: &'a SiteConfig, options: &FeedOptions) -> Self {
		Self::with_normalizer(provider, site, options, Sanitizer)
	}
}

impl<'a, P: BlockProvider + ?Sized, N: Normalize + Clone> FeedPipeline<'a, P, N> {
	/// Builds a pipeline whose extractor and composer share `normalizer`.
	pub fn with_normalizer(provider: &'a P, site: &'a SiteConfig, options: &FeedOptions, normalizer: N) -> Self {
		Self {
			provider,
			site,
			extractor: Extractor::with_normalizer(options.extract_policy(), normalizer.clone()),
			composer: Composer::with_normalizer(options.compose_options(), normalizer),
			max_items: options.max_items,
			fetch_concurrency: options.fetch_concurrency.max(1),
		}
	}

	/// Builds items for the first `max_items` documents, in input order.
	pub async fn build(&self, documents: &[Document]) -> Vec<BuiltItem> {
		let selected = &documents[..documents.len().min(self.max_items)];
		let items: Vec<BuiltItem> = stream::iter(selected)
			.map(|document| self.build_item(document))
			.buffered(self.fetch_concurrency)
			.collect()
			.await;

		let degraded = items.iter().filter(|built| built.status.is_degraded()).count();
		info!(target = "blockfeed.pipeline", items = items.len(), degraded, skipped = documents.len() - selected.len(), "built feed items");
		items
	}

	/// Fetches, extracts and composes a single document.
	pub async fn build_item(&self, document: &Document) -> BuiltItem {
		match self.provider.fetch_blocks(&document.id).await {
			Ok(tree) => self.assemble(document, Some(&tree), None),
			Err(err) => {
				warn!(target = "blockfeed.pipeline", id = %document.id, title = %document.title, error = %err, "block fetch failed");
				self.assemble(document, None, Some(err.to_string()))
			}
		}
	}

	fn assemble(&self, document: &Document, tree: Option<&Value>, fetch_error: Option<String>) -> BuiltItem {
		let link = self.site.item_link(&document.slug);
		let extraction = self.extractor.extract(tree, &document.title);

		let mut status = match (fetch_error, extraction.reason()) {
			(Some(reason), _) => ItemStatus::FetchFailed(reason),
			(None, Some(reason)) => ItemStatus::ExtractionFallback(reason.to_string()),
			(None, None) => ItemStatus::Rendered,
		};

		let mut units = extraction.into_value();
		if matches!(status, ItemStatus::FetchFailed(_)) {
			// A failed fetch always surfaces the notice, never the summary.
			units = vec![ExtractedUnit::notice()];
		} else if units.is_empty() {
			match document.summary.as_deref().filter(|summary| !summary.trim().is_empty()) {
				Some(summary) => {
					units.push(ExtractedUnit::new(BlockKind::Text, summary));
					if status == ItemStatus::Rendered {
						status = ItemStatus::SummaryOnly;
					}
				}
				None => {
					units.push(ExtractedUnit::notice());
					if status == ItemStatus::Rendered {
						status = ItemStatus::Empty;
					}
				}
			}
		}

		let composed = self.composer.compose(&units, &link);
		if let Some(reason) = composed.reason() {
			status = ItemStatus::CompositionFallback(reason.to_string());
		}
		let content = composed.into_value();
		debug!(target = "blockfeed.pipeline", id = %document.id, ?status, bytes = content.fragment.len(), "item composed");

		BuiltItem {
			item: FeedItem {
				title: document.title.clone(),
				link,
				description: content.summary,
				content: content.fragment,
				date: document.published,
			},
			status,
		}
	}
}
