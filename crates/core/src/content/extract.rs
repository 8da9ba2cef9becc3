//! Block-tree traversal and text extraction.

use blockfeed_protocol::BlockRecord;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::content::sanitize::{Normalize, Sanitizer};
use crate::content::types::{BlockKind, ExtractedUnit};
use crate::error::Result;
use crate::outcome::Outcome;

/// Which optional block kinds contribute text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractPolicy {
	pub include_callouts: bool,
	pub include_toggles: bool,
}

impl ExtractPolicy {
	pub fn admits(&self, kind: &BlockKind) -> bool {
		match kind {
			BlockKind::Decorative(_) | BlockKind::Notice => false,
			BlockKind::Callout => self.include_callouts,
			BlockKind::Toggle => self.include_toggles,
			BlockKind::Header
			| BlockKind::SubHeader
			| BlockKind::SubSubHeader
			| BlockKind::Text
			| BlockKind::Quote
			| BlockKind::Todo
			| BlockKind::BulletedList
			| BlockKind::NumberedList
			| BlockKind::Code
			| BlockKind::Other(_) => true,
		}
	}
}

/// Walks a block tree and yields its textual blocks in tree order.
#[derive(Debug, Clone, Default)]
pub struct Extractor<N = Sanitizer> {
	policy: ExtractPolicy,
	normalizer: N,
}

impl Extractor<Sanitizer> {
	pub fn new(policy: ExtractPolicy) -> Self {
		Self { policy, normalizer: Sanitizer }
	}
}

impl<N: Normalize> Extractor<N> {
	pub fn with_normalizer(policy: ExtractPolicy, normalizer: N) -> Self {
		Self { policy, normalizer }
	}

	/// Extracts units from `tree`.
	///
	/// A missing, non-object or empty tree yields an empty list. Internal
	/// failures yield a single notice unit; `document` labels the log entry.
	pub fn extract(&self, tree: Option<&Value>, document: &str) -> Outcome<Vec<ExtractedUnit>> {
		let Some(blocks) = tree.and_then(block_map) else {
			debug!(target = "blockfeed.extract", %document, "no block tree");
			return Outcome::Complete(Vec::new());
		};

		match self.collect(blocks) {
			Ok(units) => {
				debug!(target = "blockfeed.extract", %document, blocks = blocks.len(), units = units.len(), "extracted");
				Outcome::Complete(units)
			}
			Err(err) => {
				warn!(target = "blockfeed.extract", %document, error = %err, "extraction failed; substituting notice");
				Outcome::Fallback {
					value: vec![ExtractedUnit::notice()],
					reason: err.to_string(),
				}
			}
		}
	}

	fn collect(&self, blocks: &Map<String, Value>) -> Result<Vec<ExtractedUnit>> {
		let mut units = Vec::new();

		for (id, entry) in blocks {
			let Some(record) = resolve_record(entry) else {
				continue;
			};
			let record = match BlockRecord::deserialize(record) {
				Ok(record) => record,
				Err(err) => {
					debug!(target = "blockfeed.extract", block = %id, error = %err, "skipping malformed block");
					continue;
				}
			};
			let Some(tag) = record.kind.as_deref() else {
				continue;
			};

			let kind = BlockKind::from_tag(tag);
			if !self.policy.admits(&kind) {
				continue;
			}
			let Some(raw) = record.title_text() else {
				continue;
			};

			let text = self.normalizer.normalize(&raw)?;
			if !text.is_empty() {
				units.push(ExtractedUnit::new(kind, text));
			}
		}

		Ok(units)
	}
}

/// Locates the id-to-record map inside a provider payload.
///
/// Accepts either the map itself or a record map holding it under `block`.
pub fn block_map(tree: &Value) -> Option<&Map<String, Value>> {
	let root = tree.as_object()?;
	match root.get("block").and_then(Value::as_object) {
		Some(blocks) => Some(blocks),
		None => Some(root),
	}
}

/// Peels up to two `value` envelopes until a record carrying `type` is found.
fn resolve_record(entry: &Value) -> Option<&Value> {
	let mut current = entry;
	for _ in 0..3 {
		let object = current.as_object()?;
		if object.contains_key("type") {
			return Some(current);
		}
		current = object.get("value")?;
	}
	None
}
