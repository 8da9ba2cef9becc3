//! Raw block records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One block as stored in a document's block tree.
///
/// Only the fields the feed generator reads are modelled; everything else in
/// the record (formatting, parent pointers, permissions) is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockRecord {
	#[serde(rename = "type", default)]
	pub kind: Option<String>,
	#[serde(default)]
	pub properties: Option<BlockProperties>,
}

/// Property bag of a block record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockProperties {
	#[serde(default)]
	pub title: Option<Vec<RichTextRun>>,
}

/// A span of rich text: `[text, formatting...]`.
///
/// Only the first element carries text; later elements hold decorations such
/// as bold markers or link targets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichTextRun(pub Vec<Value>);

impl RichTextRun {
	/// Returns the plain text of this run, if its first element is a string.
	pub fn text(&self) -> Option<&str> {
		self.0.first().and_then(Value::as_str)
	}
}

impl BlockRecord {
	/// Concatenated plain text of `properties.title`, or `None` when the block
	/// has no title property at all.
	pub fn title_text(&self) -> Option<String> {
		let runs = self.properties.as_ref()?.title.as_ref()?;
		Some(runs.iter().filter_map(RichTextRun::text).collect())
	}
}
