//! Loading of the document listing.

use std::path::Path;

use anyhow::{Context, Result};
use blockfeed::Document;
use blockfeed_protocol::DocumentRecord;

/// Reads a JSON array of document records, preserving its order.
pub fn load_documents(path: &Path) -> Result<Vec<Document>> {
	let raw = std::fs::read_to_string(path).with_context(|| format!("reading document list {}", path.display()))?;
	parse_documents(&raw).with_context(|| format!("parsing document list {}", path.display()))
}

pub fn parse_documents(json: &str) -> Result<Vec<Document>> {
	let records: Vec<DocumentRecord> = serde_json::from_str(json)?;
	Ok(records.into_iter().map(Document::from).collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keeps_listing_order() {
		let docs = parse_documents(r#"[{"id":"b","title":"B","slug":"b"},{"id":"a","title":"A","slug":"a"}]"#).unwrap();
		let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
		assert_eq!(ids, ["b", "a"]);
	}

	#[test]
	fn rejects_non_array_listing() {
		assert!(parse_documents(r#"{"id":"a"}"#).is_err());
	}
}
