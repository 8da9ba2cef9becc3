//! Document listing records.

use serde::{Deserialize, Serialize};

/// One published document as listed by the site build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
	pub id: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub slug: String,
	#[serde(default, alias = "publishDate", alias = "date")]
	pub publish_day: Option<PublishDay>,
	/// Plain-text summary maintained by the author, if any.
	#[serde(default)]
	pub summary: Option<String>,
}

/// Publish timestamp as the backend emits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PublishDay {
	/// Milliseconds since the Unix epoch.
	Millis(i64),
	/// `YYYY-MM-DD`, `YYYY-MM-DD HH:MM`, or RFC 3339.
	Text(String),
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn accepts_millis_and_text_dates() {
		let docs: Vec<DocumentRecord> = serde_json::from_value(json!([
			{ "id": "a", "title": "A", "slug": "a", "publishDay": 1700000000000i64 },
			{ "id": "b", "title": "B", "slug": "b", "publishDate": "2024-05-01" },
			{ "id": "c" }
		]))
		.unwrap();

		assert_eq!(docs[0].publish_day, Some(PublishDay::Millis(1_700_000_000_000)));
		assert_eq!(docs[1].publish_day, Some(PublishDay::Text("2024-05-01".to_string())));
		assert_eq!(docs[2].publish_day, None);
		assert!(docs[2].title.is_empty());
	}
}
