//! Documents and the feed item records built from them.

use blockfeed_protocol::{DocumentRecord, PublishDay};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::warn;

/// A published document, as far as the feed is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	pub id: String,
	pub title: String,
	pub slug: String,
	pub published: DateTime<Utc>,
	/// Author-maintained plain-text summary, used when the block tree has no text.
	pub summary: Option<String>,
}

impl From<DocumentRecord> for Document {
	fn from(record: DocumentRecord) -> Self {
		let published = match record.publish_day.as_ref().and_then(parse_publish_day) {
			Some(date) => date,
			None => {
				warn!(target = "blockfeed.document", id = %record.id, raw = ?record.publish_day, "unusable publish date; using epoch");
				DateTime::<Utc>::UNIX_EPOCH
			}
		};

		Self {
			id: record.id,
			title: record.title,
			slug: record.slug,
			published,
			summary: record.summary,
		}
	}
}

/// One entry handed to the feed encoders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
	pub title: String,
	pub link: String,
	/// Plain-text summary derived from `content`.
	pub description: String,
	/// HTML fragment; encoders must CDATA-wrap or escape it.
	pub content: String,
	pub date: DateTime<Utc>,
}

fn parse_publish_day(day: &PublishDay) -> Option<DateTime<Utc>> {
	match day {
		PublishDay::Millis(ms) => DateTime::from_timestamp_millis(*ms),
		PublishDay::Text(text) => {
			let text = text.trim();
			if let Ok(date) = DateTime::parse_from_rfc3339(text) {
				return Some(date.with_timezone(&Utc));
			}
			for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
				if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
					return Some(naive.and_utc());
				}
			}
			NaiveDate::parse_from_str(text, "%Y-%m-%d")
				.ok()
				.and_then(|date| date.and_hms_opt(0, 0, 0))
				.map(|naive| naive.and_utc())
		}
	}
}
