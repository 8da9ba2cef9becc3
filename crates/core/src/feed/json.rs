//! JSON Feed 1 encoding.

use chrono::SecondsFormat;
use serde::Serialize;

use super::Feed;
use crate::error::Result;

const JSON_FEED_VERSION: &str = "https://jsonfeed.org/version/1";

#[derive(Debug, Serialize)]
struct JsonFeed<'a> {
	version: &'static str,
	title: &'a str,
	home_page_url: &'a str,
	#[serde(skip_serializing_if = "str::is_empty")]
	description: &'a str,
	favicon: &'a str,
	author: JsonAuthor<'a>,
	items: Vec<JsonItem<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonAuthor<'a> {
	name: &'a str,
	url: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonItem<'a> {
	id: &'a str,
	url: &'a str,
	title: &'a str,
	summary: &'a str,
	content_html: &'a str,
	date_published: String,
	date_modified: String,
}

impl Feed {
	/// Encodes the feed as JSON Feed version 1.
	pub fn to_json(&self) -> Result<String> {
		let channel = &self.channel;
		let document = JsonFeed {
			version: JSON_FEED_VERSION,
			title: &channel.title,
			home_page_url: &channel.link,
			description: &channel.description,
			favicon: &channel.favicon,
			author: JsonAuthor {
				name: &channel.author.name,
				url: &channel.author.link,
			},
			items: self
				.items
				.iter()
				.map(|item| {
					let date = item.date.to_rfc3339_opts(SecondsFormat::Secs, true);
					JsonItem {
						id: &item.link,
						url: &item.link,
						title: &item.title,
						summary: &item.description,
						content_html: &item.content,
						date_published: date.clone(),
						date_modified: date,
					}
				})
				.collect(),
		};

		Ok(serde_json::to_string_pretty(&document)?)
	}
}
