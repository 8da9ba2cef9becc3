//! Feed model and encoders.
//!
//! [`Feed`] pairs channel metadata resolved from [`SiteConfig`] with the built
//! items, and serializes to RSS 2.0, Atom 1.0 and JSON Feed 1.

mod atom;
mod json;
mod rss;
mod xml;

use chrono::{DateTime, Datelike, Utc};

use crate::config::SiteConfig;
use crate::document::FeedItem;
use crate::error::Result;

/// Value of the `generator` element in every format.
pub const GENERATOR: &str = concat!("blockfeed ", env!("CARGO_PKG_VERSION"));

/// Feed author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
	pub name: String,
	pub email: Option<String>,
	pub link: String,
}

/// Feed-level metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
	pub title: String,
	pub description: String,
	/// Home page of the feed: the site link joined with its sub-path.
	pub link: String,
	pub language: String,
	pub favicon: String,
	pub copyright: String,
	pub author: Author,
	pub generated_at: DateTime<Utc>,
}

impl Channel {
	pub fn from_site(site: &SiteConfig, generated_at: DateTime<Utc>) -> Self {
		Self {
			title: site.title.clone(),
			description: site.description.clone(),
			link: site.home_link(),
			language: site.language.clone(),
			favicon: site.favicon(),
			copyright: format!("All rights reserved {}, {}", generated_at.year(), site.author),
			author: Author {
				name: site.author.clone(),
				email: site.contact_email.clone(),
				link: site.link.clone(),
			},
			generated_at,
		}
	}
}

/// A complete feed ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
	pub channel: Channel,
	pub items: Vec<FeedItem>,
}

/// The three encodings of one feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFeeds {
	pub rss: String,
	pub atom: String,
	pub json: String,
}

impl Feed {
	pub fn new(channel: Channel, items: Vec<FeedItem>) -> Self {
		Self { channel, items }
	}

	/// Date of the newest item, or the generation time for an empty feed.
	pub fn updated(&self) -> DateTime<Utc> {
		self.items.iter().map(|item| item.date).max().unwrap_or(self.channel.generated_at)
	}

	pub fn render(&self) -> Result<RenderedFeeds> {
		Ok(RenderedFeeds {
			rss: self.to_rss()?,
			atom: self.to_atom()?,
			json: self.to_json()?,
		})
	}
}

#[cfg(test)]
pub(crate) mod fixtures {
	use chrono::TimeZone;

	use super::*;
	use crate::config::SiteSettings;

	pub(crate) fn site() -> SiteConfig {
		SiteConfig::resolve(
			&SiteSettings {
				title: Some("Field Notes".to_string()),
				description: Some("Notes & sketches".to_string()),
				link: Some("https://blog.example".to_string()),
				author: Some("Ada".to_string()),
				contact_email: Some("ada@blog.example".to_string()),
				..Default::default()
			},
			&SiteSettings::default(),
		)
		.expect("fixture site config should resolve")
	}

	pub(crate) fn feed(items: Vec<FeedItem>) -> Feed {
		let generated_at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
		Feed::new(Channel::from_site(&site(), generated_at), items)
	}

	pub(crate) fn item(title: &str, content: &str) -> FeedItem {
		FeedItem {
			title: title.to_string(),
			link: format!("https://blog.example/{}", title.to_lowercase().replace(' ', "-")),
			description: "Summary text".to_string(),
			content: content.to_string(),
			date: Utc.with_ymd_and_hms(2025, 2, 14, 9, 30, 0).unwrap(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::fixtures::{feed, item};

	#[test]
	fn channel_metadata_follows_site_config() {
		let feed = feed(Vec::new());
		assert_eq!(feed.channel.link, "https://blog.example");
		assert_eq!(feed.channel.favicon, "https://blog.example/favicon.png");
		assert_eq!(feed.channel.copyright, "All rights reserved 2025, Ada");
		assert_eq!(feed.channel.author.email.as_deref(), Some("ada@blog.example"));
		assert_eq!(feed.updated(), feed.channel.generated_at);
	}

	#[test]
	fn updated_is_newest_item() {
		let feed = feed(vec![item("One", "<p>1</p>")]);
		assert_eq!(feed.updated(), feed.items[0].date);
	}

	#[test]
	fn renders_all_formats() {
		let rendered = feed(vec![item("One", "<p>1</p>")]).render().unwrap();
		assert!(rendered.rss.contains("<rss"));
		assert!(rendered.atom.contains("<feed"));
		assert!(rendered.json.contains("jsonfeed.org"));
	}
}
