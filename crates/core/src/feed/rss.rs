//! RSS 2.0 encoding.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use super::xml::{cdata_element, into_string, text_element, text_element_with};
use super::{Feed, GENERATOR};
use crate::error::Result;

const RSS_DOCS: &str = "https://validator.w3.org/feed/docs/rss2.html";
const CONTENT_NS: &str = "http://purl.org/rss/1.0/modules/content/";
const DC_NS: &str = "http://purl.org/dc/elements/1.1/";

impl Feed {
	/// Encodes the feed as RSS 2.0.
	///
	/// Item content goes into `content:encoded` as CDATA; the plain-text
	/// description is escaped.
	pub fn to_rss(&self) -> Result<String> {
		let channel = &self.channel;
		let mut writer = Writer::new(Vec::new());

		writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
		let rss = BytesStart::new("rss").with_attributes([("version", "2.0"), ("xmlns:dc", DC_NS), ("xmlns:content", CONTENT_NS)]);
		writer.write_event(Event::Start(rss))?;
		writer.write_event(Event::Start(BytesStart::new("channel")))?;

		text_element(&mut writer, "title", &channel.title)?;
		text_element(&mut writer, "link", &channel.link)?;
		text_element(&mut writer, "description", &channel.description)?;
		text_element(&mut writer, "lastBuildDate", &self.updated().to_rfc2822())?;
		text_element(&mut writer, "docs", RSS_DOCS)?;
		text_element(&mut writer, "generator", GENERATOR)?;
		text_element(&mut writer, "language", &channel.language)?;
		text_element(&mut writer, "copyright", &channel.copyright)?;
		if let Some(email) = &channel.author.email {
			text_element(&mut writer, "managingEditor", &format!("{email} ({})", channel.author.name))?;
		}

		writer.write_event(Event::Start(BytesStart::new("image")))?;
		text_element(&mut writer, "title", &channel.title)?;
		text_element(&mut writer, "url", &channel.favicon)?;
		text_element(&mut writer, "link", &channel.link)?;
		writer.write_event(Event::End(BytesEnd::new("image")))?;

		for item in &self.items {
			writer.write_event(Event::Start(BytesStart::new("item")))?;
			text_element(&mut writer, "title", &item.title)?;
			text_element(&mut writer, "link", &item.link)?;
			text_element_with(&mut writer, "guid", &[("isPermaLink", "true")], &item.link)?;
			text_element(&mut writer, "pubDate", &item.date.to_rfc2822())?;
			text_element(&mut writer, "description", &item.description)?;
			cdata_element(&mut writer, "content:encoded", &item.content)?;
			writer.write_event(Event::End(BytesEnd::new("item")))?;
		}

		writer.write_event(Event::End(BytesEnd::new("channel")))?;
		writer.write_event(Event::End(BytesEnd::new("rss")))?;
		into_string(writer)
	}
}
