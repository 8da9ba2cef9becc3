//! Atom 1.0 encoding.

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use super::xml::{empty_element, into_string, text_element, text_element_with};
use super::{Feed, GENERATOR};
use crate::error::Result;

const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

impl Feed {
	/// Encodes the feed as Atom 1.0. Item content is escaped `type="html"`.
	pub fn to_atom(&self) -> Result<String> {
		let channel = &self.channel;
		let mut writer = Writer::new(Vec::new());

		writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
		writer.write_event(Event::Start(BytesStart::new("feed").with_attributes([("xmlns", ATOM_NS), ("xml:lang", channel.language.as_str())])))?;

		text_element(&mut writer, "id", &channel.link)?;
		text_element(&mut writer, "title", &channel.title)?;
		text_element(&mut writer, "updated", &timestamp(self.updated()))?;
		text_element(&mut writer, "generator", GENERATOR)?;

		writer.write_event(Event::Start(BytesStart::new("author")))?;
		text_element(&mut writer, "name", &channel.author.name)?;
		if let Some(email) = &channel.author.email {
			text_element(&mut writer, "email", email)?;
		}
		text_element(&mut writer, "uri", &channel.author.link)?;
		writer.write_event(Event::End(BytesEnd::new("author")))?;

		empty_element(&mut writer, "link", &[("rel", "alternate"), ("href", channel.link.as_str())])?;
		if !channel.description.is_empty() {
			text_element(&mut writer, "subtitle", &channel.description)?;
		}
		text_element(&mut writer, "icon", &channel.favicon)?;
		text_element(&mut writer, "rights", &channel.copyright)?;

		for item in &self.items {
			writer.write_event(Event::Start(BytesStart::new("entry")))?;
			text_element(&mut writer, "title", &item.title)?;
			text_element(&mut writer, "id", &item.link)?;
			empty_element(&mut writer, "link", &[("href", item.link.as_str())])?;
			text_element(&mut writer, "updated", &timestamp(item.date))?;
			text_element(&mut writer, "published", &timestamp(item.date))?;
			text_element(&mut writer, "summary", &item.description)?;
			text_element_with(&mut writer, "content", &[("type", "html")], &item.content)?;
			writer.write_event(Event::End(BytesEnd::new("entry")))?;
		}

		writer.write_event(Event::End(BytesEnd::new("feed")))?;
		into_string(writer)
	}
}

fn timestamp(date: DateTime<Utc>) -> String {
	date.to_rfc3339_opts(SecondsFormat::Secs, true)
}
