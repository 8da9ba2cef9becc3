//! Small helpers over the `quick-xml` writer.
//!
//! Text and CDATA pass through [`remove_xml_forbidden`] first, so titles and
//! other values that never went through the sanitizer still yield well-formed
//! XML.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};

use crate::content::remove_xml_forbidden;
use crate::error::{Error, Result};

/// `<name>text</name>` with `text` escaped.
pub(super) fn text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
	let text = remove_xml_forbidden(text);
	writer.write_event(Event::Start(BytesStart::new(name)))?;
	writer.write_event(Event::Text(BytesText::new(&text)))?;
	writer.write_event(Event::End(BytesEnd::new(name)))?;
	Ok(())
}

/// Like [`text_element`] with attributes on the start tag.
pub(super) fn text_element_with<W: Write>(writer: &mut Writer<W>, name: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
	let text = remove_xml_forbidden(text);
	writer.write_event(Event::Start(BytesStart::new(name).with_attributes(attrs.iter().copied())))?;
	writer.write_event(Event::Text(BytesText::new(&text)))?;
	writer.write_event(Event::End(BytesEnd::new(name)))?;
	Ok(())
}

pub(super) fn empty_element<W: Write>(writer: &mut Writer<W>, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
	writer.write_event(Event::Empty(BytesStart::new(name).with_attributes(attrs.iter().copied())))?;
	Ok(())
}

/// `<name><![CDATA[html]]></name>`.
///
/// A `]]>` inside `html` would end the section early, so it is split across
/// two sections.
pub(super) fn cdata_element<W: Write>(writer: &mut Writer<W>, name: &str, html: &str) -> Result<()> {
	let safe = remove_xml_forbidden(html).replace("]]>", "]]]]><![CDATA[>");
	writer.write_event(Event::Start(BytesStart::new(name)))?;
	writer.write_event(Event::CData(BytesCData::new(safe.as_str())))?;
	writer.write_event(Event::End(BytesEnd::new(name)))?;
	Ok(())
}

pub(super) fn into_string(writer: Writer<Vec<u8>>) -> Result<String> {
	String::from_utf8(writer.into_inner()).map_err(|err| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn escapes_text_content() {
		let mut writer = Writer::new(Vec::new());
		text_element(&mut writer, "title", "Fish & <Chips>").unwrap();
		assert_eq!(into_string(writer).unwrap(), "<title>Fish &amp; &lt;Chips&gt;</title>");
	}

	#[test]
	fn splits_cdata_terminators() {
		let mut writer = Writer::new(Vec::new());
		cdata_element(&mut writer, "content", "<p>a]]>b</p>").unwrap();
		assert_eq!(into_string(writer).unwrap(), "<content><![CDATA[<p>a]]]]><![CDATA[>b</p>]]></content>");
	}

	#[test]
	fn drops_control_characters_from_text_and_cdata() {
		let mut writer = Writer::new(Vec::new());
		text_element(&mut writer, "title", "form\u{000C}feed").unwrap();
		cdata_element(&mut writer, "content", "<p>tab\u{000B}x</p>").unwrap();
		assert_eq!(into_string(writer).unwrap(), "<title>formfeed</title><content><![CDATA[<p>tabx</p>]]></content>");
	}

	#[test]
	fn writes_attributes() {
		let mut writer = Writer::new(Vec::new());
		empty_element(&mut writer, "link", &[("rel", "alternate"), ("href", "https://x.example/?a=1&b=2")]).unwrap();
		assert_eq!(into_string(writer).unwrap(), r#"<link rel="alternate" href="https://x.example/?a=1&amp;b=2"/>"#);
	}
}
