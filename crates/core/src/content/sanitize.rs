//! Text normalization applied to every extracted unit.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

static PICTOGRAPHS: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"[\p{Emoji_Presentation}\p{Extended_Pictographic}\x{2600}-\x{26FF}\x{FE0F}]").expect("PICTOGRAPHS regex should compile")
});

static XML_FORBIDDEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F]").expect("XML_FORBIDDEN regex should compile"));

static DOCUMENT_WRAPPERS: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)<(/?(?:html|head|body)\b[^>]*)>").expect("DOCUMENT_WRAPPERS regex should compile"));

/// Normalizes raw block text before it is wrapped in markup.
///
/// Implementations must be idempotent: normalizing normalized text is a no-op.
pub trait Normalize {
	fn normalize(&self, text: &str) -> Result<String>;
}

/// Default normalizer: drops pictographic symbols and control characters
/// XML 1.0 cannot carry, then trims.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sanitizer;

impl Normalize for Sanitizer {
	fn normalize(&self, text: &str) -> Result<String> {
		let text = remove_pictographs(text);
		Ok(remove_xml_forbidden(&text).trim().to_string())
	}
}

/// Removes emoji and other pictographic code points, leaving surrounding
/// text and spacing untouched.
pub fn remove_pictographs(text: &str) -> String {
	PICTOGRAPHS.replace_all(text, "").into_owned()
}

/// Removes C0 control characters other than tab, newline and carriage return.
pub fn remove_xml_forbidden(text: &str) -> String {
	XML_FORBIDDEN.replace_all(text, "").into_owned()
}

/// Escapes `<html>`, `<head>` and `<body>` tags (opening or closing) found in
/// text. Other markup is left alone.
pub fn escape_document_wrappers(text: &str) -> String {
	DOCUMENT_WRAPPERS.replace_all(text, "&lt;$1&gt;").into_owned()
}
