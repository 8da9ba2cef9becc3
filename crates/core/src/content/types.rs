//! Block classification and the values passed between pipeline stages.

use std::fmt;

/// Type of a content block.
///
/// Every backend tag maps to exactly one variant. Structural and media blocks
/// land in [`BlockKind::Decorative`]; tags this crate does not know are kept as
/// [`BlockKind::Other`] and still contribute text when they carry a title.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockKind {
	Header,
	SubHeader,
	SubSubHeader,
	Text,
	Quote,
	Todo,
	BulletedList,
	NumberedList,
	Code,
	Callout,
	Toggle,
	Decorative(DecorativeKind),
	Other(String),
	/// Placeholder emitted when real content is unavailable.
	Notice,
}

/// Blocks that never contribute text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorativeKind {
	Image,
	PageIcon,
	File,
	Video,
	Embed,
	Bookmark,
	Audio,
	TableOfContents,
	Divider,
	PropertyRow,
	/// The page block itself, which wraps the page icon and property rows.
	Page,
}

/// Wrapper applied to a unit's text in the content fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
	H3,
	H4,
	H5,
	Paragraph,
	Notice,
}

impl BlockKind {
	pub fn from_tag(tag: &str) -> Self {
		match tag {
			"header" => BlockKind::Header,
			"sub_header" => BlockKind::SubHeader,
			"sub_sub_header" => BlockKind::SubSubHeader,
			"text" => BlockKind::Text,
			"quote" => BlockKind::Quote,
			"to_do" => BlockKind::Todo,
			"bulleted_list" => BlockKind::BulletedList,
			"numbered_list" => BlockKind::NumberedList,
			"code" => BlockKind::Code,
			"callout" => BlockKind::Callout,
			"toggle" => BlockKind::Toggle,
			"image" => BlockKind::Decorative(DecorativeKind::Image),
			"page_icon" => BlockKind::Decorative(DecorativeKind::PageIcon),
			"file" | "pdf" => BlockKind::Decorative(DecorativeKind::File),
			"video" => BlockKind::Decorative(DecorativeKind::Video),
			"embed" => BlockKind::Decorative(DecorativeKind::Embed),
			"bookmark" => BlockKind::Decorative(DecorativeKind::Bookmark),
			"audio" => BlockKind::Decorative(DecorativeKind::Audio),
			"table_of_contents" => BlockKind::Decorative(DecorativeKind::TableOfContents),
			"divider" => BlockKind::Decorative(DecorativeKind::Divider),
			"collection_row" | "collection_view" | "collection_view_page" => BlockKind::Decorative(DecorativeKind::PropertyRow),
			"page" => BlockKind::Decorative(DecorativeKind::Page),
			other => BlockKind::Other(other.to_string()),
		}
	}

	pub fn markup(&self) -> Markup {
		match self {
			BlockKind::Header => Markup::H3,
			BlockKind::SubHeader => Markup::H4,
			BlockKind::SubSubHeader => Markup::H5,
			BlockKind::Notice => Markup::Notice,
			BlockKind::Text
			| BlockKind::Quote
			| BlockKind::Todo
			| BlockKind::BulletedList
			| BlockKind::NumberedList
			| BlockKind::Code
			| BlockKind::Callout
			| BlockKind::Toggle
			| BlockKind::Decorative(_)
			| BlockKind::Other(_) => Markup::Paragraph,
		}
	}
}

impl fmt::Display for BlockKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BlockKind::Header => write!(f, "header"),
			BlockKind::SubHeader => write!(f, "sub_header"),
			BlockKind::SubSubHeader => write!(f, "sub_sub_header"),
			BlockKind::Text => write!(f, "text"),
			BlockKind::Quote => write!(f, "quote"),
			BlockKind::Todo => write!(f, "to_do"),
			BlockKind::BulletedList => write!(f, "bulleted_list"),
			BlockKind::NumberedList => write!(f, "numbered_list"),
			BlockKind::Code => write!(f, "code"),
			BlockKind::Callout => write!(f, "callout"),
			BlockKind::Toggle => write!(f, "toggle"),
			BlockKind::Decorative(kind) => f.write_str(kind.tag()),
			BlockKind::Other(tag) => write!(f, "{tag}"),
			BlockKind::Notice => write!(f, "notice"),
		}
	}
}

impl DecorativeKind {
	/// Backend tag for this kind. Kinds covering several tags report the first.
	pub fn tag(self) -> &'static str {
		match self {
			DecorativeKind::Image => "image",
			DecorativeKind::PageIcon => "page_icon",
			DecorativeKind::File => "file",
			DecorativeKind::Video => "video",
			DecorativeKind::Embed => "embed",
			DecorativeKind::Bookmark => "bookmark",
			DecorativeKind::Audio => "audio",
			DecorativeKind::TableOfContents => "table_of_contents",
			DecorativeKind::Divider => "divider",
			DecorativeKind::PropertyRow => "collection_row",
			DecorativeKind::Page => "page",
		}
	}
}

impl Markup {
	pub(crate) fn tag(self) -> &'static str {
		match self {
			Markup::H3 => "h3",
			Markup::H4 => "h4",
			Markup::H5 => "h5",
			Markup::Paragraph | Markup::Notice => "p",
		}
	}
}

/// One block's text, ready for composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedUnit {
	pub kind: BlockKind,
	pub text: String,
}

impl ExtractedUnit {
	pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
		Self { kind, text: text.into() }
	}

	/// The "view the original post" placeholder unit.
	pub fn notice() -> Self {
		Self::new(BlockKind::Notice, String::new())
	}
}

/// Result of composing a document's units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposedContent {
	/// HTML fragment for the feed item's content.
	pub fragment: String,
	/// Plain-text description derived from `fragment`.
	pub summary: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn heading_tags_map_to_fixed_levels() {
		assert_eq!(BlockKind::from_tag("header").markup(), Markup::H3);
		assert_eq!(BlockKind::from_tag("sub_header").markup(), Markup::H4);
		assert_eq!(BlockKind::from_tag("sub_sub_header").markup(), Markup::H5);
	}

	#[test]
	fn textual_tags_become_paragraphs() {
		for tag in ["text", "quote", "to_do", "callout", "bulleted_list", "something_new"] {
			assert_eq!(BlockKind::from_tag(tag).markup(), Markup::Paragraph, "{tag}");
		}
	}

	#[test]
	fn display_uses_backend_tags() {
		for tag in ["header", "to_do", "image", "page_icon", "table_of_contents", "collection_row", "page", "something_new"] {
			assert_eq!(BlockKind::from_tag(tag).to_string(), tag);
		}
		assert_eq!(BlockKind::from_tag("pdf").to_string(), "file");
	}

	#[test]
	fn structural_tags_are_decorative() {
		for tag in [
			"image",
			"page_icon",
			"file",
			"video",
			"embed",
			"bookmark",
			"audio",
			"table_of_contents",
			"divider",
			"collection_row",
			"page",
		] {
			assert!(matches!(BlockKind::from_tag(tag), BlockKind::Decorative(_)), "{tag}");
		}
	}

	#[test]
	fn unknown_tags_are_preserved() {
		assert_eq!(BlockKind::from_tag("equation"), BlockKind::Other("equation".to_string()));
		assert_eq!(BlockKind::from_tag("equation").to_string(), "equation");
		assert_eq!(BlockKind::SubHeader.to_string(), "sub_header");
	}
}
