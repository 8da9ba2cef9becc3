//! Plain-text summary derivation.

use std::sync::LazyLock;

use regex::Regex;

static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>|<[^>]+>").expect("MARKUP_RE should compile"));

/// Removes tags, and the bodies of `<style>` elements, in a single pass.
pub fn strip_tags(html: &str) -> String {
	MARKUP_RE.replace_all(html, "").into_owned()
}

/// Keeps the first `max_chars` characters. No ellipsis is appended.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
	match text.char_indices().nth(max_chars) {
		Some((idx, _)) => &text[..idx],
		None => text,
	}
}

/// Derives an item description from a composed fragment.
pub fn summarize(fragment: &str, max_chars: usize) -> String {
	truncate_chars(&strip_tags(fragment), max_chars).to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_wrapper_tags() {
		assert_eq!(strip_tags("<h3>Title</h3><p>Body <a href=\"x\">link</a></p>"), "TitleBody link");
	}

	#[test]
	fn drops_style_bodies() {
		assert_eq!(strip_tags("<div><style>img{max-width:100%}</style><p>Text</p></div>"), "Text");
	}

	#[test]
	fn stripping_is_idempotent() {
		let once = strip_tags("<p>a &amp; b</p><h4>c</h4>");
		assert_eq!(strip_tags(&once), once);
	}

	#[test]
	fn truncates_on_character_boundaries() {
		let text = "x".repeat(350);
		assert_eq!(summarize(&format!("<p>{text}</p>"), 200), "x".repeat(200));

		let wide = "日本語のテキスト";
		assert_eq!(truncate_chars(wide, 3), "日本語");
		assert_eq!(truncate_chars(wide, 100), wide);
	}
}
