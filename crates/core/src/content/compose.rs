//! Fragment composition.
//!
//! Unit text is inserted into its wrapper as-is, except for `<html>`, `<head>`
//! and `<body>` tags, which are escaped. Nothing else escapes `<` or `&`: the
//! feed encoders CDATA-wrap or escape the whole fragment, and any other XML
//! writer must do the same before embedding it.

use std::fmt::Write as _;

use tracing::warn;

use crate::content::notice::notice_html;
use crate::content::sanitize::{Normalize, Sanitizer, escape_document_wrappers};
use crate::content::summary::summarize;
use crate::content::types::{ComposedContent, ExtractedUnit, Markup};
use crate::error::Result;
use crate::outcome::Outcome;

const CONTAINER_OPEN: &str = r#"<div class="blockfeed-content">"#;
const CONTAINER_STYLE: &str =
	"<style>.blockfeed-content{line-height:1.7}.blockfeed-content img,.blockfeed-content svg{max-width:100%;height:auto}</style>";
const CONTAINER_CLOSE: &str = "</div>";

/// Composition settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeOptions {
	pub summary_length: usize,
	pub wrap_container: bool,
}

impl Default for ComposeOptions {
	fn default() -> Self {
		Self {
			summary_length: 200,
			wrap_container: false,
		}
	}
}

/// Turns extracted units into a content fragment and its summary.
#[derive(Debug, Clone, Default)]
pub struct Composer<N = Sanitizer> {
	options: ComposeOptions,
	normalizer: N,
}

impl Composer<Sanitizer> {
	pub fn new(options: ComposeOptions) -> Self {
		Self { options, normalizer: Sanitizer }
	}
}

impl<N: Normalize> Composer<N> {
	pub fn with_normalizer(options: ComposeOptions, normalizer: N) -> Self {
		Self { options, normalizer }
	}

	/// Composes `units` for the document at `link`.
	///
	/// When no unit survives normalization the notice fragment is used. Any
	/// internal failure produces the notice as a [`Outcome::Fallback`].
	pub fn compose(&self, units: &[ExtractedUnit], link: &str) -> Outcome<ComposedContent> {
		match self.render(units, link) {
			Ok(fragment) => Outcome::Complete(self.finish(fragment)),
			Err(err) => {
				warn!(target = "blockfeed.compose", %link, error = %err, "composition failed; substituting notice");
				Outcome::Fallback {
					value: self.notice(link),
					reason: err.to_string(),
				}
			}
		}
	}

	/// Notice-only content for `link`.
	pub fn notice(&self, link: &str) -> ComposedContent {
		self.finish(notice_html(link))
	}

	fn render(&self, units: &[ExtractedUnit], link: &str) -> Result<String> {
		let mut body = String::new();

		for unit in units {
			let markup = unit.kind.markup();
			if markup == Markup::Notice {
				body.push_str(&notice_html(link));
				continue;
			}

			let text = self.normalizer.normalize(&unit.text)?;
			if text.is_empty() {
				continue;
			}
			let tag = markup.tag();
			let text = escape_document_wrappers(&text);
			write!(body, "<{tag}>{text}</{tag}>")?;
		}

		if body.is_empty() {
			body = notice_html(link);
		}
		Ok(body)
	}

	fn finish(&self, body: String) -> ComposedContent {
		let summary = summarize(&body, self.options.summary_length);
		let fragment = if self.options.wrap_container { wrap_container(&body) } else { body };
		ComposedContent { fragment, summary }
	}
}

/// Wraps a fragment in the presentational container. Already wrapped
/// fragments are returned unchanged.
pub fn wrap_container(fragment: &str) -> String {
	if fragment.starts_with(CONTAINER_OPEN) {
		return fragment.to_string();
	}
	format!("{CONTAINER_OPEN}{CONTAINER_STYLE}{fragment}{CONTAINER_CLOSE}")
}
