//! Content extraction from block trees.
//!
//! The extractor walks a document's block tree and yields ordered text units;
//! the composer normalizes them, wraps each in its fixed markup and derives a
//! plain-text summary. Both stages degrade to the "view the original post"
//! notice instead of failing.

mod compose;
mod extract;
mod notice;
mod sanitize;
mod summary;
mod types;

pub use compose::{ComposeOptions, Composer, wrap_container};
pub use extract::{ExtractPolicy, Extractor, block_map};
pub use notice::notice_html;
pub use sanitize::{Normalize, Sanitizer, escape_document_wrappers, remove_pictographs, remove_xml_forbidden};
pub use summary::{strip_tags, summarize, truncate_chars};
pub use types::{BlockKind, ComposedContent, DecorativeKind, ExtractedUnit, Markup};
