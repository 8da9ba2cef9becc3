//! Error types shared across the feed generator.

use thiserror::Error;

/// Errors raised by the feed generator.
///
/// Extraction and composition never surface these to callers directly; they
/// are caught at those boundaries and turned into fallback content. The
/// remaining variants belong to configuration, providers, encoders and output.
#[derive(Error, Debug)]
pub enum Error {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("XML error: {0}")]
	Xml(#[from] quick_xml::Error),

	#[error("formatting error")]
	Format(#[from] std::fmt::Error),

	/// The block-tree provider could not deliver a document's blocks.
	#[error("block provider failed for {document}: {message}")]
	Provider { document: String, message: String },

	/// Text normalization rejected its input.
	#[error("normalization failed: {0}")]
	Normalize(String),

	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
}

/// Result type alias for feed generator operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
	pub(crate) fn provider(document: impl Into<String>, message: impl std::fmt::Display) -> Self {
		Self::Provider {
			document: document.into(),
			message: message.to_string(),
		}
	}
}
