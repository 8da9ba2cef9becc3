//! Wire types for the content backend.
//!
//! This crate contains the serde-deserializable shapes of the data handed to
//! the feed generator: raw block records as they appear inside a document's
//! block tree, and the document listing produced by the site build.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! * Pure data: No behavior beyond serialization/deserialization and trivial accessors
//! * Lenient: Optional fields default instead of failing the whole record
//! * Stable: Changes only when the backend's record shape changes
//!
//! Block classification, text normalization and markup live in `blockfeed`.

pub mod block;
pub mod document;

pub use block::*;
pub use document::*;
