//! Feed generation from block-structured content.
//!
//! A build step for content sites: each document's block tree is reduced to a
//! small, well-formed HTML fragment plus a plain-text summary, and the results
//! are encoded as RSS 2.0, Atom 1.0 and JSON Feed files.
//!
//! * [`content`] — block extraction, sanitization and composition
//! * [`pipeline`] — per-document orchestration with fallbacks
//! * [`feed`] — channel metadata and the three encoders
//! * [`output`] — file persistence and the freshness check

pub mod config;
pub mod content;
pub mod document;
pub mod error;
pub mod feed;
pub mod outcome;
pub mod output;
pub mod pipeline;
pub mod provider;

pub use config::{ConfigFile, FeedOptions, SiteConfig, SiteSettings};
pub use document::{Document, FeedItem};
pub use error::{Error, Result};
pub use feed::{Channel, Feed, RenderedFeeds};
pub use outcome::Outcome;
pub use pipeline::{BuiltItem, FeedPipeline, ItemStatus};
pub use provider::{BlockProvider, DirectoryProvider, StaticProvider};
