//! Block-tree providers.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Error, Result};

/// Source of raw block trees, addressed by document id.
#[async_trait]
pub trait BlockProvider: Send + Sync {
	async fn fetch_blocks(&self, document_id: &str) -> Result<Value>;
}

/// Reads `{root}/{document_id}.json`.
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
	root: PathBuf,
}

impl DirectoryProvider {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	fn path_for(&self, document_id: &str) -> Result<PathBuf> {
		if document_id.is_empty() || document_id.contains(['/', '\\']) || document_id.starts_with('.') {
			return Err(Error::provider(document_id, "document id is not a plain file name"));
		}
		Ok(self.root.join(format!("{document_id}.json")))
	}
}

#[async_trait]
impl BlockProvider for DirectoryProvider {
	async fn fetch_blocks(&self, document_id: &str) -> Result<Value> {
		let path = self.path_for(document_id)?;
		let raw = tokio::fs::read_to_string(&path)
			.await
			.map_err(|err| Error::provider(document_id, format!("{}: {err}", path.display())))?;
		serde_json::from_str(&raw).map_err(|err| Error::provider(document_id, err))
	}
}

/// In-memory provider keyed by document id.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
	trees: HashMap<String, Value>,
}

impl StaticProvider {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_tree(mut self, document_id: impl Into<String>, tree: Value) -> Self {
		self.trees.insert(document_id.into(), tree);
		self
	}
}

#[async_trait]
impl BlockProvider for StaticProvider {
	async fn fetch_blocks(&self, document_id: &str) -> Result<Value> {
		self.trees
			.get(document_id)
			.cloned()
			.ok_or_else(|| Error::provider(document_id, "no block tree"))
	}
}
