//! Feed file persistence and the freshness check.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing::debug;

use crate::error::Result;
use crate::feed::RenderedFeeds;

pub const RSS_FILE: &str = "feed.xml";
pub const ATOM_FILE: &str = "atom.xml";
pub const JSON_FILE: &str = "feed.json";

/// Returns `true` when `path` was modified less than `interval` ago.
///
/// A missing or unreadable file counts as stale.
pub fn is_recently_updated(path: &Path, interval: Duration) -> bool {
	let Ok(modified) = fs::metadata(path).and_then(|meta| meta.modified()) else {
		return false;
	};
	match SystemTime::now().duration_since(modified) {
		Ok(age) => age < interval,
		// modified in the future; treat as fresh
		Err(_) => true,
	}
}

impl RenderedFeeds {
	/// Writes `feed.xml`, `atom.xml` and `feed.json` into `dir`.
	pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
		fs::create_dir_all(dir)?;

		let mut written = Vec::with_capacity(3);
		for (name, body) in [(RSS_FILE, &self.rss), (ATOM_FILE, &self.atom), (JSON_FILE, &self.json)] {
			let path = dir.join(name);
			fs::write(&path, body)?;
			debug!(target = "blockfeed.output", path = %path.display(), bytes = body.len(), "wrote feed file");
			written.push(path);
		}
		Ok(written)
	}
}
