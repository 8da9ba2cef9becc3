//! Feed configuration.
//!
//! Configuration is an explicit value handed to the pipeline and the feed
//! builder. Site settings resolve field by field: the site-specific value when
//! it is set and non-blank, else the global default.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::{ComposeOptions, ExtractPolicy};
use crate::error::{Error, Result};

const DEFAULT_LANGUAGE: &str = "en-US";
const DEFAULT_MAX_ITEMS: usize = 10;
const DEFAULT_SUMMARY_LENGTH: usize = 200;
const DEFAULT_REFRESH_MINUTES: u64 = 10;

/// Site settings as written in the configuration file.
///
/// Every field is optional so the same shape serves both the global defaults
/// and the site-specific overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
	#[serde(default)]
	pub title: Option<String>,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub link: Option<String>,
	#[serde(default)]
	pub author: Option<String>,
	#[serde(default, alias = "lang")]
	pub language: Option<String>,
	#[serde(default)]
	pub sub_path: Option<String>,
	#[serde(default)]
	pub contact_email: Option<String>,
}

/// Fully resolved site settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
	pub title: String,
	pub description: String,
	/// Absolute base URL of the site, without a trailing slash.
	pub link: String,
	pub author: String,
	pub language: String,
	pub sub_path: String,
	pub contact_email: Option<String>,
}

impl SiteConfig {
	/// Resolves site settings against global defaults.
	pub fn resolve(site: &SiteSettings, defaults: &SiteSettings) -> Result<Self> {
		let link = pick(&site.link, &defaults.link).ok_or_else(|| Error::InvalidConfig("site link is not set".to_string()))?;
		let parsed = url::Url::parse(&link).map_err(|err| Error::InvalidConfig(format!("site link {link:?}: {err}")))?;
		if parsed.cannot_be_a_base() {
			return Err(Error::InvalidConfig(format!("site link {link:?} is not a base URL")));
		}

		Ok(Self {
			title: pick(&site.title, &defaults.title).unwrap_or_default(),
			description: pick(&site.description, &defaults.description).unwrap_or_default(),
			link: link.trim_end_matches('/').to_string(),
			author: pick(&site.author, &defaults.author).unwrap_or_default(),
			language: pick(&site.language, &defaults.language).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
			sub_path: pick(&site.sub_path, &defaults.sub_path).unwrap_or_default(),
			contact_email: pick(&site.contact_email, &defaults.contact_email),
		})
	}

	/// Canonical link of a document: `{link}/{slug}`.
	pub fn item_link(&self, slug: &str) -> String {
		join_link(&self.link, slug)
	}

	/// Link of the feed's home page: `{link}/{subPath}`.
	pub fn home_link(&self) -> String {
		if self.sub_path.trim_matches('/').is_empty() {
			self.link.clone()
		} else {
			join_link(&self.link, &self.sub_path)
		}
	}

	pub fn favicon(&self) -> String {
		join_link(&self.link, "favicon.png")
	}
}

/// Pipeline and output options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedOptions {
	/// Number of documents, most recent first, that become feed items.
	pub max_items: usize,
	/// Character cap of each item's plain-text description.
	pub summary_length: usize,
	/// Wrap each content fragment in the presentational container.
	pub wrap_container: bool,
	pub include_callouts: bool,
	pub include_toggles: bool,
	/// Regeneration is skipped when the RSS file is younger than this.
	pub refresh_interval_minutes: u64,
	/// Block trees fetched concurrently; item order is unaffected.
	pub fetch_concurrency: usize,
}

impl Default for FeedOptions {
	fn default() -> Self {
		Self {
			max_items: DEFAULT_MAX_ITEMS,
			summary_length: DEFAULT_SUMMARY_LENGTH,
			wrap_container: false,
			include_callouts: false,
			include_toggles: false,
			refresh_interval_minutes: DEFAULT_REFRESH_MINUTES,
			fetch_concurrency: 1,
		}
	}
}

impl FeedOptions {
	pub fn extract_policy(&self) -> ExtractPolicy {
		ExtractPolicy {
			include_callouts: self.include_callouts,
			include_toggles: self.include_toggles,
		}
	}

	pub fn compose_options(&self) -> ComposeOptions {
		ComposeOptions {
			summary_length: self.summary_length,
			wrap_container: self.wrap_container,
		}
	}

	pub fn refresh_interval(&self) -> Duration {
		Duration::from_secs(self.refresh_interval_minutes.saturating_mul(60))
	}
}

/// On-disk configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
	/// Global defaults shared by every site built from this configuration.
	#[serde(default)]
	pub defaults: SiteSettings,
	/// Site-specific overrides.
	#[serde(default)]
	pub site: SiteSettings,
	#[serde(default)]
	pub feed: FeedOptions,
}

impl ConfigFile {
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn load(path: &Path) -> Result<Self> {
		let json = std::fs::read_to_string(path)?;
		Self::from_json(&json)
	}

	pub fn site_config(&self) -> Result<SiteConfig> {
		SiteConfig::resolve(&self.site, &self.defaults)
	}
}

fn pick(site: &Option<String>, default: &Option<String>) -> Option<String> {
	site.as_deref()
		.filter(|value| !value.trim().is_empty())
		.or_else(|| default.as_deref().filter(|value| !value.trim().is_empty()))
		.map(|value| value.trim().to_string())
}

fn join_link(base: &str, path: &str) -> String {
	format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
