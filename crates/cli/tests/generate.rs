//! Integration tests for the `generate` and `preview` commands.
//!
//! Each test builds an isolated site (config, document listing, block trees)
//! in a temporary directory and runs the compiled binary against it.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::{Value, json};
use tempfile::TempDir;

fn blockfeed_binary() -> PathBuf {
	PathBuf::from(env!("CARGO_BIN_EXE_blockfeed"))
}

struct Site {
	dir: TempDir,
}

impl Site {
	fn new(documents: usize) -> Self {
		let dir = tempfile::tempdir().expect("tempdir should be created");
		let root = dir.path();

		let config = json!({
			"defaults": { "link": "https://global.example", "author": "Global", "lang": "en-US" },
			"site": { "title": "Field Notes", "description": "Notes", "link": "https://blog.example", "contactEmail": "ada@blog.example" },
			"feed": { "fetchConcurrency": 3 }
		});
		std::fs::write(root.join("blockfeed.json"), config.to_string()).unwrap();

		let listing: Vec<Value> = (0..documents)
			.map(|n| json!({ "id": format!("doc-{n}"), "title": format!("Post {n}"), "slug": format!("post-{n}"), "publishDay": 1_700_000_000_000i64 - n as i64 * 86_400_000 }))
			.collect();
		std::fs::write(root.join("posts.json"), Value::Array(listing).to_string()).unwrap();

		std::fs::create_dir_all(root.join("blocks")).unwrap();
		for n in 0..documents {
			let tree = json!({
				"block": {
					"page": { "value": { "type": "page", "properties": { "title": [[format!("Post {n}")]] } } },
					"h": { "value": { "type": "header", "properties": { "title": [[format!("Heading {n} 🚀")]] } } },
					"img": { "value": { "type": "image", "properties": { "title": [["photo.png"]] } } },
					"p": { "value": { "type": "text", "properties": { "title": [["Body with "], ["<b>", [["b"]]], [" & more"]] } } }
				}
			});
			std::fs::write(root.join("blocks").join(format!("doc-{n}.json")), tree.to_string()).unwrap();
		}

		Self { dir }
	}

	fn root(&self) -> &Path {
		self.dir.path()
	}

	fn out(&self) -> PathBuf {
		self.root().join("public").join("rss")
	}

	fn run(&self, args: &[&str]) -> (bool, Value, String) {
		let output = Command::new(blockfeed_binary())
			.current_dir(self.root())
			.args(args)
			.output()
			.expect("failed to execute blockfeed");

		let stdout = String::from_utf8_lossy(&output.stdout).to_string();
		let stderr = String::from_utf8_lossy(&output.stderr).to_string();
		let json = serde_json::from_str(&stdout).unwrap_or(Value::Null);
		(output.status.success(), json, stderr)
	}

	fn generate(&self, extra: &[&str]) -> (bool, Value, String) {
		let mut args = vec!["generate", "--documents", "posts.json", "--blocks", "blocks"];
		args.extend_from_slice(extra);
		self.run(&args)
	}
}

#[test]
fn generates_three_feed_files_with_first_ten_documents() {
	let site = Site::new(15);
	let (success, json, stderr) = site.generate(&[]);

	assert!(success, "generate failed: {stderr}");
	assert_eq!(json["ok"], Value::Bool(true));
	assert_eq!(json["data"]["items"], Value::from(10));
	assert_eq!(json["data"]["written"].as_array().map(Vec::len), Some(3));

	let rss = std::fs::read_to_string(site.out().join("feed.xml")).unwrap();
	assert_eq!(rss.matches("<item>").count(), 10);
	assert!(rss.contains("<link>https://blog.example/post-0</link>"));
	assert!(!rss.contains("post-10"));
	let first = rss.find("post-0").unwrap();
	let last = rss.find("post-9").unwrap();
	assert!(first < last);

	assert!(rss.contains("<![CDATA[<h3>Heading 0</h3><p>Body with <b> & more</p>]]>"));
	assert!(!rss.contains("photo.png"));

	let atom = std::fs::read_to_string(site.out().join("atom.xml")).unwrap();
	assert_eq!(atom.matches("<entry>").count(), 10);

	let feed: Value = serde_json::from_str(&std::fs::read_to_string(site.out().join("feed.json")).unwrap()).unwrap();
	assert_eq!(feed["items"].as_array().map(Vec::len), Some(10));
	assert_eq!(feed["items"][0]["summary"], "Heading 0Body with  & more");
}

#[test]
fn missing_block_tree_yields_notice_item() {
	let site = Site::new(2);
	std::fs::remove_file(site.root().join("blocks").join("doc-1.json")).unwrap();

	let (success, json, stderr) = site.generate(&[]);

	assert!(success, "generate failed: {stderr}");
	assert_eq!(json["data"]["items"], Value::from(2));
	assert_eq!(json["data"]["degraded"][0]["link"], "https://blog.example/post-1");

	let rss = std::fs::read_to_string(site.out().join("feed.xml")).unwrap();
	assert!(rss.contains("<title>Post 1</title>"));
	assert!(rss.contains(r#"<a href="https://blog.example/post-1">View the original post</a>"#));
}

#[test]
fn skips_when_feed_is_fresh_unless_forced() {
	let site = Site::new(1);
	let (success, _, stderr) = site.generate(&[]);
	assert!(success, "generate failed: {stderr}");

	let (success, json, _) = site.generate(&[]);
	assert!(success);
	assert_eq!(json["data"]["skipped"], Value::Bool(true));

	let (success, json, _) = site.generate(&["--force"]);
	assert!(success);
	assert_eq!(json["data"]["skipped"], Value::Bool(false));
}

#[test]
fn preview_prints_composed_content() {
	let site = Site::new(1);
	let (success, json, stderr) = site.run(&["preview", "doc-0", "--blocks", "blocks", "--slug", "post-0"]);

	assert!(success, "preview failed: {stderr}");
	assert_eq!(json["data"]["content"], "<h3>Heading 0</h3><p>Body with <b> & more</p>");
	assert_eq!(json["data"]["link"], "https://blog.example/post-0");
	assert_eq!(json["data"]["status"], "Rendered");
}

#[test]
fn missing_config_fails() {
	let site = Site::new(1);
	let (success, _, stderr) = site.run(&["-c", "nope.json", "generate", "--documents", "posts.json", "--blocks", "blocks"]);

	assert!(!success);
	assert!(stderr.contains("command failed"), "stderr: {stderr}");
}
