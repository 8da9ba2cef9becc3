//! Fallback notice shown when a document's content cannot be inlined.

/// Builds the notice fragment pointing readers at `link`.
pub fn notice_html(link: &str) -> String {
	format!(
		r#"<p>This post could not be rendered in your feed reader. <a href="{}">View the original post</a>.</p>"#,
		escape_attr(link)
	)
}

fn escape_attr(value: &str) -> String {
	value
		.replace('&', "&amp;")
		.replace('"', "&quot;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn links_to_original() {
		let html = notice_html("https://blog.example/post");
		assert!(html.contains(r#"href="https://blog.example/post""#));
		assert!(html.contains("View the original post"));
	}

	#[test]
	fn escapes_link_attribute() {
		let html = notice_html(r#"https://blog.example/?a=1&b="2""#);
		assert!(html.contains("a=1&amp;b=&quot;2&quot;"));
	}
}
