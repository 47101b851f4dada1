use std::path::Path;

use crate::HugolitError;
use crate::classifier::public_path;
use crate::classifier::rewrite_resource_attribute;

/// Marker comment that opens the embeddable part of an animation export.
pub const SNIPPET_START_MARKER: &str = "<!-- copy these lines to your document: -->";
/// Marker comment that closes the embeddable part of an animation export.
pub const SNIPPET_END_MARKER: &str = "<!-- end copy -->";

/// Load the embeddable HTML snippet from the animation export at `path`.
///
/// This never fails. When the file cannot be read, the returned text is a
/// warning that ends up in the rendered post, and the problem is logged.
pub fn load_snippet(path: &Path, base_name: &str, public_root: &str) -> String {
	match std::fs::read_to_string(path) {
		Ok(content) => extract_snippet(&content, base_name, public_root),
		Err(error) => {
			let error = HugolitError::SnippetUnavailable {
				path: path.display().to_string(),
				reason: error.to_string(),
			};
			tracing::warn!(path = %path.display(), "animation snippet unavailable: {error}");

			format!("{error}\n\n")
		}
	}
}

/// Extract the lines between the first start marker and the next end marker.
///
/// An end marker seen before any start marker is ignored, since exports can
/// contain several unrelated marked regions. Kept lines lose their leading
/// tabs and get their `src` attribute expanded to the post's public path.
pub fn extract_snippet(content: &str, base_name: &str, public_root: &str) -> String {
	let content = content.replace('\r', "");
	let prefix = format!("{}/", public_path(public_root, base_name, ""));
	let mut out = String::new();
	let mut in_snippet = false;

	for line in content.split('\n') {
		if line.contains(SNIPPET_START_MARKER) {
			in_snippet = true;
			continue;
		}

		if line.contains(SNIPPET_END_MARKER) && in_snippet {
			break;
		}

		if in_snippet {
			out.push_str(&rewrite_resource_attribute(
				line.trim_start_matches('\t'),
				&prefix,
			));
			out.push('\n');
		}
	}

	out.push('\n');
	out
}
