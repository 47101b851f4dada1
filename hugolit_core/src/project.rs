//! File level operations: convert one post, find posts below a directory,
//! convert them all.
//!
//! A post lives in a directory named after it, e.g. `intro/intro.go`. Other
//! source files in that directory are not part of the post.

use std::path::Path;
use std::path::PathBuf;

use crate::HugolitError;
use crate::HugolitResult;
use crate::config::Settings;
use crate::converter::convert;

/// The file name without its extension.
pub fn base_name(path: &Path) -> String {
	path.file_stem()
		.map(|stem| stem.to_string_lossy().into_owned())
		.unwrap_or_default()
}

/// Read `path`, convert it and write `<post_dir>/<base>.md`. The post
/// directory must already exist. Returns the written path.
pub fn convert_file(path: &Path, settings: &Settings) -> HugolitResult<PathBuf> {
	let source = std::fs::read_to_string(path).map_err(|e| HugolitError::ReadSource {
		path: path.display().to_string(),
		reason: e.to_string(),
	})?;

	let base = base_name(path);
	let markdown = convert(&source, &base, &settings.convert_options())?;
	let output = settings.layout.post_path(&base);

	std::fs::write(&output, markdown).map_err(|e| HugolitError::WriteOutput {
		path: output.display().to_string(),
		reason: e.to_string(),
	})?;

	tracing::debug!(source = %path.display(), output = %output.display(), "converted post");

	Ok(output)
}

/// Returns `true` when `path` looks like `name/name.<extension>`.
pub fn is_post_file(path: &Path, extension: &str) -> bool {
	let Some(parent) = path.parent().and_then(Path::file_name) else {
		return false;
	};

	path.extension().is_some_and(|ext| ext == extension)
		&& path.file_stem().is_some_and(|stem| stem == parent)
}

/// Returns `true` when `path` is `<dir>/name/name.<extension>`. Deeper
/// nesting below `dir` does not count.
pub fn is_post_in_dir(dir: &Path, path: &Path, extension: &str) -> bool {
	path.parent().and_then(Path::parent) == Some(dir) && is_post_file(path, extension)
}

/// Find every `name/name.<extension>` file in the immediate subdirectories of
/// `dir`, sorted by path.
pub fn find_posts(dir: &Path, extension: &str) -> HugolitResult<Vec<PathBuf>> {
	let mut posts = Vec::new();

	for entry in std::fs::read_dir(dir)? {
		let entry = entry?;
		if !entry.file_type()?.is_dir() {
			continue;
		}

		let mut file_name = entry.file_name();
		file_name.push(".");
		file_name.push(extension);
		let file = entry.path().join(file_name);

		if file.is_file() {
			posts.push(file);
		} else {
			tracing::debug!(file = %file.display(), "skipping non-existent post file");
		}
	}

	posts.sort();
	Ok(posts)
}

/// Convert every post found by [`find_posts`]. Stops at the first failure.
pub fn convert_all(dir: &Path, settings: &Settings) -> HugolitResult<Vec<PathBuf>> {
	let posts = find_posts(dir, &settings.extension)?;
	let mut outputs = Vec::with_capacity(posts.len());

	for post in posts {
		tracing::info!(file = %post.display(), "converting");
		outputs.push(convert_file(&post, settings)?);
	}

	Ok(outputs)
}
