//! Line-local lexical checks used by the converter.
//!
//! Every function here looks at a single line and nothing else. The patterns
//! are compiled once per process and shared.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Captures;
use regex::Regex;
use relative_path::RelativePath;

/// Token that separates the summary from the rest of a post.
pub const SUMMARY_DIVIDER: &str = "<!--more-->";

static PREFORMATTED: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"`|^ {4,}|^\t").expect("valid preformatted pattern"));

static LINE_COMMENT: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(?:\s*//)+\s?").expect("valid line comment pattern"));

static BLOCK_COMMENT_START: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\s*/\*\s?").expect("valid block comment start pattern"));

static BLOCK_COMMENT_END: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\*/\s*$").expect("valid block comment end pattern"));

static METADATA_DELIMITER: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\s*\+\+\+|---\s*$").expect("valid metadata delimiter pattern"));

static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"(?P<head>!\[[^\]]+\]\( *)(?P<path>[^")]*?)(?P<tail> *(?:"[^"]*" *)?\))"#)
		.expect("valid image pattern")
});

static ANIMATION: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"HYPE\[[^\]]+\]\( *(?P<path>[^)]*?) *\)").expect("valid animation pattern")
});

static SRC_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"(?P<attr>src=")(?P<value>.*\.hyperesources/)"#).expect("valid src pattern")
});

/// A markdown image tag found in a line, e.g. `![alt](path/to.png "Title")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageReference<'a> {
	/// The complete tag.
	pub full: &'a str,
	/// The path segment. May contain spaces.
	pub path: &'a str,
	/// Everything after the path: an optional title and the closing paren.
	pub trailing: &'a str,
}

/// An animation tag found in a line, e.g. `HYPE[Intro](intro.html)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationReference<'a> {
	/// The referenced export file. Empty when the tag has no path.
	pub path: &'a str,
}

/// Returns `true` for lines that start with `//`.
pub fn is_line_comment(line: &str) -> bool {
	LINE_COMMENT.is_match(line)
}

/// Remove the leading `//` delimiters and one following whitespace character.
///
/// Repeated delimiters (`// // text`) are removed together so that stripping
/// an already stripped line changes nothing.
pub fn strip_line_comment(line: &str) -> &str {
	LINE_COMMENT
		.find(line)
		.map_or(line, |found| &line[found.end()..])
}

/// Returns `true` for lines that open a `/*` comment.
pub fn is_block_comment_start(line: &str) -> bool {
	BLOCK_COMMENT_START.is_match(line)
}

/// Remove the opening `/*` delimiter and one following whitespace character.
pub fn strip_block_comment_start(line: &str) -> &str {
	BLOCK_COMMENT_START
		.find(line)
		.map_or(line, |found| &line[found.end()..])
}

/// Returns `true` for lines that end with `*/`.
pub fn is_block_comment_end(line: &str) -> bool {
	BLOCK_COMMENT_END.is_match(line)
}

/// Matches both the opening and the closing front matter delimiter (`+++` for
/// TOML, `---` for YAML). Callers track which one they are looking at.
pub fn is_metadata_delimiter(line: &str) -> bool {
	METADATA_DELIMITER.is_match(line)
}

pub fn is_summary_divider(line: &str) -> bool {
	line.contains(SUMMARY_DIVIDER)
}

/// Returns `true` for inline code, indented code and tab-indented lines.
/// Tags inside such lines are shown as text and must not be rewritten.
pub fn is_preformatted(line: &str) -> bool {
	PREFORMATTED.is_match(line)
}

pub fn find_image_reference(line: &str) -> Option<ImageReference<'_>> {
	let captures = IMAGE.captures(line)?;
	Some(ImageReference {
		full: captures.get(0)?.as_str(),
		path: captures.name("path")?.as_str(),
		trailing: captures.name("tail")?.as_str(),
	})
}

pub fn find_animation_reference(line: &str) -> Option<AnimationReference<'_>> {
	let captures = ANIMATION.captures(line)?;
	Some(AnimationReference {
		path: captures.name("path").map_or("", |path| path.as_str()),
	})
}

/// Build the public path of a post resource: `/<public_root>/<base_name>/<file>`.
///
/// Empty segments are skipped and `.`/`..` are resolved lexically, so an empty
/// `public_root` yields `/<base_name>/<file>`.
pub fn public_path(public_root: &str, base_name: &str, file: &str) -> String {
	let joined = RelativePath::new(public_root.trim_matches('/'))
		.join(base_name)
		.join(file.trim());
	format!("/{}", joined.normalize())
}

/// Expand the path of every image tag in `line` to its public location.
///
/// Only the path segment changes; alt text and title are kept verbatim.
/// Preformatted lines are returned untouched.
pub fn rewrite_image_paths<'a>(line: &'a str, base_name: &str, public_root: &str) -> Cow<'a, str> {
	if is_preformatted(line) {
		return Cow::Borrowed(line);
	}

	IMAGE.replace_all(line, |captures: &Captures<'_>| {
		format!(
			"{}{}{}",
			&captures["head"],
			public_path(public_root, base_name, &captures["path"]),
			&captures["tail"]
		)
	})
}

/// Prepend `prefix` to the `src="….hyperesources/` attribute of an HTML
/// fragment. The rest of the fragment is left as is.
pub fn rewrite_resource_attribute<'a>(fragment: &'a str, prefix: &str) -> Cow<'a, str> {
	SRC_ATTRIBUTE.replace_all(fragment, |captures: &Captures<'_>| {
		format!("{}{prefix}{}", &captures["attr"], &captures["value"])
	})
}
