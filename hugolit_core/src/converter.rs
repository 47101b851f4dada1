use std::borrow::Cow;
use std::path::PathBuf;

use relative_path::RelativePath;

use crate::HugolitError;
use crate::HugolitResult;
use crate::classifier::find_animation_reference;
use crate::classifier::is_block_comment_end;
use crate::classifier::is_block_comment_start;
use crate::classifier::is_line_comment;
use crate::classifier::is_metadata_delimiter;
use crate::classifier::is_preformatted;
use crate::classifier::is_summary_divider;
use crate::classifier::rewrite_image_paths;
use crate::classifier::strip_block_comment_start;
use crate::classifier::strip_line_comment;
use crate::config::DEFAULT_LANGUAGE;
use crate::config::DEFAULT_OUT_DIR;
use crate::markers::ANNOUNCEMENT;
use crate::markers::Marker;
use crate::markers::MarkerWriter;
use crate::snippet::load_snippet;

/// Appended after every embedded animation snippet.
pub const ANIMATION_FALLBACK_NOTICE: &str = "<noscript class=\"nohype\"><em>Please enable \
                                             JavaScript to view the animation.</em></noscript>\n";

const CLOSING_FENCE: &str = "```\n\n";

/// Where the converter is in the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConversionState {
	/// Everything before the opening front matter delimiter is discarded.
	#[default]
	BeforeMetadata,
	Metadata,
	Summary,
	Intro,
	/// Inside a `/* */` documentation block after the intro.
	ProseBlock,
	/// Inside a run of `//` comments that belong to the following code.
	CommentBlock,
	CodeBlock,
	/// After a documentation block, before the next comment.
	Neutral,
}

impl ConversionState {
	/// Image and animation tags are only expanded in these states.
	pub fn resolves_resources(self) -> bool {
		matches!(self, Self::ProseBlock | Self::CommentBlock | Self::Intro)
	}
}

/// Options for a single conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
	/// Root of the public resource paths, e.g. `media` for
	/// `/media/<base>/image.png`. Empty for `/<base>/image.png`.
	pub public_root: String,
	/// Directory holding one folder of resources per post. Animation exports
	/// are read from `<media_dir>/<base>/<file>`.
	pub media_dir: PathBuf,
	/// Info string of the code fences.
	pub code_language: String,
}

impl Default for ConvertOptions {
	fn default() -> Self {
		Self {
			public_root: String::new(),
			media_dir: PathBuf::from(DEFAULT_OUT_DIR),
			code_language: DEFAULT_LANGUAGE.to_string(),
		}
	}
}

/// Convert a commented source file into a Hugo markdown post.
///
/// `base_name` is the post's name and is used to expand resource paths. The
/// conversion is a single forward pass and always produces balanced
/// structural markers. The only failure is an animation tag without a path.
pub fn convert(document: &str, base_name: &str, options: &ConvertOptions) -> HugolitResult<String> {
	let document = document.replace('\r', "");
	let mut converter = Converter::new(base_name, options);

	for line in document.split('\n') {
		converter.process_line(line)?;
	}

	Ok(converter.finish())
}

struct Converter<'a> {
	base_name: &'a str,
	options: &'a ConvertOptions,
	state: ConversionState,
	writer: MarkerWriter,
}

impl<'a> Converter<'a> {
	fn new(base_name: &'a str, options: &'a ConvertOptions) -> Self {
		Self {
			base_name,
			options,
			state: ConversionState::default(),
			writer: MarkerWriter::new(),
		}
	}

	/// Rewrites resources first, then decides the transition on the rewritten
	/// line.
	fn process_line(&mut self, line: &str) -> HugolitResult<()> {
		let line = if self.state.resolves_resources() {
			let rewritten = rewrite_image_paths(line, self.base_name, &self.options.public_root);

			if let Some(snippet) = self.resolve_animation(&rewritten)? {
				self.writer.raw(&snippet);
				return Ok(());
			}

			rewritten
		} else {
			Cow::Borrowed(line)
		};

		self.transition(&line);
		Ok(())
	}

	fn resolve_animation(&self, line: &str) -> HugolitResult<Option<String>> {
		if is_preformatted(line) {
			return Ok(None);
		}

		let Some(reference) = find_animation_reference(line) else {
			return Ok(None);
		};

		if reference.path.is_empty() {
			return Err(HugolitError::MissingAnimationPath {
				line: line.to_string(),
			});
		}

		// Leading separators and `.` segments are dropped so the export is
		// always read from below the post's media folder.
		let path = RelativePath::new(reference.path)
			.normalize()
			.to_path(self.options.media_dir.join(self.base_name));
		let mut snippet = load_snippet(&path, self.base_name, &self.options.public_root);
		snippet.push_str(ANIMATION_FALLBACK_NOTICE);

		Ok(Some(snippet))
	}

	fn transition(&mut self, line: &str) {
		match self.state {
			ConversionState::BeforeMetadata => {
				if is_metadata_delimiter(line) {
					self.writer.line(line);
					self.enter(ConversionState::Metadata);
				}
			}
			ConversionState::Metadata => {
				self.writer.line(line);
				if is_metadata_delimiter(line) {
					self.writer.open(Marker::Document);
					self.writer.open(Marker::Summary);
					self.enter(ConversionState::Summary);
				}
			}
			ConversionState::Summary => {
				if is_summary_divider(line) {
					self.writer.close(Marker::Summary);
					self.writer.raw("\n");
					self.writer.line(line);
					self.writer.raw("\n");
					self.writer.line(ANNOUNCEMENT);
					self.writer.open(Marker::Intro);
					self.enter(ConversionState::Intro);
				} else {
					self.writer.line(line);
				}
			}
			ConversionState::Intro => {
				if is_block_comment_end(line) {
					self.writer.close(Marker::Intro);
					self.enter(ConversionState::Neutral);
				} else {
					self.writer.line(line);
				}
			}
			ConversionState::Neutral => {
				if is_line_comment(line) {
					self.writer.open(Marker::Source);
					self.start_comment(line);
				} else if is_block_comment_start(line) {
					self.start_prose(line);
				} else {
					self.writer.line(line);
				}
			}
			ConversionState::CommentBlock => {
				if is_line_comment(line) {
					self.writer.line(strip_line_comment(line));
				} else {
					self.writer.close(Marker::Comment);
					self.writer.open(Marker::Code);
					self.writer.raw(&format!("\n```{}\n", self.options.code_language));
					self.writer.line(line);
					self.enter(ConversionState::CodeBlock);
				}
			}
			ConversionState::CodeBlock => {
				if is_line_comment(line) {
					self.end_code();
					self.start_comment(line);
				} else if is_block_comment_start(line) {
					self.end_code();
					self.writer.close(Marker::Source);
					self.start_prose(line);
				} else {
					self.writer.line(line);
				}
			}
			ConversionState::ProseBlock => {
				if is_block_comment_end(line) {
					self.writer.close(Marker::Doc);
					self.enter(ConversionState::Neutral);
				} else {
					self.writer.line(line);
				}
			}
		}
	}

	/// Opens a comment/code pair. The `source` region must already be open.
	fn start_comment(&mut self, line: &str) {
		self.writer.open(Marker::CodeCommentPair);
		self.writer.open(Marker::Comment);
		self.writer.line(strip_line_comment(line));
		self.enter(ConversionState::CommentBlock);
	}

	fn start_prose(&mut self, line: &str) {
		self.writer.open(Marker::Doc);
		self.writer.line(strip_block_comment_start(line));
		self.enter(ConversionState::ProseBlock);
	}

	fn end_code(&mut self) {
		self.writer.raw(CLOSING_FENCE);
		self.writer.close(Marker::Code);
		self.writer.close(Marker::CodeCommentPair);
	}

	fn enter(&mut self, next: ConversionState) {
		tracing::debug!(from = ?self.state, to = ?next, "state transition");
		self.state = next;
	}

	fn finish(mut self) -> String {
		if self.state == ConversionState::CodeBlock {
			self.writer.raw("\n```\n");
		}

		self.writer.finish()
	}
}
