/// Shortcode placed right after the summary divider.
pub const ANNOUNCEMENT: &str = "{{< announcement >}}";

/// Structural regions of a converted post. Each one is rendered as a Hugo
/// `div` shortcode pair that the theme uses for layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
	/// Wraps everything after the front matter.
	Document,
	Summary,
	Intro,
	/// A run of comment/code pairs rendered side by side.
	Source,
	/// One comment column plus its code column.
	CodeCommentPair,
	Comment,
	Code,
	/// Single column prose.
	Doc,
}

impl Marker {
	pub const fn name(self) -> &'static str {
		match self {
			Self::Document => "hugolit",
			Self::Summary => "summary doc",
			Self::Intro => "intro doc",
			Self::Source => "source",
			Self::CodeCommentPair => "ccpair",
			Self::Comment => "comment",
			Self::Code => "code",
			Self::Doc => "doc",
		}
	}

	/// `{{< div NAME >}}`
	pub fn open_tag(self) -> String {
		format!("{{{{< div {} >}}}}", self.name())
	}

	/// `{{< divend >}} <!--NAME-->`
	pub fn close_tag(self) -> String {
		format!("{{{{< divend >}}}} <!--{}-->", self.name())
	}
}

/// Append-only output buffer that keeps track of open markers.
///
/// Markers close in reverse order of opening. Closing a marker first closes
/// everything opened after it, and [`MarkerWriter::finish`] closes whatever
/// is still open, so the output is balanced no matter where the input ends.
#[derive(Debug, Default)]
pub struct MarkerWriter {
	out: String,
	open: Vec<Marker>,
}

impl MarkerWriter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn open(&mut self, marker: Marker) {
		self.line(&marker.open_tag());
		self.open.push(marker);
	}

	/// Close `marker` and anything nested inside it. Does nothing when the
	/// marker is not open.
	pub fn close(&mut self, marker: Marker) {
		if !self.open.contains(&marker) {
			return;
		}

		while let Some(top) = self.open.pop() {
			self.line(&top.close_tag());
			if top == marker {
				break;
			}
		}
	}

	/// Append `text` followed by a newline.
	pub fn line(&mut self, text: &str) {
		self.out.push_str(text);
		self.out.push('\n');
	}

	/// Append `text` as is.
	pub fn raw(&mut self, text: &str) {
		self.out.push_str(text);
	}

	/// Close all open markers and return the output.
	pub fn finish(mut self) -> String {
		while let Some(marker) = self.open.pop() {
			self.line(&marker.close_tag());
		}

		self.out
	}
}
