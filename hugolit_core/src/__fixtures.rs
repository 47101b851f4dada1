use crate::ConvertOptions;
use crate::Marker;

/// Front matter, summary, intro and a single comment/code pair that runs to
/// the end of the file.
pub const MINIMAL_DOCUMENT: &str = r#"//go:build ignore
/*
+++
title = "Minimal"
+++
A short summary.
<!--more-->
The intro.
*/

// Say hello.
func hello() {}
"#;

pub const MINIMAL_MARKDOWN: &str = r#"+++
title = "Minimal"
+++
{{< div hugolit >}}
{{< div summary doc >}}
A short summary.
{{< divend >}} <!--summary doc-->

<!--more-->

{{< announcement >}}
{{< div intro doc >}}
The intro.
{{< divend >}} <!--intro doc-->

{{< div source >}}
{{< div ccpair >}}
{{< div comment >}}
Say hello.
{{< divend >}} <!--comment-->
{{< div code >}}

```go
func hello() {}


```
{{< divend >}} <!--code-->
{{< divend >}} <!--ccpair-->
{{< divend >}} <!--source-->
{{< divend >}} <!--hugolit-->
"#;

/// Exercises every state: pairs after pairs, prose after code, images in the
/// summary and the intro, and an image shown as inline code.
pub const FULL_DOCUMENT: &str = r#"/*
License text before the front matter.

+++
title = "Pairs"
date = "2016-04-25"
+++

A summary with ![Logo](logo.png).

<!--more-->

Intro with ![Diagram](a diagram.png "The Diagram").
Shown as text: `![Literal](raw.png)`.
*/

// ## Imports

package main

import "fmt"

// greet prints a greeting.
// It has two comment lines.
func greet() {
	fmt.Println("hi")
}

/*
## Prose

Some prose.
*/

// main calls greet.
func main() {
	greet()
}
"#;

/// Header shared by documents that only care about what follows the intro.
pub const HEADER: &str = "/*\n+++\ntitle = \"Test\"\n+++\nSummary.\n<!--more-->\n";

/// The same header as emitted by the converter.
pub const HEADER_MARKDOWN: &str = "+++\ntitle = \"Test\"\n+++\n{{< div hugolit >}}\n{{< div \
                                   summary doc >}}\nSummary.\n{{< divend >}} <!--summary \
                                   doc-->\n\n<!--more-->\n\n{{< announcement >}}\n{{< div intro \
                                   doc >}}\n";

/// An animation export with the snippet markers, CRLF line endings and tab
/// indentation.
pub const ANIMATION_EXPORT: &str = "<!DOCTYPE html>\r\n<!-- end copy -->\r\n<head>\r\n\t<!-- \
                                    copy these lines to your document: -->\r\n\t<div \
                                    id=\"intro_hype_container\" \
                                    style=\"position:relative;width:600px\">\r\n\t\t<script \
                                    type=\"text/javascript\" charset=\"utf-8\" \
                                    src=\"intro.hyperesources/intro_hype_generated_script.js?\
                                    71837\"></script>\r\n\t</div>\r\n\t<!-- end copy -->\r\n\t\
                                    <p>not copied</p>\r\n</head>\r\n";

/// The snippet extracted from [`ANIMATION_EXPORT`] for the post `anim` with
/// the `media` public root.
pub const ANIMATION_SNIPPET: &str = "<div id=\"intro_hype_container\" \
                                     style=\"position:relative;width:600px\">\n<script \
                                     type=\"text/javascript\" charset=\"utf-8\" \
                                     src=\"/media/anim/intro.hyperesources/\
                                     intro_hype_generated_script.js?71837\"></script>\n</div>\n\n";

pub fn media_options() -> ConvertOptions {
	ConvertOptions {
		public_root: "media".to_string(),
		..ConvertOptions::default()
	}
}

pub const ALL_MARKERS: [Marker; 8] = [
	Marker::Document,
	Marker::Summary,
	Marker::Intro,
	Marker::Source,
	Marker::CodeCommentPair,
	Marker::Comment,
	Marker::Code,
	Marker::Doc,
];

/// Checks that every marker line opens and closes in LIFO order and that
/// nothing is left open.
pub fn assert_nested(markdown: &str) {
	let mut stack: Vec<&str> = Vec::new();

	for line in markdown.lines() {
		if let Some(name) = line
			.strip_prefix("{{< div ")
			.and_then(|rest| rest.strip_suffix(" >}}"))
		{
			stack.push(name);
		} else if let Some(name) = line
			.strip_prefix("{{< divend >}} <!--")
			.and_then(|rest| rest.strip_suffix("-->"))
		{
			let top = stack.pop();
			assert_eq!(top, Some(name), "unexpected close of `{name}` in:\n{markdown}");
		}
	}

	assert!(stack.is_empty(), "markers left open: {stack:?} in:\n{markdown}");

	for marker in ALL_MARKERS {
		assert_eq!(
			markdown.matches(&marker.open_tag()).count(),
			markdown.matches(&marker.close_tag()).count(),
			"unbalanced `{}`",
			marker.name()
		);
	}
}
