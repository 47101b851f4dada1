//! `hugolit_core` is the core library for hugolit. It turns a commented
//! source file into a Hugo markdown post: comments become text, code becomes
//! fenced code blocks, and Hugo shortcodes are wrapped around the parts so a
//! theme can render comments and code side by side.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source file
//!   → Classifier (tests each line: comment, block comment, front matter, divider, tags)
//!   → Converter (state machine, emits text and balanced `div` shortcodes)
//!   → Snippet loader (embeds animation exports referenced by `HYPE[…](…)`)
//!   → Project (reads sources, writes `<base>.md`, finds posts)
//! ```
//!
//! ## Document Conventions
//!
//! - Front matter comes first. Anything before it is dropped.
//! - `<!--more-->` ends the summary, exactly once.
//! - `/* */` blocks are single column prose.
//! - `//` comments are followed by the code they describe.
//!
//! ## Quick Start
//!
//! ```rust
//! use hugolit_core::ConvertOptions;
//! use hugolit_core::convert;
//!
//! let source = "/*\n+++\ntitle = \"Hello\"\n+++\nSummary.\n<!--more-->\nIntro.\n*/\n";
//! let markdown = convert(source, "hello", &ConvertOptions::default()).unwrap();
//! assert!(markdown.contains("{{< announcement >}}"));
//! ```

pub use config::*;
pub use converter::*;
pub use error::*;
pub use markers::*;
pub use snippet::*;

pub mod classifier;
pub mod config;
mod converter;
#[allow(unused_assignments)]
mod error;
mod markers;
pub mod project;
mod snippet;

#[cfg(test)]
mod __fixtures;
