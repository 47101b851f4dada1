use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum HugolitError {
	#[error(transparent)]
	#[diagnostic(code(hugolit::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(hugolit::config_parse),
		help("check that hugolit.toml is valid TOML with `out`, `hugo`, `language` or `extension` keys")
	)]
	ConfigParse(String),

	#[error("cannot read source file `{path}`: {reason}")]
	#[diagnostic(code(hugolit::read_source))]
	ReadSource { path: String, reason: String },

	#[error("cannot write file `{path}`: {reason}")]
	#[diagnostic(
		code(hugolit::write_output),
		help("the output directory must already exist")
	)]
	WriteOutput { path: String, reason: String },

	#[error("found a HYPE tag but no valid path, in line:\n{line}")]
	#[diagnostic(
		code(hugolit::missing_animation_path),
		help("write the tag as `HYPE[description](animation.html)`")
	)]
	MissingAnimationPath { line: String },

	#[error(
		"**No Hype file found at {path}. Please run hugolit again after creating the Hype \
		 animation HTML export.** ({reason})"
	)]
	#[diagnostic(
		code(hugolit::snippet_unavailable),
		help("export the animation as HTML5 with \"Also save HTML file\" checked")
	)]
	SnippetUnavailable { path: String, reason: String },

	#[error("cannot watch `{path}`: {reason}")]
	#[diagnostic(code(hugolit::watch))]
	Watch { path: String, reason: String },
}

pub type HugolitResult<T> = Result<T, HugolitError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
