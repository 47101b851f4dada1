use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::ConvertOptions;
use crate::HugolitError;
use crate::HugolitResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"hugolit.toml",
	".hugolit.toml",
	".config/hugolit.toml",
];

/// Environment variable naming the Hugo root directory.
pub const HUGO_DIR_ENV: &str = "HUGODIR";

/// Output directory used when neither a Hugo root nor an output directory
/// is configured.
pub const DEFAULT_OUT_DIR: &str = "out";

/// Code fence info string used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "go";

/// Extension of post source files used when none is configured.
pub const DEFAULT_EXTENSION: &str = "go";

/// Configuration loaded from a `hugolit.toml` file.
///
/// ```toml
/// # Output directory for plain mode.
/// out = "out"
/// # Hugo site root. Takes precedence over `out`.
/// hugo = "../site"
/// language = "go"
/// extension = "go"
/// ```
///
/// Relative paths are resolved against the directory holding the config.
#[derive(Debug, Default, Deserialize)]
pub struct HugolitConfig {
	/// Output directory. Posts and their resources live side by side.
	#[serde(default)]
	pub out: Option<PathBuf>,
	/// Hugo root directory. Posts go to `content/post`, resources are read
	/// from `static/media`.
	#[serde(default)]
	pub hugo: Option<PathBuf>,
	/// Code fence info string. Defaults to `go`.
	#[serde(default)]
	pub language: Option<String>,
	/// Extension of post source files. Defaults to `go`.
	#[serde(default)]
	pub extension: Option<String>,
}

impl HugolitConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> HugolitResult<Option<HugolitConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: HugolitConfig =
			toml::from_str(&content).map_err(|e| HugolitError::ConfigParse(e.to_string()))?;

		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}
}

/// Values given on the command line or through the environment. They take
/// precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct LayoutOverrides {
	/// `--out`
	pub out: Option<PathBuf>,
	/// `--hugo`
	pub hugo: Option<PathBuf>,
	/// `$HUGODIR`
	pub hugo_env: Option<PathBuf>,
}

/// Where posts are written and where their resources are found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
	/// Directory receiving `<base>.md`.
	pub post_dir: PathBuf,
	/// Directory holding `<base>/` resource folders.
	pub media_dir: PathBuf,
	/// Root of resource paths as the web server sees them.
	pub public_root: String,
}

impl OutputLayout {
	/// Posts and resources share one output directory.
	pub fn plain(out: impl Into<PathBuf>) -> Self {
		let out = out.into();
		Self {
			post_dir: out.clone(),
			media_dir: out,
			public_root: String::new(),
		}
	}

	/// Standard Hugo site layout below `root`.
	pub fn hugo(root: &Path) -> Self {
		Self {
			post_dir: root.join("content").join("post"),
			media_dir: root.join("static").join("media"),
			public_root: "media".to_string(),
		}
	}

	/// Pick the layout by precedence: `--hugo`, `$HUGODIR`, config `hugo`,
	/// `--out`, config `out`, then `./out`.
	pub fn resolve(root: &Path, config: Option<&HugolitConfig>, overrides: &LayoutOverrides) -> Self {
		let config_hugo = config.and_then(|c| c.hugo.as_ref()).map(|p| root.join(p));
		let config_out = config.and_then(|c| c.out.as_ref()).map(|p| root.join(p));

		if let Some(hugo) = overrides
			.hugo
			.clone()
			.or_else(|| overrides.hugo_env.clone())
			.or(config_hugo)
		{
			return Self::hugo(&hugo);
		}

		let out = overrides
			.out
			.clone()
			.or(config_out)
			.unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

		Self::plain(out)
	}

	/// Path of the markdown file for the post named `base_name`.
	pub fn post_path(&self, base_name: &str) -> PathBuf {
		self.post_dir.join(format!("{base_name}.md"))
	}
}

/// Everything the project operations need, resolved from config, flags and
/// environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	pub layout: OutputLayout,
	pub language: String,
	pub extension: String,
}

impl Settings {
	pub fn resolve(root: &Path, config: Option<&HugolitConfig>, overrides: &LayoutOverrides) -> Self {
		let layout = OutputLayout::resolve(root, config, overrides);
		let language = config
			.and_then(|c| c.language.clone())
			.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
		let extension = config
			.and_then(|c| c.extension.clone())
			.map(|ext| ext.trim_start_matches('.').to_string())
			.unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

		Self {
			layout,
			language,
			extension,
		}
	}

	pub fn convert_options(&self) -> ConvertOptions {
		ConvertOptions {
			public_root: self.layout.public_root.clone(),
			media_dir: self.layout.media_dir.clone(),
			code_language: self.language.clone(),
		}
	}
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			layout: OutputLayout::plain(DEFAULT_OUT_DIR),
			language: DEFAULT_LANGUAGE.to_string(),
			extension: DEFAULT_EXTENSION.to_string(),
		}
	}
}
