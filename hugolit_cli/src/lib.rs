use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Turn commented source files into Hugo posts.",
	long_about = "hugolit converts a source file whose comments are written in markdown into a \
	              Hugo post. Line comments and the code below them are rendered side by side, \
	              block comments become single column prose.\n\nQuick start:\n  hugolit convert \
	              intro/intro.go   Convert one post\n  hugolit all .                    Convert \
	              every <name>/<name>.go\n  hugolit watch .                  Convert posts as \
	              they change"
)]
pub struct HugolitCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory. The config file is searched here.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Output directory for posts and their resources.
	#[arg(long, short, global = true)]
	pub out: Option<PathBuf>,

	/// Hugo root directory. Overrides `--out` and the `HUGODIR` environment
	/// variable.
	#[arg(long, global = true)]
	pub hugo: Option<PathBuf>,

	/// Enable debug logging.
	#[arg(long, short, global = true, default_value_t = false)]
	pub debug: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Convert the given source files.
	Convert {
		/// Source files to convert.
		#[arg(required = true)]
		files: Vec<PathBuf>,
	},
	/// Convert every `<name>/<name>.<ext>` file below a directory.
	All {
		/// Directory whose subdirectories hold the posts.
		#[arg(default_value = ".")]
		dir: PathBuf,
	},
	/// Watch a directory and convert posts whenever they change.
	Watch {
		/// Directory whose subdirectories hold the posts.
		#[arg(default_value = ".")]
		dir: PathBuf,
	},
}
