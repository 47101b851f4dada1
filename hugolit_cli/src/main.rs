use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;
use std::process;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use hugolit_cli::Commands;
use hugolit_cli::HugolitCli;
use hugolit_core::AnyEmptyResult;
use hugolit_core::HUGO_DIR_ENV;
use hugolit_core::HugolitConfig;
use hugolit_core::HugolitError;
use hugolit_core::LayoutOverrides;
use hugolit_core::Settings;
use hugolit_core::project::convert_all;
use hugolit_core::project::convert_file;
use hugolit_core::project::is_post_in_dir;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

/// Window in which further file events are folded into one conversion.
const DEBOUNCE: Duration = Duration::from_secs(1);

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = HugolitCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.debug, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Convert { files }) => run_convert(&args, files),
		Some(Commands::All { dir }) => run_all(&args, dir),
		Some(Commands::Watch { dir }) => run_watch(&args, dir),
		None => {
			eprintln!("No subcommand specified. Run `hugolit --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		report_error(e);
		process::exit(2);
	}
}

/// `RUST_LOG` wins when set. Otherwise `info`, or `debug` with `--debug`.
fn init_tracing(debug: bool, use_color: bool) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "info" }));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

/// Render through miette when the error comes from the core library.
fn report_error(e: Box<dyn std::error::Error>) {
	match e.downcast::<HugolitError>() {
		Ok(hugolit_err) => {
			let report: miette::Report = (*hugolit_err).into();
			eprintln!("{report:?}");
		}
		Err(e) => {
			eprintln!("{} {e}", colored!("error:", red));
		}
	}
}

fn resolve_root(args: &HugolitCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn resolve_settings(args: &HugolitCli) -> Result<Settings, HugolitError> {
	let root = resolve_root(args);
	let config = HugolitConfig::load(&root)?;
	let overrides = LayoutOverrides {
		out: args.out.clone(),
		hugo: args.hugo.clone(),
		hugo_env: std::env::var_os(HUGO_DIR_ENV)
			.filter(|value| !value.is_empty())
			.map(PathBuf::from),
	};

	let settings = Settings::resolve(&root, config.as_ref(), &overrides);
	tracing::debug!(
		post_dir = %settings.layout.post_dir.display(),
		media_dir = %settings.layout.media_dir.display(),
		"resolved output layout"
	);

	Ok(settings)
}

fn print_converted(source: &Path, output: &Path) {
	println!(
		"{} {} -> {}",
		colored!("converted", green),
		source.display(),
		output.display()
	);
}

fn run_convert(args: &HugolitCli, files: &[PathBuf]) -> AnyEmptyResult {
	let settings = resolve_settings(args)?;

	for file in files {
		let output = convert_file(file, &settings)?;
		print_converted(file, &output);
	}

	Ok(())
}

fn run_all(args: &HugolitCli, dir: &Path) -> AnyEmptyResult {
	let settings = resolve_settings(args)?;
	let outputs = convert_all(dir, &settings)?;

	if outputs.is_empty() {
		println!(
			"No posts found in {}. Posts live in `<name>/<name>.{}`.",
			dir.display(),
			settings.extension
		);
		return Ok(());
	}

	for output in &outputs {
		println!("{} {}", colored!("wrote", green), output.display());
	}
	println!(
		"\n{}",
		colored!(format!("Converted {} post(s).", outputs.len()), bold)
	);

	Ok(())
}

fn run_watch(args: &HugolitCli, dir: &Path) -> AnyEmptyResult {
	let settings = resolve_settings(args)?;
	// Events carry absolute paths.
	let dir = dir.canonicalize()?;
	let watch_error = |e: notify::Error| {
		HugolitError::Watch {
			path: dir.display().to_string(),
			reason: e.to_string(),
		}
	};

	let (tx, rx) = mpsc::channel();

	let mut watcher =
		notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
			match res {
				Ok(event)
					if matches!(
						event.kind,
						notify::EventKind::Modify(_) | notify::EventKind::Create(_)
					) =>
				{
					for path in event.paths {
						let _ = tx.send(path);
					}
				}
				Ok(_) => {}
				Err(e) => tracing::warn!("watch error: {e}"),
			}
		})
		.map_err(watch_error)?;

	use notify::Watcher;
	watcher
		.watch(&dir, notify::RecursiveMode::Recursive)
		.map_err(watch_error)?;

	println!(
		"Watching {} for changes to `<name>/<name>.{}`... (press Ctrl+C to stop)",
		dir.display(),
		settings.extension
	);

	loop {
		let mut changed = BTreeSet::new();
		changed.insert(rx.recv()?);

		// Debounce: collect additional events until the directory is quiet.
		while let Ok(path) = rx.recv_timeout(DEBOUNCE) {
			changed.insert(path);
		}

		for path in changed
			.into_iter()
			.filter(|path| is_post_in_dir(&dir, path, &settings.extension))
		{
			tracing::info!(file = %path.display(), "change detected");
			match convert_file(&path, &settings) {
				Ok(output) => print_converted(&path, &output),
				Err(e) => report_error(Box::new(e)),
			}
		}
	}
}
