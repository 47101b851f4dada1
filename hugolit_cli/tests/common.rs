use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub const POST: &str = "/*\n+++\ntitle = \"Intro\"\n+++\nThe summary.\n<!--more-->\nSee \
                        ![Chart](chart.png).\n*/\n\n// Say hello.\nfunc hello() {}\n";

pub fn hugolit_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("hugolit"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("HUGODIR");
	cmd.env_remove("RUST_LOG");
	cmd
}

/// Creates `<root>/<name>/<name>.go` holding [`POST`].
pub fn write_post(root: &std::path::Path, name: &str) -> std::io::Result<std::path::PathBuf> {
	let dir = root.join(name);
	std::fs::create_dir_all(&dir)?;
	let file = dir.join(format!("{name}.go"));
	std::fs::write(&file, POST)?;
	Ok(file)
}
