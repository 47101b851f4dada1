mod common;

use hugolit_core::AnyEmptyResult;

#[test]
fn convert_writes_post_to_out_dir() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let source = common::write_post(tmp.path(), "intro")?;
	let out = tmp.path().join("public");
	std::fs::create_dir_all(&out)?;

	common::hugolit_cmd()
		.arg("convert")
		.arg(&source)
		.arg("--out")
		.arg(&out)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("converted"))
		.stdout(predicates::str::contains("intro.md"));

	let markdown = std::fs::read_to_string(out.join("intro.md"))?;
	assert!(markdown.starts_with("+++\ntitle = \"Intro\"\n+++\n{{< div hugolit >}}\n"));
	assert!(markdown.contains("See ![Chart](/intro/chart.png)."));
	assert!(markdown.contains("```go\nfunc hello() {}\n"));
	assert!(markdown.ends_with("{{< divend >}} <!--hugolit-->\n"));

	Ok(())
}

#[test]
fn convert_uses_hugo_layout() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let source = common::write_post(tmp.path(), "intro")?;
	let site = tmp.path().join("site");
	std::fs::create_dir_all(site.join("content/post"))?;

	common::hugolit_cmd()
		.arg("convert")
		.arg(&source)
		.arg("--hugo")
		.arg(&site)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let markdown = std::fs::read_to_string(site.join("content/post/intro.md"))?;
	assert!(markdown.contains("See ![Chart](/media/intro/chart.png)."));

	Ok(())
}

#[test]
fn convert_reads_hugo_dir_from_environment() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let source = common::write_post(tmp.path(), "intro")?;
	let site = tmp.path().join("site");
	std::fs::create_dir_all(site.join("content/post"))?;

	common::hugolit_cmd()
		.env("HUGODIR", &site)
		.arg("convert")
		.arg(&source)
		.arg("--out")
		.arg(tmp.path().join("ignored"))
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	assert!(site.join("content/post/intro.md").is_file());
	assert!(!tmp.path().join("ignored").exists());

	Ok(())
}

#[test]
fn convert_reads_config_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let source = common::write_post(tmp.path(), "intro")?;
	std::fs::create_dir_all(tmp.path().join("public"))?;
	std::fs::write(
		tmp.path().join("hugolit.toml"),
		"out = \"public\"\nlanguage = \"golang\"\n",
	)?;

	common::hugolit_cmd()
		.arg("convert")
		.arg(&source)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let markdown = std::fs::read_to_string(tmp.path().join("public/intro.md"))?;
	assert!(markdown.contains("```golang\n"));

	Ok(())
}

#[test]
fn convert_reports_invalid_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let source = common::write_post(tmp.path(), "intro")?;
	std::fs::write(tmp.path().join("hugolit.toml"), "out = [")?;

	common::hugolit_cmd()
		.arg("convert")
		.arg(&source)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to parse config file"));

	Ok(())
}

#[test]
fn convert_reports_missing_source() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::hugolit_cmd()
		.arg("convert")
		.arg(tmp.path().join("missing/missing.go"))
		.arg("--out")
		.arg(tmp.path())
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("cannot read source file"));

	Ok(())
}

#[test]
fn convert_reports_missing_output_dir() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let source = common::write_post(tmp.path(), "intro")?;

	common::hugolit_cmd()
		.arg("convert")
		.arg(&source)
		.arg("--out")
		.arg(tmp.path().join("does-not-exist"))
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("cannot write file"));

	Ok(())
}

#[test]
fn no_subcommand_exits_with_usage_hint() {
	common::hugolit_cmd()
		.assert()
		.code(1)
		.stderr(predicates::str::contains("No subcommand specified"));
}
