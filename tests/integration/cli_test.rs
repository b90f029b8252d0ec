use clap::Parser;
use pkgtree::cli::Args;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::tempdir;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/app_deps.json");

/// Run the binary in `dir` with a Go environment that points nowhere
fn pkgtree(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pkgtree"))
        .args(args)
        .current_dir(dir)
        .env("GOROOT", "/nonexistent/goroot")
        .env("GOPATH", "/nonexistent/gopath")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run pkgtree")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from(["pkgtree"]);
    assert_eq!(args.pkg, None);
    assert!(!args.json);
    assert!(!args.ignore_std_pkg);
    assert!(!args.ignore_internal_pkg);
    assert!(!args.disable_show_id);

    let args = Args::parse_from([
        "pkgtree",
        "--json",
        "--ignore-std-pkg",
        "--ignore-internal-pkg",
        "--disable-show-id",
        "--output-file",
        "tree.json",
        "github.com/acme/tool",
    ]);
    assert_eq!(args.pkg.as_deref(), Some("github.com/acme/tool"));
    assert!(args.json);
    assert!(args.ignore_std_pkg);
    assert!(args.ignore_internal_pkg);
    assert!(args.disable_show_id);
    assert_eq!(args.output_file, Some(PathBuf::from("tree.json")));
}

#[test]
fn test_cli_rejects_unknown_flag() {
    assert!(Args::try_parse_from(["pkgtree", "--max-depth", "3"]).is_err());
}

#[test]
fn test_cli_quiet_verbose_conflict() {
    assert!(Args::try_parse_from(["pkgtree", "--quiet", "--verbose"]).is_err());
}

#[test]
fn test_text_output() {
    let dir = tempdir().unwrap();
    let output = pkgtree(
        dir.path(),
        &["--from-file", FIXTURE, "--ignore-std-pkg", "example.com/app"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        concat!(
            "example.com/app #=0\n",
            "  example.com/app/internal/config #=1\n",
            "  example.com/app/server #=6\n",
            "    example.com/app/internal/config #=1\n",
            "    github.com/pkg/log #=7\n",
        )
    );
}

#[test]
fn test_json_output_to_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("tree.json");
    let out_arg = out.to_string_lossy().into_owned();
    let output = pkgtree(
        dir.path(),
        &[
            "--from-file",
            FIXTURE,
            "--json",
            "--output-file",
            out_arg.as_str(),
            "github.com/pkg/log",
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());

    let written = std::fs::read_to_string(&out).unwrap();
    let tree: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(tree["id"], 0);
    assert_eq!(tree["pkg"], "github.com/pkg/log");
    assert_eq!(tree["dependencies"][0]["pkg"], "fmt");
    assert_eq!(tree["dependencies"][1]["pkg"], "io");
    assert_eq!(tree["dependencies"][1]["id"], 3);
    assert!(written.ends_with("}\n"));
}

#[test]
fn test_config_file_in_working_directory() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join(".pkgtree.toml"),
        "disable_show_id = true\nignore_std_pkg = true\nignore_internal_pkg = true\n",
    )
    .unwrap();

    let output = pkgtree(dir.path(), &["--from-file", FIXTURE, "example.com/app"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "example.com/app\n  example.com/app/server\n    github.com/pkg/log\n"
    );
}

#[test]
fn test_verbosity_from_config_file() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join(".pkgtree.toml"), "verbose = true\n").unwrap();

    let output = pkgtree(dir.path(), &["--from-file", FIXTURE, "example.com/app"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("resolved import graph"));
    assert!(stdout(&output).starts_with("example.com/app #=0\n"));
}

#[test]
fn test_default_verbosity_is_silent() {
    let dir = tempdir().unwrap();
    let output = pkgtree(dir.path(), &["--from-file", FIXTURE, "example.com/app"]);

    assert!(output.status.success());
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_quiet_from_config_file_conflicts_with_verbose_flag() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join(".pkgtree.toml"), "quiet = true\n").unwrap();

    let output = pkgtree(dir.path(), &["--from-file", FIXTURE, "-v", "example.com/app"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("--quiet and --verbose"));
}

#[test]
fn test_json_with_filtered_root_fails() {
    let dir = tempdir().unwrap();
    let output = pkgtree(
        dir.path(),
        &["--from-file", FIXTURE, "--json", "--ignore-std-pkg", "fmt"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("filtered out"));
}

#[test]
fn test_text_with_filtered_root_succeeds() {
    let dir = tempdir().unwrap();
    let output = pkgtree(
        dir.path(),
        &["--from-file", FIXTURE, "--ignore-std-pkg", "errors"],
    );

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_load_failure_exit_code() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let missing_arg = missing.to_string_lossy().into_owned();
    let output = pkgtree(
        dir.path(),
        &["--from-file", missing_arg.as_str(), "example.com/app"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("load example.com/app"));
}

#[test]
fn test_package_inference_outside_source_roots() {
    let dir = tempdir().unwrap();
    let output = pkgtree(dir.path(), &["--from-file", FIXTURE]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("not subdir of srcdirs"));
}

#[test]
fn test_package_inference_under_gopath() {
    let gopath = tempdir().unwrap();
    let package_dir = gopath.path().join("src").join("example.com").join("app");
    std::fs::create_dir_all(&package_dir).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_pkgtree"))
        .args(["--from-file", FIXTURE, "--disable-show-id", "--ignore-std-pkg", "."])
        .current_dir(&package_dir)
        .env("GOROOT", "/nonexistent/goroot")
        .env("GOPATH", gopath.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("example.com/app\n"));
    assert!(stderr(&output).contains("guess pkg name"));
    assert!(stderr(&output).contains("example.com/app"));
}

#[test]
fn test_init_writes_config() {
    let dir = tempdir().unwrap();
    let output = pkgtree(dir.path(), &["--init"]);

    assert!(output.status.success());
    let config = std::fs::read_to_string(dir.path().join(".pkgtree.toml")).unwrap();
    assert!(config.contains("ignore_std_pkg = false"));

    let again = pkgtree(dir.path(), &["--init"]);
    assert_eq!(again.status.code(), Some(2));
}
