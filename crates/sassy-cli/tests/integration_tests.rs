//! Integration tests for sassy-cli.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PREAMBLE: &str = "@use \"sass\" as *;";
const SCSS_DIR: &str = "project/static/app/scss";

/// A `sassy` invocation isolated from the user's own configuration.
fn sassy(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sassy").unwrap();
    cmd.current_dir(root)
        .env("HOME", root)
        .env("XDG_CONFIG_HOME", root.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SASSY_STYLES__COMPILER");
    cmd
}

fn project_with(files: &[(&str, &[u8])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join(SCSS_DIR);
    fs::create_dir_all(&dir).unwrap();
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
    tmp
}

fn read(tmp: &TempDir, name: &str) -> String {
    fs::read_to_string(tmp.path().join(SCSS_DIR).join(name)).unwrap()
}

// ── general ───────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    let tmp = TempDir::new().unwrap();
    sassy(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("watch"));
}

#[test]
fn version_flag() {
    let tmp = TempDir::new().unwrap();
    sassy(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let tmp = TempDir::new().unwrap();
    sassy(tmp.path()).arg("compile").assert().code(2);
}

#[test]
fn no_color_env_accepts_conventional_values() {
    let tmp = TempDir::new().unwrap();
    for value in ["1", "yes", "true", "0", "false"] {
        sassy(tmp.path())
            .env("NO_COLOR", value)
            .args(["config", "path"])
            .assert()
            .success();
    }
}

// ── import ────────────────────────────────────────────────────────────────────

#[test]
fn import_prepends_only_where_missing() {
    let tmp = project_with(&[
        ("x.scss", b"body{}"),
        ("y.scss", b"@use \"sass\" as *;\nbody{}"),
    ]);

    sassy(tmp.path())
        .arg("import")
        .assert()
        .success()
        .stdout(predicate::str::contains("x.scss: preamble inserted"))
        .stdout(predicate::str::contains("y.scss: already present"));

    assert_eq!(read(&tmp, "x.scss"), format!("{PREAMBLE}\nbody{{}}"));
    assert_eq!(read(&tmp, "y.scss"), format!("{PREAMBLE}\nbody{{}}"));
}

#[test]
fn import_is_idempotent() {
    let tmp = project_with(&[("x.scss", b""), ("z.scss", b"@use \"sass\" as *;\r\n.a{}")]);

    sassy(tmp.path()).arg("import").assert().success();
    let once = (read(&tmp, "x.scss"), read(&tmp, "z.scss"));
    sassy(tmp.path()).arg("import").assert().success();
    let twice = (read(&tmp, "x.scss"), read(&tmp, "z.scss"));

    assert_eq!(once, twice);
    assert_eq!(once.0, format!("{PREAMBLE}\n"));
    assert_eq!(once.1, format!("{PREAMBLE}\n{PREAMBLE}\r\n.a{{}}"));
}

#[test]
fn unreadable_file_fails_batch_but_not_others() {
    let tmp = project_with(&[
        ("1.scss", b"a{}"),
        ("2.scss", &[0xff, 0xfe, 0x00]),
        ("3.scss", b"c{}"),
    ]);

    sassy(tmp.path())
        .arg("import")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("import failed for 1 of 3 path(s)"))
        .stderr(predicate::str::contains("2.scss"));

    assert!(read(&tmp, "1.scss").starts_with(PREAMBLE));
    assert!(read(&tmp, "3.scss").starts_with(PREAMBLE));
}

#[test]
fn import_dry_run_writes_nothing() {
    let tmp = project_with(&[("x.scss", b"body{}")]);

    sassy(tmp.path())
        .args(["import", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would insert preamble"));

    assert_eq!(read(&tmp, "x.scss"), "body{}");
}

#[test]
fn import_json_summary() {
    let tmp = project_with(&[("x.scss", b"body{}"), ("y.scss", b"@use \"sass\" as *;\n")]);

    let assert = sassy(tmp.path())
        .args(["--output-format", "json", "import"])
        .assert()
        .success();
    let summary: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(summary["operation"], "import");
    assert_eq!(summary["total"], 2);
    assert_eq!(summary["failed"].as_array().unwrap().len(), 0);
}

#[test]
fn root_flag_resolves_patterns() {
    let tmp = project_with(&[("x.scss", b"body{}")]);
    let elsewhere = TempDir::new().unwrap();

    sassy(elsewhere.path())
        .arg("-C")
        .arg(tmp.path())
        .arg("import")
        .assert()
        .success();

    assert!(read(&tmp, "x.scss").starts_with(PREAMBLE));
}

#[test]
fn no_matches_is_only_a_warning() {
    let tmp = TempDir::new().unwrap();
    sassy(tmp.path())
        .arg("import")
        .assert()
        .success()
        .stdout(predicate::str::contains("No paths match"));
}

// ── configuration errors ──────────────────────────────────────────────────────

#[test]
fn invalid_pattern_is_configuration_error() {
    let tmp = project_with(&[("x.scss", b"body{}")]);
    sassy(tmp.path())
        .env("SASSY_STYLES__SCSS_FILES", "project/[")
        .arg("import")
        .assert()
        .code(4);
    assert_eq!(read(&tmp, "x.scss"), "body{}");
}

#[test]
fn multi_line_preamble_is_configuration_error() {
    let tmp = project_with(&[("x.scss", b"body{}")]);
    fs::write(
        tmp.path().join("sassy.toml"),
        "[styles]\npreamble = \"@use 'a';\\n@use 'b';\"\n",
    )
    .unwrap();

    sassy(tmp.path()).arg("import").assert().code(4);
    assert_eq!(read(&tmp, "x.scss"), "body{}");
}

#[test]
fn malformed_config_file_is_configuration_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("sassy.toml"), "[styles\n").unwrap();
    sassy(tmp.path()).arg("build").assert().code(4);
}

#[test]
fn missing_explicit_config_is_configuration_error() {
    let tmp = TempDir::new().unwrap();
    sassy(tmp.path())
        .args(["--config", "nope.toml", "build"])
        .assert()
        .code(4);
}

// ── config / init ─────────────────────────────────────────────────────────────

#[test]
fn init_then_config_get() {
    let tmp = TempDir::new().unwrap();

    sassy(tmp.path()).arg("init").assert().success();
    assert!(tmp.path().join("sassy.toml").is_file());

    // refuses to overwrite without --force
    sassy(tmp.path()).arg("init").assert().code(2);
    sassy(tmp.path()).args(["init", "--force"]).assert().success();

    sassy(tmp.path())
        .args(["config", "get", "styles.css_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("../styles"));
}

#[test]
fn env_overrides_project_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("sassy.toml"), "[styles]\ncompiler = \"dart\"\n").unwrap();

    sassy(tmp.path())
        .args(["config", "get", "styles.compiler"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dart"));

    sassy(tmp.path())
        .env("SASSY_STYLES__COMPILER", "/opt/sass/sass")
        .args(["config", "get", "styles.compiler"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/opt/sass/sass"));
}

#[test]
fn unknown_config_key() {
    let tmp = TempDir::new().unwrap();
    sassy(tmp.path())
        .args(["config", "get", "styles.nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

// ── build ─────────────────────────────────────────────────────────────────────

#[test]
fn build_dry_run_prints_command_lines() {
    let tmp = project_with(&[]);
    sassy(tmp.path())
        .args(["build", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "sass project/static/app/scss:project/static/app/styles \
             --load-path=project/sass --style=expanded --no-source-map",
        ));
}

#[cfg(unix)]
#[test]
fn build_succeeds_when_compiler_exits_zero() {
    let tmp = project_with(&[]);
    sassy(tmp.path())
        .env("SASSY_STYLES__COMPILER", "true")
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "compiled to project/static/app/styles",
        ));
}

#[cfg(unix)]
#[test]
fn build_fails_when_compiler_fails() {
    let tmp = project_with(&[]);
    fs::create_dir_all(tmp.path().join("project/static/blog/scss")).unwrap();

    sassy(tmp.path())
        .env("SASSY_STYLES__COMPILER", "false")
        .arg("build")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("build failed for 2 of 2 path(s)"));
}

#[cfg(unix)]
#[test]
fn build_reports_missing_compiler() {
    let tmp = project_with(&[]);
    fs::write(
        tmp.path().join("sassy.toml"),
        "[styles]\ncompiler = \"sassy-missing-compiler\"\n",
    )
    .unwrap();

    sassy(tmp.path())
        .arg("build")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("sassy-missing-compiler"));
}

#[test]
fn build_without_directories_succeeds() {
    let tmp = TempDir::new().unwrap();
    sassy(tmp.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("No paths match"));
}

// ── watch ─────────────────────────────────────────────────────────────────────

#[cfg(unix)]
#[test]
fn watch_ends_when_every_watcher_exits() {
    let tmp = project_with(&[]);
    sassy(tmp.path())
        .env("SASSY_STYLES__COMPILER", "true")
        .args(["watch", "--poll-interval", "20"])
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success();
}

#[cfg(unix)]
#[test]
fn watch_reports_failed_watcher() {
    let tmp = project_with(&[]);
    sassy(tmp.path())
        .env("SASSY_STYLES__COMPILER", "false")
        .args(["watch", "--poll-interval", "20"])
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("watch failed for 1 of 1 path(s)"));
}

#[cfg(unix)]
#[test]
fn watch_json_output_is_only_the_summary() {
    let tmp = project_with(&[]);
    let assert = sassy(tmp.path())
        .env("SASSY_STYLES__COMPILER", "true")
        .args(["--output-format", "json", "watch", "--poll-interval", "20"])
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success();
    let summary: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(summary["operation"], "watch");
    assert_eq!(summary["total"], 1);
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn completions_for_bash() {
    let tmp = TempDir::new().unwrap();
    sassy(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sassy"));
}
