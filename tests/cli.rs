use assert_cmd::prelude::{CommandCargoExt, OutputAssertExt};
use predicates::prelude::predicate;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Stand-in for git: records its argv and `$HOME` next to itself.
/// Uses only shell builtins, since it may run with no `PATH` at all.
const FAKE_TOOL: &str = r#"#!/bin/sh
printf '%s\n' "$0" "$@" > "${0%/*}/argv"
printf '%s' "${HOME-unset}" > "${0%/*}/home"
"#;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Sandbox {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn work(&self) -> PathBuf {
        let w = self.path().join("work");
        fs::create_dir_all(&w).unwrap();
        w
    }

    fn bin_with(&self, dir: &str, name: &str) -> PathBuf {
        let bin = self.path().join(dir);
        fs::create_dir_all(&bin).unwrap();
        let tool = bin.join(name);
        fs::write(&tool, FAKE_TOOL).unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();
        bin
    }

    fn cmd(&self, search: &str) -> Command {
        let mut cmd = Command::cargo_bin("git-touch").unwrap();
        cmd.current_dir(self.work())
            .env_clear()
            .env("PATH", search)
            .env("HOME", "/home/tester")
            .env("GIT_TOUCH_CONFIG", self.path().join("no-config.toml"));
        cmd
    }
}

fn recorded_argv(bin: &Path) -> Vec<String> {
    fs::read_to_string(bin.join("argv"))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn entries(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn creates_parents_and_file_then_runs_git_add() {
    let sb = Sandbox::new();
    let bin = sb.bin_with("bin", "git");

    sb.cmd(bin.to_str().unwrap())
        .arg("a/b/c/file.txt")
        .assert()
        .success();

    let work = sb.work();
    assert!(work.join("a").is_dir());
    assert!(work.join("a/b").is_dir());
    assert!(work.join("a/b/c").is_dir());
    assert_eq!(fs::metadata(work.join("a/b/c/file.txt")).unwrap().len(), 0);

    let argv = recorded_argv(&bin);
    assert_eq!(
        argv,
        vec![
            bin.join("git").display().to_string(),
            "add".to_string(),
            "a/b/c/file.txt".to_string()
        ]
    );
}

#[test]
fn git_gets_an_empty_environment_by_default() {
    let sb = Sandbox::new();
    let bin = sb.bin_with("bin", "git");

    sb.cmd(bin.to_str().unwrap()).arg("f").assert().success();

    assert_eq!(fs::read_to_string(bin.join("home")).unwrap(), "unset");
}

#[test]
fn inherit_env_flag_passes_environment() {
    let sb = Sandbox::new();
    let bin = sb.bin_with("bin", "git");

    sb.cmd(bin.to_str().unwrap())
        .args(["--inherit-env", "f"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(bin.join("home")).unwrap(), "/home/tester");
}

#[test]
fn second_run_is_idempotent() {
    let sb = Sandbox::new();
    let bin = sb.bin_with("bin", "git");
    let target = sb.work().join("notes.md");

    sb.cmd(bin.to_str().unwrap()).arg("notes.md").assert().success();
    fs::write(&target, "keep me").unwrap();

    sb.cmd(bin.to_str().unwrap())
        .arg("notes.md")
        .assert()
        .success()
        .stderr(predicate::str::contains("file exists"));

    assert_eq!(fs::read_to_string(&target).unwrap(), "keep me");
}

#[test]
fn bare_filename_creates_no_directories() {
    let sb = Sandbox::new();
    let bin = sb.bin_with("bin", "git");

    sb.cmd(bin.to_str().unwrap()).arg("plain.txt").assert().success();

    let work = sb.work();
    assert_eq!(entries(&work), 1);
    assert!(work.join("plain.txt").is_file());
}

#[test]
fn missing_argument_is_a_usage_error() {
    let sb = Sandbox::new();
    let bin = sb.bin_with("bin", "git");

    sb.cmd(bin.to_str().unwrap())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));

    assert_eq!(entries(&sb.work()), 0);
    assert!(!bin.join("argv").exists());
}

#[test]
fn extra_arguments_are_a_usage_error() {
    let sb = Sandbox::new();
    let bin = sb.bin_with("bin", "git");

    sb.cmd(bin.to_str().unwrap())
        .args(["one/a", "two/b"])
        .assert()
        .failure()
        .code(2);

    assert_eq!(entries(&sb.work()), 0);
}

#[test]
fn tool_not_found_after_file_is_created() {
    let sb = Sandbox::new();
    let other = sb.bin_with("other", "gitk");

    sb.cmd(other.to_str().unwrap())
        .arg("d/new.txt")
        .assert()
        .failure()
        .code(libc::ENOENT)
        .stderr(predicate::str::contains("couldn't find git executable in path"));

    assert!(sb.work().join("d/new.txt").is_file());
}

#[test]
fn unlistable_search_dir_aborts_instead_of_skipping() {
    let sb = Sandbox::new();
    let bin = sb.bin_with("bin", "git");
    let missing = sb.path().join("missing");
    let search = format!("{}:{}", missing.display(), bin.display());

    sb.cmd(&search)
        .arg("f")
        .assert()
        .failure()
        .code(libc::ENOENT)
        .stderr(predicate::str::contains("cannot open directory"));

    assert!(!bin.join("argv").exists());
}

#[test]
fn config_file_selects_another_tool() {
    let sb = Sandbox::new();
    let bin = sb.bin_with("bin", "hg");
    let cfg = sb.path().join("config.toml");
    fs::write(&cfg, "tool = \"hg\"\n").unwrap();

    sb.cmd(bin.to_str().unwrap())
        .env("GIT_TOUCH_CONFIG", &cfg)
        .arg("f")
        .assert()
        .success();

    assert_eq!(recorded_argv(&bin)[1..], ["add", "f"]);
}

#[test]
fn require_executable_skips_name_only_matches() {
    let sb = Sandbox::new();
    let fake = sb.path().join("fake");
    fs::create_dir_all(fake.join("git")).unwrap();
    let bin = sb.bin_with("bin", "git");
    let search = format!("{}:{}", fake.display(), bin.display());

    sb.cmd(&search)
        .args(["--require-executable", "f"])
        .assert()
        .success();

    assert!(bin.join("argv").exists());
}

#[test]
fn version_flag() {
    let sb = Sandbox::new();
    sb.cmd("")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("git-touch "));
}
