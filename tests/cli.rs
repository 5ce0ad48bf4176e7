use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn hello(config: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("hello-base").expect("binary built");
    cmd.arg("--config").arg(config);
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn show_reports_a_folder() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("settings.toml");
    hello(&cfg)
        .arg("show")
        .arg(td.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("kind: folder"));
}

#[test]
fn ensure_mv_rm_round_trip() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("settings.toml");
    let a = td.path().join("a");
    let b = td.path().join("b");

    hello(&cfg).arg("ensure").arg(&a).assert().success();
    assert!(a.is_dir());
    hello(&cfg).arg("mv").arg(&a).arg(&b).assert().success();
    assert!(!a.exists() && b.is_dir());
    hello(&cfg).arg("rm").arg(&b).assert().success();
    assert!(!b.exists());
    hello(&cfg).arg("rm").arg(&b).assert().success();
}

#[test]
fn relative_argument_without_home_folder_fails() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("settings.toml");
    hello(&cfg)
        .args(["up", "folder/file.ext"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an absolute path"));
}

#[test]
fn relative_argument_uses_home_folder() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("settings.toml");
    let home = td.path().join("home");
    fs::write(&cfg, format!("home_folder = {:?}\n", home.display().to_string())).unwrap();

    hello(&cfg).args(["ensure", "sub/dir"]).assert().success();
    assert!(home.join("sub").join("dir").is_dir());
}

#[cfg(unix)]
#[test]
fn up_on_root_fails() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("settings.toml");
    hello(&cfg)
        .args(["up", "/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of bounds"));
}

#[test]
fn listen_binds_and_closes() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("settings.toml");
    hello(&cfg)
        .args(["listen", "--port", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("listening on port").and(predicate::str::contains("closed")));
}
