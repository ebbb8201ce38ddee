//! バイナリを実際に起動する E2E テスト

use regex::Regex;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_make-misc-data"));
    cmd.env_remove("MISC_DATA_ROOT").env_remove("MISC_DATA_LOG_FILE");
    cmd
}

fn run_with_root(root: &Path) -> Output {
    bin().arg("--root").arg(root).output().unwrap()
}

fn read_updated(path: &Path) -> String {
    let text = fs::read_to_string(path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    let obj = v.as_object().unwrap();
    assert_eq!(obj.len(), 1, "exactly one key: {}", text);
    obj["updated"].as_str().unwrap().to_string()
}

#[test]
fn writes_status_when_data_dir_exists() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("data")).unwrap();

    let out = run_with_root(tmp.path());
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stdout.is_empty());

    let target = tmp.path().join("data").join("auto.json");
    let text = fs::read_to_string(&target).unwrap();
    let re = Regex::new(r#"^\{\n    "updated": "\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}"\n\}$"#).unwrap();
    assert!(re.is_match(&text), "content={:?}", text);
}

#[test]
fn second_run_overwrites_and_is_not_earlier() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("data")).unwrap();
    let target = tmp.path().join("data").join("auto.json");

    assert!(run_with_root(tmp.path()).status.success());
    let first = read_updated(&target);
    assert!(run_with_root(tmp.path()).status.success());
    let second = read_updated(&target);

    assert!(second >= first, "first={} second={}", first, second);
    assert_eq!(fs::read_dir(tmp.path().join("data")).unwrap().count(), 1);
}

#[test]
fn fails_when_data_dir_is_missing() {
    let tmp = tempfile::tempdir().unwrap();

    let out = run_with_root(tmp.path());
    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(74));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("make-misc-data: "), "stderr={}", stderr);
    assert!(!tmp.path().join("data").exists());
}

#[test]
fn no_arguments_writes_one_level_above_invocation_dir() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("data")).unwrap();
    fs::create_dir(tmp.path().join("scripts")).unwrap();

    let out = bin().current_dir(tmp.path().join("scripts")).output().unwrap();
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));
    read_updated(&tmp.path().join("data").join("auto.json"));
    assert!(!tmp.path().join("scripts").join("data").exists());
}

#[cfg(unix)]
#[test]
fn symlinked_target_is_written_through() {
    let tmp = tempfile::tempdir().unwrap();
    let data = tmp.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("real.json"), "old").unwrap();
    std::os::unix::fs::symlink(data.join("real.json"), data.join("auto.json")).unwrap();

    let out = run_with_root(tmp.path());
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));
    assert!(fs::symlink_metadata(data.join("auto.json")).unwrap().file_type().is_symlink());
    read_updated(&data.join("real.json"));
}

#[test]
fn readonly_target_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let data = tmp.path().join("data");
    fs::create_dir(&data).unwrap();
    let target = data.join("auto.json");
    fs::write(&target, "old").unwrap();
    let mut perms = fs::metadata(&target).unwrap().permissions();
    perms.set_readonly(true);
    fs::set_permissions(&target, perms).unwrap();

    let out = run_with_root(tmp.path());
    assert_eq!(out.status.code(), Some(74));
    assert_eq!(fs::read_to_string(&target).unwrap(), "old");
}

#[test]
fn root_can_come_from_environment() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("data")).unwrap();

    let out = bin().env("MISC_DATA_ROOT", tmp.path()).output().unwrap();
    assert!(out.status.success());
    read_updated(&tmp.path().join("data").join("auto.json"));
}

#[test]
fn output_option_writes_exact_file() {
    let tmp = tempfile::tempdir().unwrap();
    let target = tmp.path().join("status.json");

    let out = bin().arg("-o").arg(&target).output().unwrap();
    assert!(out.status.success());
    read_updated(&target);
}

#[test]
fn dry_run_prints_without_writing() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("data")).unwrap();

    let out = bin().arg("--dry-run").arg("--root").arg(tmp.path()).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let v: serde_json::Value = serde_json::from_str(stdout.trim_end()).unwrap();
    assert!(v["updated"].is_string());
    assert!(!tmp.path().join("data").join("auto.json").exists());
}

#[test]
fn verbose_and_log_file_record_the_write() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("data")).unwrap();
    let log_file = tmp.path().join("logs").join("misc-data.jsonl");

    let out = bin()
        .arg("-v")
        .arg("--root")
        .arg(tmp.path())
        .env("MISC_DATA_LOG_FILE", &log_file)
        .output()
        .unwrap();
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("[info] status written"), "stderr={}", stderr);

    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.lines().all(|l| serde_json::from_str::<serde_json::Value>(l).is_ok()));
    assert!(log.contains("\"message\":\"status written\""));
}

#[test]
fn invalid_argument_exits_with_usage() {
    let out = bin().arg("--no-such-flag").output().unwrap();
    assert_eq!(out.status.code(), Some(64));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage: make-misc-data"), "stderr={}", stderr);
}

#[test]
fn help_exits_zero() {
    let out = bin().arg("--help").output().unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("data/auto.json"));
}
