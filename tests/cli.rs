use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FORM: &str = "\
title: Onboarding
pages:
  - title: Welcome
    body: Hello there.
  - title: Terms
    body: Read these.
    acknowledge: true
  - title: Done
";

fn stepper(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stepper").unwrap();
    cmd.env("STEPPER_CONFIG_DIR", config_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn write_form(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("form.yaml");
    std::fs::write(&path, FORM).unwrap();
    path
}

#[test]
fn inspect_prints_summary_and_table() {
    let config_dir = TempDir::new().unwrap();
    let form = write_form(&config_dir);

    stepper(&config_dir)
        .arg("inspect")
        .arg(&form)
        .args(["--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Onboarding"))
        .stdout(predicate::str::contains("Page 2 of 3: Terms"))
        .stdout(predicate::str::contains("Back button: shown"))
        .stdout(predicate::str::contains("completed"))
        .stdout(predicate::str::contains("required"));
}

#[test]
fn inspect_error_mode_hides_next() {
    let config_dir = TempDir::new().unwrap();
    let form = write_form(&config_dir);

    stepper(&config_dir)
        .arg("inspect")
        .arg(&form)
        .args(["--page", "2", "--error"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next button: hidden"))
        .stdout(predicate::str::contains("Error mode:  on"))
        .stdout(predicate::str::contains("errored"));
}

#[test]
fn inspect_rejects_out_of_range_page() {
    let config_dir = TempDir::new().unwrap();
    let form = write_form(&config_dir);

    stepper(&config_dir)
        .arg("inspect")
        .arg(&form)
        .args(["--page", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid page index 8"));
}

#[test]
fn new_writes_form_then_refuses_overwrite() {
    let config_dir = TempDir::new().unwrap();
    let path = config_dir.path().join("sample.json");

    stepper(&config_dir)
        .arg("new")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote example form"));
    assert!(path.exists());

    stepper(&config_dir)
        .arg("new")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    stepper(&config_dir)
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Getting started"));
}

#[test]
fn init_and_config_use_override_dir() {
    let config_dir = TempDir::new().unwrap();

    stepper(&config_dir).arg("init").assert().success();
    assert!(config_dir.path().join("config.json").exists());

    stepper(&config_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            config_dir.path().to_string_lossy().as_ref(),
        ))
        .stdout(predicate::str::contains("Tick rate:       250ms"));
}

#[test]
fn unknown_form_extension_fails() {
    let config_dir = TempDir::new().unwrap();
    let path = config_dir.path().join("form.toml");
    std::fs::write(&path, "").unwrap();

    stepper(&config_dir)
        .arg("inspect")
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn inspect_does_not_create_log_directory() {
    let config_dir = TempDir::new().unwrap();
    let form = write_form(&config_dir);

    stepper(&config_dir)
        .arg("inspect")
        .arg(&form)
        .assert()
        .success();
    assert!(!config_dir.path().join("logs").exists());
}

#[test]
fn unusable_config_dir_does_not_break_inspect_or_new() {
    let work_dir = TempDir::new().unwrap();
    let form = write_form(&work_dir);
    let not_a_dir = work_dir.path().join("occupied");
    std::fs::write(&not_a_dir, "a file, not a directory").unwrap();

    Command::cargo_bin("stepper")
        .unwrap()
        .env("STEPPER_CONFIG_DIR", &not_a_dir)
        .arg("inspect")
        .arg(&form)
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of 3: Welcome"));

    Command::cargo_bin("stepper")
        .unwrap()
        .env("STEPPER_CONFIG_DIR", &not_a_dir)
        .arg("new")
        .arg(work_dir.path().join("fresh.yaml"))
        .assert()
        .success();
}

#[test]
fn no_error_flag_overrides_form_error_mode() {
    let config_dir = TempDir::new().unwrap();
    let path = config_dir.path().join("errored.yaml");
    std::fs::write(
        &path,
        "pages:\n  - title: A\n  - title: B\noptions:\n  error: true\n",
    )
    .unwrap();

    stepper(&config_dir)
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Error mode:  on"));

    stepper(&config_dir)
        .arg("inspect")
        .arg(&path)
        .arg("--no-error")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error mode:  off"))
        .stdout(predicate::str::contains("Next button: shown"));
}
