use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Run callwatch with given args.
fn callwatch() -> Command {
    cargo_bin_cmd!("callwatch")
}

// ─── Run command tests ───────────────────────────────────────────

#[test]
fn run_logs_each_call_in_order() {
    let output = callwatch()
        .args(["run", "save:1", "get:2", "save:3", "--quiet"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Called SaveUser method"));
    assert!(lines[1].contains("Called GetUser method"));
    assert!(lines[2].contains("Called SaveUser method"));
}

#[test]
fn stub_backend_never_misses() {
    callwatch()
        .args(["run", "get:999", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("response: SUCCESS"));
}

#[test]
fn memory_backend_logs_error_for_unsaved_user() {
    callwatch()
        .args(["run", "save:1", "get:4", "--backend", "memory", "--quiet"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Called GetUser method, response: ERROR")
                .and(predicate::str::contains(
                    "Called SaveUser method, response: SUCCESS",
                )),
        );
}

#[test]
fn memory_backend_finds_saved_user() {
    callwatch()
        .args(["run", "save:7", "get:7", "--backend", "memory", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("response: ERROR").not());
}

#[test]
fn invalid_call_spec_fails_before_any_call() {
    callwatch()
        .args(["run", "save:1", "drop:2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid call spec: 'drop:2'"))
        .stdout(predicate::str::contains("Called").not());
}

#[test]
fn unknown_backend_lists_available_ones() {
    callwatch()
        .args(["run", "save:1", "--backend", "postgres"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Unknown backend 'postgres'")
                .and(predicate::str::contains("stub, memory")),
        );
}

#[test]
fn verbose_narrates_calls() {
    callwatch()
        .args(["run", "get:9", "--backend", "memory", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("get_user(9) -> absent"));
}

#[test]
fn run_requires_at_least_one_call() {
    callwatch().arg("run").assert().failure();
}
