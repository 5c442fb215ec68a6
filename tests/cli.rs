use assert_cmd::prelude::*;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

use std::fs;
use std::path::Path;
use std::process::Command;

fn hlogoc() -> Command {
    Command::cargo_bin("hlogoc").unwrap()
}

fn write_source(dir: &Path, name: &str, source: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, source).unwrap();
    path
}

#[test]
fn writes_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(dir.path(), "line.hlogo", "FD 10\n");

    hlogoc().arg(&input).assert().success();

    let got = fs::read_to_string(dir.path().join("line.hlogo.py")).unwrap();
    assert_eq!(got, "import turtle\nt = turtle.Turtle()\n\nt.forward(10)\n\nturtle.mainloop()\n");
}

#[test]
fn writes_to_explicit_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(dir.path(), "pen.hlogo", "PU PD");
    let output = dir.path().join("pen.py");

    hlogoc().arg(&input).arg("-o").arg(&output).assert().success();

    assert!(fs::read_to_string(&output).unwrap().contains("t.penup()\nt.pendown()\n"));
    assert!(!dir.path().join("pen.hlogo.py").exists());
}

#[test]
fn syntax_error_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(dir.path(), "broken.hlogo", "FD 10\nif (1 < 2) { PD\n");

    hlogoc()
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("SyntaxError")
                .and(predicate::str::contains("broken.hlogo:2:16")),
        );

    assert!(!dir.path().join("broken.hlogo.py").exists());
}

#[test]
fn reserved_name_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(dir.path(), "clash.hlogo", "def None() { PU }\n");

    hlogoc()
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("NameError").and(predicate::str::contains("\"None\"")));

    assert!(!dir.path().join("clash.hlogo.py").exists());
}

#[test]
fn debug_log_names_error_position() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(dir.path(), "clash.hlogo", "FD 1\nfor t in range(2) { PU }\n");

    hlogoc()
        .env("RUST_LOG", "hlogoc=debug")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "clash.hlogo:2:1: NameError: name \"t\" is reserved in the generated program",
        ));
}

#[test]
fn failure_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(dir.path(), "keep.hlogo", "FD }");
    let output = dir.path().join("keep.hlogo.py");
    fs::write(&output, "previous").unwrap();

    hlogoc().arg(&input).assert().failure();

    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn missing_input_is_usage_error() {
    hlogoc().assert().failure().code(2).stderr(predicate::str::contains("Usage"));
}

#[test]
fn unreadable_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    hlogoc()
        .arg(dir.path().join("missing.hlogo"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("could not read source file"));
}

#[test]
fn prints_ast() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(dir.path(), "tree.hlogo", "PD");

    hlogoc()
        .arg(&input)
        .arg("--ast")
        .assert()
        .success()
        .stdout(predicate::eq("program\n  PEN \"PD\"\n"));
}

#[test]
fn writes_dot_graph() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(dir.path(), "graph.hlogo", "FD 1");
    let dot = dir.path().join("tree.dot");

    hlogoc().arg(&input).arg("--dot").arg(&dot).assert().success();

    let got = fs::read_to_string(&dot).unwrap();
    assert!(got.starts_with("digraph program {\n    rankdir=TD;\n"), "{got}");
    assert!(got.contains("[label=\"MOVEMENT \\\"FD\\\"\"]"), "{got}");
}
