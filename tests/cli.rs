use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn is_dag() -> Command {
    Command::new(env!("CARGO_BIN_EXE_is_dag"))
}

fn write_graph(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("utf8 stderr")
}

#[test]
fn cli_prints_one_line_per_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let ring = write_graph(tmp.path(), "ring.txt", "3\n0b010 0b100 0b001\n");
    let diamond = write_graph(tmp.path(), "diamond.txt", "3\n0b110 0b100 0b000\n");

    let assert = is_dag().arg(&ring).arg(&diamond).assert().success();
    let stdout = stdout_of(assert.get_output());

    assert_eq!(
        stdout,
        format!(
            "{} is a dag? 0\n{} is a dag? 1\n",
            ring.display(),
            diamond.display()
        )
    );
}

#[test]
fn cli_without_files_prints_usage_and_fails() {
    let assert = is_dag().assert().code(1);
    let output = assert.get_output();

    assert!(output.stdout.is_empty());
    assert!(stderr_of(output).contains("Usage"));
}

#[test]
fn cli_stops_at_first_unreadable_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let good = write_graph(tmp.path(), "good.txt", "1\n0\n");
    let missing = tmp.path().join("missing.txt");
    let later = write_graph(tmp.path(), "later.txt", "1\n1\n");

    let assert = is_dag()
        .arg(&good)
        .arg(&missing)
        .arg(&later)
        .assert()
        .code(1);
    let output = assert.get_output();

    assert_eq!(
        stdout_of(output),
        format!("{} is a dag? 1\n", good.display())
    );
    let stderr = stderr_of(output);
    assert!(stderr.contains(&format!(
        "Error reading digraph from file {}",
        missing.display()
    )));
    assert!(!stdout_of(output).contains("later.txt"));
}

#[test]
fn cli_reports_invalid_graphs_as_load_failures() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let oversized = write_graph(tmp.path(), "oversized.txt", "2\n0b100 0\n");

    let assert = is_dag().arg(&oversized).assert().code(1);
    let stderr = stderr_of(assert.get_output());

    assert!(stderr.contains("Error reading digraph from file"));
    assert!(stderr.contains("vertex 0"));
}

#[test]
fn cli_reads_json_graphs() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let chain = write_graph(
        tmp.path(),
        "chain.json",
        r#"{"n_vertices": 4, "edges": [2, 4, 8, 0]}"#,
    );

    let assert = is_dag().arg(&chain).assert().success();
    assert_eq!(
        stdout_of(assert.get_output()),
        format!("{} is a dag? 1\n", chain.display())
    );
}

#[test]
fn cli_both_detectors_agree_on_cycle() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let cyclic = write_graph(tmp.path(), "cyclic.txt", "4\n0b0110 0b1000 0b0000 0b0101\n");

    let assert = is_dag()
        .args(["--detector", "both"])
        .arg(&cyclic)
        .assert()
        .success();
    assert_eq!(
        stdout_of(assert.get_output()),
        format!("{} is a dag? 0\n", cyclic.display())
    );
}

#[test]
fn cli_prints_graph_and_reachability() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let chain = write_graph(tmp.path(), "chain.txt", "3\n2 4 0\n");

    let assert = is_dag()
        .args(["--print", "--reachability"])
        .arg(&chain)
        .assert()
        .success();

    let expected = format!(
        "digraph with 3 vertices\n  0: 010 -> 1\n  1: 100 -> 2\n  2: 000 ->\n\
         {} is a dag? 1\n  0 -> 110\n  1 -> 100\n  2 -> 000\n",
        chain.display()
    );
    assert_eq!(stdout_of(assert.get_output()), expected);
}

#[test]
fn cli_rejects_unknown_detector() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let single = write_graph(tmp.path(), "single.txt", "1 0");

    is_dag()
        .args(["--detector", "dijkstra"])
        .arg(&single)
        .assert()
        .code(1);
}

#[test]
fn cli_help_succeeds() {
    let assert = is_dag().arg("--help").assert().success();
    assert!(stdout_of(assert.get_output()).contains("--detector"));
}
