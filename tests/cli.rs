use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn write_graph(dir: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).unwrap();
    path
}

fn depcycle(args: &[&str], graph: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_depcycle"))
        .args(args)
        .arg(graph)
        .output()
        .unwrap()
}

const ACYCLIC: &str = r#"{
    "nodes": ["link", "compile", "fetch"],
    "dependencies": [
        { "node": "link", "prerequisite": "compile" },
        { "node": "compile", "prerequisite": "fetch" }
    ]
}"#;

const CYCLIC: &str = r#"{
    "nodes": ["a", "b"],
    "dependencies": [
        { "node": "a", "prerequisite": "b" },
        { "node": "b", "prerequisite": "a" }
    ]
}"#;

#[test]
fn prints_the_order_as_json() {
    let dir = TempDir::new().unwrap();
    let graph = write_graph(&dir, "acyclic.json", ACYCLIC);

    let out = depcycle(&[], &graph);
    assert!(out.status.success());

    let order: Vec<String> = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(order, vec!["fetch", "compile", "link"]);
}

#[test]
fn cycle_exits_non_zero_with_the_failure_kind() {
    let dir = TempDir::new().unwrap();
    let graph = write_graph(&dir, "cyclic.json", CYCLIC);

    let out = depcycle(&[], &graph);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("dependency cycle detected"), "stderr: {stderr}");
}

#[test]
fn check_reports_counts_only() {
    let dir = TempDir::new().unwrap();
    let graph = write_graph(&dir, "acyclic.json", ACYCLIC);

    let out = depcycle(&["--check"], &graph);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        "acyclic: 3 nodes, 2 dependencies"
    );
}

#[test]
fn malformed_document_fails() {
    let dir = TempDir::new().unwrap();
    let graph = write_graph(&dir, "broken.json", "{ \"nodes\": ");

    let out = depcycle(&[], &graph);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid graph document"));
}
