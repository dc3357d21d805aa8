use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn map_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/maps")
        .join(name)
        .canonicalize()
        .expect("fixture map present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("wayfinder-cli");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("WAYFINDER_WEIGHT");
    cmd
}

#[test]
fn demo_renders_sample_map() {
    cli()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("S"))
        .stdout(predicate::str::contains("*"))
        .stdout(predicate::str::contains("from: (0, 0)"))
        .stdout(predicate::str::contains("to: (11, 6)"))
        .stdout(predicate::str::contains("weight: 0.5"));
}

#[test]
fn zero_weight_finds_shortest_route() {
    cli()
        .args(["--weight", "0", "route", "--map"])
        .arg(map_path("spiral.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("steps: 11"))
        .stdout(predicate::str::contains("cost: 11.000"));
}

#[test]
fn json_format_lists_path() {
    let output = cli()
        .args(["--format", "json", "route", "--map"])
        .arg(map_path("spiral.txt"))
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    let path = report["path"].as_array().expect("path array");
    assert_eq!(report["from"], serde_json::json!({ "x": 0, "y": 0 }));
    assert_eq!(report["to"], serde_json::json!({ "x": 2, "y": 3 }));
    assert_eq!(path.first(), Some(&report["from"]));
    assert_eq!(path.last(), Some(&report["to"]));
    assert_eq!(report["steps"].as_u64(), Some(path.len() as u64 - 1));
}

#[test]
fn walled_off_goal_reports_no_path() {
    cli()
        .args(["route", "--map"])
        .arg(map_path("split.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no path found between (0, 0) and (6, 2)",
        ));
}

#[test]
fn wall_endpoint_fails_pre_check() {
    cli()
        .args(["route", "--to", "1,1", "--map"])
        .arg(map_path("spiral.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no path found"));
}

#[test]
fn explicit_endpoints_override_markers() {
    let temp = tempdir().expect("create temp dir");
    let map = temp.path().join("open.txt");
    fs::write(&map, "....\n....\n").expect("write map");

    cli()
        .args(["route", "--from", "0,0", "--to", "3,1", "--map"])
        .arg(&map)
        .assert()
        .success()
        .stdout(predicate::str::contains("steps: 4"));
}

#[test]
fn diagonal_moves_shorten_open_routes() {
    let temp = tempdir().expect("create temp dir");
    let map = temp.path().join("open.txt");
    fs::write(&map, "S...\n....\n....\n...G\n").expect("write map");

    cli()
        .args(["--diagonal", "route", "--map"])
        .arg(&map)
        .assert()
        .success()
        .stdout(predicate::str::contains("steps: 3"));
}

#[test]
fn missing_markers_require_endpoints() {
    let temp = tempdir().expect("create temp dir");
    let map = temp.path().join("blank.txt");
    fs::write(&map, "...\n...\n").expect("write map");

    cli()
        .args(["route", "--map"])
        .arg(&map)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no start tile"));
}

#[test]
fn ragged_map_is_rejected() {
    let temp = tempdir().expect("create temp dir");
    let map = temp.path().join("ragged.txt");
    fs::write(&map, "S..\n.G\n").expect("write map");

    cli()
        .args(["route", "--map"])
        .arg(&map)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid map"));
}

#[test]
fn out_of_range_weight_is_rejected() {
    cli()
        .args(["--weight", "1.5", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the accepted range"));
}

#[test]
fn weight_is_read_from_environment() {
    cli()
        .env("WAYFINDER_WEIGHT", "-0.25")
        .arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --weight"));

    cli()
        .env("WAYFINDER_WEIGHT", "1")
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("weight: 1"));
}

#[test]
fn malformed_tile_is_a_usage_error() {
    cli()
        .args(["route", "--from", "north", "--map"])
        .arg(map_path("spiral.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid tile coordinate 'north'"));
}
