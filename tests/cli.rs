use assert_cmd::Command;
use predicates::prelude::*;

fn dashgrid() -> Command {
    Command::cargo_bin("dashgrid").unwrap()
}

#[test]
fn help_lists_flags() {
    dashgrid()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--replay"))
        .stdout(predicate::str::contains("--total-width"));
}

#[test]
fn replay_prints_outline() {
    dashgrid()
        .args(["--replay", "main_button,main_button,level_1#2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Forest: display_area\n"))
        .stdout(predicate::str::contains(
            "│   └── level: 1 number: 2 [level_1#2] w=6",
        ))
        .stdout(predicate::str::contains(
            "    └── level: 2 number: 1 [level_2#1] w=2",
        ));
}

#[test]
fn replay_honors_grid_flags() {
    dashgrid()
        .args([
            "--total-width",
            "10",
            "--deep-width",
            "3",
            "--replay",
            "main_button,main_button,main_button,level_1#1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("level 1 (3 nodes, width 9)"))
        .stdout(predicate::str::contains("level 2 (1 nodes, width 3)"));
}

#[test]
fn replay_rejects_malformed_id() {
    dashgrid()
        .args(["--replay", "main_button,level_x#1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn replay_rejects_ids_not_on_screen() {
    dashgrid()
        .args(["--replay", "main_button,level_2#1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("level_2#1"));
}

#[test]
fn replay_rejects_unknown_component() {
    dashgrid()
        .args(["--replay", "submit"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("submit"));
}

#[test]
fn missing_raster_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nothing.nc");

    dashgrid()
        .arg("--raster")
        .arg(&missing)
        .args(["--variable", "t"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn raster_requires_variable() {
    dashgrid()
        .args(["--raster", "some.nc"])
        .assert()
        .failure();
}
