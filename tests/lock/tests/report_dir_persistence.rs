//! Report directory persistence through the full harness pipeline:
//! run → write directory → read directory → verify.

use wayfind_harness::policy::RunConfig;
use wayfind_harness::report_dir::{read_report_dir, write_report_dir, ReportDirError};
use wayfind_harness::runner::{run_exploration, run_search};
use wayfind_harness::worlds::floors::FloorsPuzzle;
use wayfind_harness::worlds::grid::{GridMaze, Point};

#[test]
fn search_report_roundtrip() {
    let world = FloorsPuzzle::new(vec![(1, 0), (2, 0)]).unwrap();
    let report = run_search(&world, &RunConfig::default()).unwrap();
    let dir = tempfile::tempdir().unwrap();

    write_report_dir(&report, dir.path()).unwrap();
    let loaded = read_report_dir(dir.path()).unwrap();

    assert_eq!(loaded.digest, report.digest);
    assert_eq!(loaded.bytes, report.bytes);
    assert_eq!(loaded.value["termination"], "goal_reached");
    assert_eq!(loaded.value["cost"], "11");
    assert_eq!(loaded.value["path"].as_array().map(Vec::len), Some(12));
}

#[test]
fn exploration_report_roundtrip_in_nested_dir() {
    let world = GridMaze::open_field(5, 5, Point::new(2, 2), Point::new(0, 0));
    let report = run_exploration(
        &world,
        &RunConfig {
            exploration_max_cost: 10.0,
            ..RunConfig::default()
        },
    )
    .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("runs").join("explore");

    write_report_dir(&report, &nested).unwrap();
    let loaded = read_report_dir(&nested).unwrap();
    assert_eq!(loaded.digest, report.digest);
    assert_eq!(loaded.value["visited"], 25);
}

#[test]
fn directory_path_is_not_hashed() {
    let world = GridMaze::open_field(4, 4, Point::new(0, 0), Point::new(3, 3));
    let report = run_search(&world, &RunConfig::default()).unwrap();
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    write_report_dir(&report, a.path()).unwrap();
    write_report_dir(&report, b.path()).unwrap();
    assert_eq!(
        read_report_dir(a.path()).unwrap().digest,
        read_report_dir(b.path()).unwrap().digest
    );
}

#[test]
fn report_swapped_between_dirs_fails_closed() {
    let a_world = GridMaze::open_field(4, 4, Point::new(0, 0), Point::new(3, 3));
    let b_world = GridMaze::open_field(4, 4, Point::new(0, 0), Point::new(2, 3));
    let a = run_search(&a_world, &RunConfig::default()).unwrap();
    let b = run_search(&b_world, &RunConfig::default()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    write_report_dir(&a, dir.path()).unwrap();
    std::fs::write(dir.path().join("report.json"), &b.bytes).unwrap();

    let err = read_report_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ReportDirError::DigestMismatch { .. }));
}
