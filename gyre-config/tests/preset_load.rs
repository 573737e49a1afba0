//! Round-trip tests for preset files on disk.

use gyre_config::{Config, ConfigLoadError, load_path, write_default_preset};
use gyre_model::PlacementModeKind;

#[test]
fn default_preset_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gyre.toml");

    write_default_preset(&path).unwrap();
    let loaded = load_path(&path).unwrap();

    assert_eq!(loaded, Config::default());
}

#[test]
fn partial_preset_loads_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.toml");
    std::fs::write(
        &path,
        "[placement]\nmode = \"grid\"\ncolumns = 6\n\n[motion]\nmax_velocity = 1.5\n",
    )
    .unwrap();

    let cfg = load_path(&path).unwrap();
    assert_eq!(cfg.placement().kind(), PlacementModeKind::Grid);
    assert_eq!(cfg.motion().max_velocity, 1.5);
    // Untouched sections keep compiled-in defaults
    assert_eq!(
        cfg.cache().capacity,
        Config::default().cache().capacity
    );
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    match load_path(&path) {
        Err(ConfigLoadError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected io error, got {other:?}"),
    }
}
