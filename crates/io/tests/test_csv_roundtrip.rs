//! Integration test: round-trip signals through CSV.

use wavelib_dwt::Signal;
use wavelib_io::{ReadConfig, WriteConfig, read_csv, write_csv};

fn fixture_signals() -> Vec<Signal> {
    vec![
        Signal::new("alpha", vec![5.0, 6.0, 7.0, 8.0]).expect("fixture is valid"),
        Signal::new("beta", vec![1.5, -2.25, 0.125]).expect("fixture is valid"),
    ]
}

#[test]
fn round_trip_with_names() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("signals.csv");

    let signals = fixture_signals();
    let write_config = WriteConfig::default().with_include_names(true);
    write_csv(&path, &signals, &write_config).expect("write succeeds");

    let read_config = ReadConfig::default().with_name_in_first_column(true);
    let restored = read_csv(&path, &read_config).expect("read succeeds");

    assert_eq!(restored.len(), 2);
    assert_eq!(restored[0].name(), "alpha");
    assert_eq!(restored[0].samples(), signals[0].samples());
    assert_eq!(restored[1].name(), "beta");
    assert_eq!(restored[1].samples(), signals[1].samples());
}

#[test]
fn round_trip_without_names() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("signals.csv");

    write_csv(&path, &fixture_signals(), &WriteConfig::default()).expect("write succeeds");
    let restored = read_csv(&path, &ReadConfig::default()).expect("read succeeds");

    assert_eq!(restored.len(), 2);
    // Unnamed rows fall back to their row number.
    assert_eq!(restored[0].name(), "Line 1");
    assert_eq!(restored[1].name(), "Line 2");
    assert_eq!(restored[0].samples(), &[5.0, 6.0, 7.0, 8.0]);
}

#[test]
fn round_trip_semicolon_separator() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("signals.csv");

    let write_config = WriteConfig::default().with_separator(b';');
    write_csv(&path, &fixture_signals(), &write_config).expect("write succeeds");

    let read_config = ReadConfig::default().with_separator(b';');
    let restored = read_csv(&path, &read_config).expect("read succeeds");
    assert_eq!(restored[1].samples(), &[1.5, -2.25, 0.125]);
}
