//! Loading a demo configuration from disk and running it

use command_queue::{ConfigError, DemoConfig, DemoError, run_demo};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_load_and_run() {
    let file = write_config(
        r#"(
            iterations: 300,
            min_magnitude: 5,
            max_magnitude: 9,
            seed: Some(2024),
            rollback_all: true,
            rollback_probability: 0.4,
        )"#,
    );

    let config = DemoConfig::load(file.path()).unwrap();
    assert_eq!(config.iterations, 300);
    assert_eq!(config.seed, Some(2024));

    let report = run_demo(&config, &mut StdRng::seed_from_u64(2024)).unwrap();
    assert_eq!(report.final_value, 0);
    assert_eq!(report.command_index, 0);
    assert!(report.rolled_back > 0);
    // Every executed command moves the value by at most 9
    assert!(report.peak_value <= 9 * report.executed as i32);
}

#[test]
fn test_run_without_final_rollback_keeps_applied_commands() {
    let file = write_config("(iterations: 40, rollback_all: false, rollback_probability: 0.5)");
    let config = DemoConfig::load(file.path()).unwrap();

    let report = run_demo(&config, &mut StdRng::seed_from_u64(77)).unwrap();
    // Every step either executes or rolls back exactly one command
    assert_eq!(report.executed + report.rolled_back, 40);
    assert_eq!(report.queue_size + report.pruned, report.executed);
    assert!(report.command_index <= report.queue_size);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = DemoConfig::load(&dir.path().join("missing.ron"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_invalid_file_contents() {
    let file = write_config("(rollback_probability: 2.0)");
    assert!(matches!(
        DemoConfig::load(file.path()),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_run_demo_validates_config() {
    let config = DemoConfig {
        min_magnitude: 0,
        ..DemoConfig::default()
    };
    let result = run_demo(&config, &mut StdRng::seed_from_u64(1));
    assert!(matches!(result, Err(DemoError::Config(_))));
}
