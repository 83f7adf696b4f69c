//! Unit tests for configuring a joint from a document on disk.

use std::fs;
use std::path::PathBuf;

use joint_config::{configure_joint, ConfigError, Error, JointDefaults, Setter};

use crate::common::{Call, RecordingController};

/// Write `content` to a per-test file in the system temp directory.
fn write_document(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "joint-config-{}-{}.toml",
        std::process::id(),
        name
    ));
    fs::write(&path, content).expect("Failed to write test document");
    path
}

#[test]
fn test_configure_joint_from_file() {
    let path = write_document(
        "ok",
        r#"
[TRAJ]
AXES = 2

[JOINT_1]
TYPE = "ANGULAR"
MAX_VELOCITY = 90.0
"#,
    );

    let mut controller = RecordingController::new();
    let result = configure_joint(1, &path, &mut controller, JointDefaults::default());
    let _ = fs::remove_file(&path);

    result.expect("Joint 1 should configure");
    assert!(controller.calls.contains(&Call::MaxVelocity(1, 90.0)));
    assert_eq!(controller.setters().last(), Some(&Setter::Activate));
}

#[test]
fn test_missing_file_is_io_error() {
    let mut controller = RecordingController::new();
    let result = configure_joint(
        0,
        "/nonexistent/joint-config/machine.toml",
        &mut controller,
        JointDefaults::default(),
    );

    assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
    assert!(controller.calls.is_empty());
}

#[test]
fn test_unparsable_file_is_parse_error() {
    let path = write_document("bad", "[TRAJ\nAXES = 1\n");

    let mut controller = RecordingController::new();
    let result = configure_joint(0, &path, &mut controller, JointDefaults::default());
    let _ = fs::remove_file(&path);

    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    assert!(controller.calls.is_empty());
}
