//! Unit tests for typed lookups against TOML documents.

use joint_config::{ConfigError, ConfigSource, Error, JointType, TomlSource, ValueKind};

const DOCUMENT: &str = r#"
[JOINT_0]
TYPE = "angular"
UNITS = "grad"
BACKLASH = "0.01"
MIN_LIMIT = -5
HOME_IS_SHARED = "on"
HOME_SEQUENCE = "3"
VOLATILE_HOME = 1
COMP_FILE = "comp/joint0.txt"
MAX_VELOCITY = [1.0]
"#;

fn document() -> TomlSource {
    TomlSource::parse(DOCUMENT).expect("Failed to parse TOML")
}

/// INI-style string values convert to their typed form.
#[test]
fn test_string_values_convert() {
    let source = document();

    assert_eq!(source.find::<JointType>("TYPE", "JOINT_0"), Ok(Some(JointType::Angular)));
    assert_eq!(source.find::<f64>("BACKLASH", "JOINT_0"), Ok(Some(0.01)));
    assert_eq!(source.find::<bool>("HOME_IS_SHARED", "JOINT_0"), Ok(Some(true)));
    assert_eq!(source.find::<i32>("HOME_SEQUENCE", "JOINT_0"), Ok(Some(3)));
}

/// Native TOML scalars convert without going through strings.
#[test]
fn test_native_values_convert() {
    let source = document();

    assert_eq!(source.find::<f64>("MIN_LIMIT", "JOINT_0"), Ok(Some(-5.0)));
    assert_eq!(source.find::<i32>("VOLATILE_HOME", "JOINT_0"), Ok(Some(1)));
    assert_eq!(source.find::<bool>("VOLATILE_HOME", "JOINT_0"), Ok(Some(true)));
}

/// Unit names resolve through the unit-aware lookups.
#[test]
fn test_angular_unit_name() {
    let source = document();
    assert_eq!(source.find_angular_units("UNITS", "JOINT_0"), Ok(Some(0.9)));
}

/// A key that is absent is not an error.
#[test]
fn test_absent_key() {
    let source = document();
    assert_eq!(source.find::<f64>("FERROR", "JOINT_0"), Ok(None));
    assert_eq!(source.find_string("COMP_FILE", "JOINT_1"), Ok(None));
}

/// A present value of the wrong shape is a conversion error naming the key.
#[test]
fn test_array_value_rejected() {
    let source = document();
    let err = source.find::<f64>("MAX_VELOCITY", "JOINT_0").unwrap_err();

    match err {
        Error::Config(ConfigError::Conversion {
            key,
            value,
            expected,
            ..
        }) => {
            assert_eq!(key.as_str(), "MAX_VELOCITY");
            assert_eq!(value.as_str(), "<array>");
            assert_eq!(expected, ValueKind::Float);
        }
        other => panic!("Expected conversion error, got {:?}", other),
    }
}

/// Strings are returned verbatim.
#[test]
fn test_comp_file_path() {
    let source = document();
    assert_eq!(
        source.find_string("COMP_FILE", "JOINT_0"),
        Ok(Some("comp/joint0.txt"))
    );
}
