//! Unit tests for float precision inference.

use joint_config::{float_format, float_pair_format, float_precision};

#[test]
fn test_precision_floor() {
    assert_eq!(float_precision("1.2345"), 4);
    assert_eq!(float_precision("7"), 3);
    assert_eq!(float_precision("0.12"), 3);
    assert_eq!(float_precision(""), 3);
}

#[test]
fn test_single_field_template() {
    assert_eq!(float_format("FOO", "1.2345").to_string(), "FOO = %.4f\n");
}

#[test]
fn test_pair_template_uses_first_precision() {
    assert_eq!(
        float_pair_format("BAR", "1.23 9.1").to_string(),
        "BAR = %.3f %.3f\n"
    );
    assert_eq!(
        float_pair_format("BAR", "1.23456 9.1").to_string(),
        "BAR = %.5f %.5f\n"
    );
}

/// The inferred precision renders a value back with its original digits.
#[test]
fn test_precision_round_trip() {
    let literal = "0.000125";
    let value: f64 = literal.parse().unwrap();
    let fmt = float_format("FERROR", literal);
    assert_eq!(format!("{:.*}", fmt.precision(), value), literal);
}
