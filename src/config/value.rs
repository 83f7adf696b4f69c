//! Raw configuration values and typed conversion.

use core::fmt;

use crate::joint::JointType;

/// A value as stored in the configuration document, before typed conversion.
///
/// Legacy INI-style documents store everything as strings; TOML documents may
/// also carry native scalars. Both are accepted by the conversions below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    /// String literal
    Str(&'a str),
    /// Integer literal
    Int(i64),
    /// Floating point literal
    Float(f64),
    /// Boolean literal
    Bool(bool),
    /// A value no scalar conversion accepts (array, table, datetime, ...)
    Unsupported(&'static str),
}

impl fmt::Display for RawValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Str(s) => f.write_str(s),
            RawValue::Int(v) => write!(f, "{}", v),
            RawValue::Float(v) => write!(f, "{}", v),
            RawValue::Bool(v) => write!(f, "{}", v),
            RawValue::Unsupported(kind) => write!(f, "<{}>", kind),
        }
    }
}

/// The type a lookup expected, reported in conversion errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValueKind {
    /// Floating point number
    Float,
    /// Signed integer
    Integer,
    /// Boolean flag
    Boolean,
    /// `LINEAR` or `ANGULAR`
    JointType,
    /// Linear unit name or number
    LinearUnits,
    /// Angular unit name or number
    AngularUnits,
    /// Plain string
    String,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Float => "a number",
            ValueKind::Integer => "an integer",
            ValueKind::Boolean => "a boolean",
            ValueKind::JointType => "LINEAR or ANGULAR",
            ValueKind::LinearUnits => "a linear unit (mm, inch, ...) or number",
            ValueKind::AngularUnits => "an angular unit (deg, rad, ...) or number",
            ValueKind::String => "a string",
        };
        f.write_str(name)
    }
}

/// Types that can be converted from a [`RawValue`].
pub trait FromConfigValue: Sized {
    /// Kind reported when conversion fails.
    const KIND: ValueKind;

    /// Convert a raw value, returning `None` if it is malformed for this type.
    fn from_config_value(raw: &RawValue<'_>) -> Option<Self>;
}

impl FromConfigValue for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn from_config_value(raw: &RawValue<'_>) -> Option<Self> {
        match *raw {
            RawValue::Float(v) => Some(v),
            RawValue::Int(v) => Some(v as f64),
            RawValue::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl FromConfigValue for i32 {
    const KIND: ValueKind = ValueKind::Integer;

    fn from_config_value(raw: &RawValue<'_>) -> Option<Self> {
        match *raw {
            RawValue::Int(v) => i32::try_from(v).ok(),
            RawValue::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Accepted spellings for boolean flags, matched case-insensitively.
const BOOL_WORDS: [(&str, bool); 8] = [
    ("TRUE", true),
    ("YES", true),
    ("ON", true),
    ("1", true),
    ("FALSE", false),
    ("NO", false),
    ("OFF", false),
    ("0", false),
];

impl FromConfigValue for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    fn from_config_value(raw: &RawValue<'_>) -> Option<Self> {
        match *raw {
            RawValue::Bool(v) => Some(v),
            RawValue::Int(0) => Some(false),
            RawValue::Int(1) => Some(true),
            RawValue::Str(s) => {
                let s = s.trim();
                BOOL_WORDS
                    .iter()
                    .find(|(word, _)| word.eq_ignore_ascii_case(s))
                    .map(|&(_, v)| v)
            }
            _ => None,
        }
    }
}

impl FromConfigValue for JointType {
    const KIND: ValueKind = ValueKind::JointType;

    fn from_config_value(raw: &RawValue<'_>) -> Option<Self> {
        match *raw {
            RawValue::Str(s) => {
                let s = s.trim();
                if s.eq_ignore_ascii_case("LINEAR") {
                    Some(JointType::Linear)
                } else if s.eq_ignore_ascii_case("ANGULAR") {
                    Some(JointType::Angular)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}
