//! Error types for joint-config.
//!
//! Provides unified error handling across configuration lookup and joint setup.

use core::fmt::{self, Write};

use crate::config::ValueKind;
use crate::joint::Setter;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all joint-config operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration document or value error
    Config(ConfigError),
    /// Joint setup error
    Joint(JointError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A mandatory key is absent from the document
    NotFound {
        /// Key that was looked up
        key: heapless::String<32>,
        /// Section the key was looked up in
        section: heapless::String<32>,
    },
    /// A key is present but its value cannot be converted to the expected type
    Conversion {
        /// Offending key
        key: heapless::String<32>,
        /// Section holding the key
        section: heapless::String<32>,
        /// Rendering of the rejected value (truncated)
        value: heapless::String<64>,
        /// Type the loader expected
        expected: ValueKind,
    },
    /// Failed to parse the configuration document
    ParseError(heapless::String<128>),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Joint setup errors.
#[derive(Debug, Clone, PartialEq)]
pub enum JointError {
    /// Requested joint index is outside `[0, axes)`
    IndexOutOfRange {
        /// Requested joint index
        joint: i32,
        /// Number of joints configured for the machine
        axes: i32,
    },
    /// A controller setter reported failure
    ControllerRejected {
        /// Joint being configured
        joint: usize,
        /// Setter that failed
        setter: Setter,
    },
}

impl ConfigError {
    pub(crate) fn not_found(key: &str, section: &str) -> Self {
        ConfigError::NotFound {
            key: truncated(key),
            section: truncated(section),
        }
    }

    pub(crate) fn conversion(
        key: &str,
        section: &str,
        value: impl fmt::Display,
        expected: ValueKind,
    ) -> Self {
        let mut rendered = heapless::String::new();
        // Overflow only truncates the diagnostic
        let _ = write!(rendered, "{}", value);
        ConfigError::Conversion {
            key: truncated(key),
            section: truncated(section),
            value: rendered,
            expected,
        }
    }
}

/// Copy `s` into a bounded string, cutting at a char boundary if it does not fit.
pub(crate) fn truncated<const N: usize>(s: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Joint(e) => write!(f, "Joint error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFound { key, section } => {
                write!(f, "Missing key {} in section [{}]", key, section)
            }
            ConfigError::Conversion {
                key,
                section,
                value,
                expected,
            } => write!(
                f,
                "Bad value '{}' for {} in section [{}], expected {}",
                value, key, section, expected
            ),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for JointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JointError::IndexOutOfRange { joint, axes } => {
                write!(f, "Joint {} exceeds machine axes (AXES = {})", joint, axes)
            }
            JointError::ControllerRejected { joint, setter } => {
                write!(f, "Controller rejected {} for joint {}", setter, joint)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<JointError> for Error {
    fn from(e: JointError) -> Self {
        Error::Joint(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for JointError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_cuts_long_input() {
        let s: heapless::String<4> = truncated("HOME_OFFSET");
        assert_eq!(s.as_str(), "HOME");
    }

    #[test]
    fn test_conversion_display_names_key_and_section() {
        let e = Error::from(ConfigError::conversion(
            "BACKLASH",
            "JOINT_2",
            "abc",
            ValueKind::Float,
        ));
        let mut buf = heapless::String::<160>::new();
        write!(buf, "{}", e).unwrap();
        assert!(buf.contains("BACKLASH"));
        assert!(buf.contains("[JOINT_2]"));
        assert!(buf.contains("'abc'"));
    }
}
