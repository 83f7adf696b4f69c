//! Configuration loading from TOML files (std only).

use std::fs;
use std::path::Path;

use toml::{Table, Value};

use crate::error::{truncated, ConfigError, Error, Result};

use super::{ConfigSource, RawValue};

/// A configuration document parsed from TOML.
///
/// Each top-level table is a section:
///
/// ```toml
/// [TRAJ]
/// AXES = 3
///
/// [JOINT_0]
/// TYPE = "LINEAR"
/// MAX_VELOCITY = 30.0
/// ```
#[derive(Debug, Clone, Default)]
pub struct TomlSource {
    table: Table,
}

impl TomlSource {
    /// Open and parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use joint_config::TomlSource;
    ///
    /// let source = TomlSource::open("machine.toml")?;
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            log::error!("cannot open {}: {}", path.as_ref().display(), e);
            Error::Config(ConfigError::IoError(truncated(&e.to_string())))
        })?;

        Self::parse(&content)
    }

    /// Parse a document from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self> {
        let table = content.parse::<Table>().map_err(|e| {
            log::error!("cannot parse configuration: {}", e.message());
            Error::Config(ConfigError::ParseError(truncated(e.message())))
        })?;

        Ok(Self { table })
    }

    /// Names of all sections in the document.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.table
            .iter()
            .filter(|(_, v)| v.is_table())
            .map(|(k, _)| k.as_str())
    }
}

impl From<Table> for TomlSource {
    fn from(table: Table) -> Self {
        Self { table }
    }
}

impl ConfigSource for TomlSource {
    fn lookup(&self, key: &str, section: &str) -> Option<RawValue<'_>> {
        let value = self.table.get(section)?.as_table()?.get(key)?;
        Some(match value {
            Value::String(s) => RawValue::Str(s.as_str()),
            Value::Integer(v) => RawValue::Int(*v),
            Value::Float(v) => RawValue::Float(*v),
            Value::Boolean(v) => RawValue::Bool(*v),
            Value::Datetime(_) => RawValue::Unsupported("datetime"),
            Value::Array(_) => RawValue::Unsupported("array"),
            Value::Table(_) => RawValue::Unsupported("table"),
        })
    }
}
