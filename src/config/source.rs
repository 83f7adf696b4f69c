//! Section/key configuration source capability.

use crate::error::{ConfigError, Error, Result};

use super::units;
use super::value::{FromConfigValue, RawValue, ValueKind};

/// A read-only, section-keyed configuration document.
///
/// Implementors only provide [`lookup`](ConfigSource::lookup). The typed
/// lookups distinguish an absent key (`Ok(None)`) from a present value that
/// cannot be converted (`Err(ConfigError::Conversion)`), so callers can fall
/// back to a default for the former and abort on the latter.
pub trait ConfigSource {
    /// Look up the raw value stored under `key` in `section`.
    fn lookup(&self, key: &str, section: &str) -> Option<RawValue<'_>>;

    /// Look up `key` in `section` and convert it to `T`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Conversion` if the value is present but malformed.
    fn find<T: FromConfigValue>(&self, key: &str, section: &str) -> Result<Option<T>> {
        match self.lookup(key, section) {
            None => Ok(None),
            Some(raw) => match T::from_config_value(&raw) {
                Some(value) => Ok(Some(value)),
                None => Err(conversion(key, section, &raw, T::KIND)),
            },
        }
    }

    /// Look up a linear quantity given either as a unit name or a number.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Conversion` if the value is neither.
    fn find_linear_units(&self, key: &str, section: &str) -> Result<Option<f64>> {
        find_units(self, key, section, units::linear_unit, ValueKind::LinearUnits)
    }

    /// Look up an angular quantity given either as a unit name or a number.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Conversion` if the value is neither.
    fn find_angular_units(&self, key: &str, section: &str) -> Result<Option<f64>> {
        find_units(self, key, section, units::angular_unit, ValueKind::AngularUnits)
    }

    /// Look up a plain string value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Conversion` if the value is not a string.
    fn find_string(&self, key: &str, section: &str) -> Result<Option<&str>> {
        match self.lookup(key, section) {
            None => Ok(None),
            Some(RawValue::Str(s)) => Ok(Some(s)),
            Some(raw) => Err(conversion(key, section, &raw, ValueKind::String)),
        }
    }
}

fn find_units<S: ConfigSource + ?Sized>(
    source: &S,
    key: &str,
    section: &str,
    by_name: fn(&str) -> Option<f64>,
    kind: ValueKind,
) -> Result<Option<f64>> {
    let Some(raw) = source.lookup(key, section) else {
        return Ok(None);
    };
    let named = match raw {
        RawValue::Str(s) => by_name(s),
        _ => None,
    };
    match named.or_else(|| f64::from_config_value(&raw)) {
        Some(value) => Ok(Some(value)),
        None => Err(conversion(key, section, &raw, kind)),
    }
}

fn conversion(key: &str, section: &str, raw: &RawValue<'_>, kind: ValueKind) -> Error {
    let err = ConfigError::conversion(key, section, raw, kind);
    log::error!("{}", err);
    Error::Config(err)
}
