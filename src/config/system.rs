//! System-wide defaults applied when a joint section omits a value.

use serde::Deserialize;

use crate::error::Result;

use super::ConfigSource;

/// Top-level section holding machine-wide trajectory settings.
pub const TRAJ_SECTION: &str = "TRAJ";

/// Default joint velocity cap (machine units per second).
pub const DEFAULT_JOINT_MAX_VELOCITY: f64 = 1.0;

/// Default joint acceleration cap (machine units per second squared).
pub const DEFAULT_JOINT_MAX_ACCELERATION: f64 = 1.0;

/// Defaults injected into the joint loader.
///
/// These stand in for the trajectory planner's current unit settings and the
/// controller's built-in velocity/acceleration caps.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct JointDefaults {
    /// Default `UNITS` for linear joints.
    pub linear_units: f64,

    /// Default `UNITS` for angular joints.
    pub angular_units: f64,

    /// Default `MAX_VELOCITY`.
    pub max_velocity: f64,

    /// Default `MAX_ACCELERATION`.
    pub max_acceleration: f64,
}

impl Default for JointDefaults {
    fn default() -> Self {
        Self {
            linear_units: 1.0,
            angular_units: 1.0,
            max_velocity: DEFAULT_JOINT_MAX_VELOCITY,
            max_acceleration: DEFAULT_JOINT_MAX_ACCELERATION,
        }
    }
}

impl JointDefaults {
    /// Override the unit defaults with `[TRAJ] LINEAR_UNITS` / `ANGULAR_UNITS`.
    ///
    /// Absent keys keep the current values.
    ///
    /// # Errors
    ///
    /// Returns a conversion error if either key is present but malformed.
    pub fn with_traj_units<S: ConfigSource + ?Sized>(mut self, source: &S) -> Result<Self> {
        if let Some(units) = source.find_linear_units("LINEAR_UNITS", TRAJ_SECTION)? {
            self.linear_units = units;
        }
        if let Some(units) = source.find_angular_units("ANGULAR_UNITS", TRAJ_SECTION)? {
            self.angular_units = units;
        }
        Ok(self)
    }
}
