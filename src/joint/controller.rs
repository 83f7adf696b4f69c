//! Controller capability receiving resolved joint parameters.

use core::fmt;

use super::params::{HomingParams, JointType};

/// A motion controller that stores and acts on joint parameters.
///
/// The loader calls these setters in a fixed order and stops at the first
/// failure. [`activate`](JointController::activate) is only called once every
/// other setter has succeeded.
pub trait JointController {
    /// Error reported by a rejected setter.
    type Error: fmt::Debug;

    /// Set the kinematic type of `joint`.
    fn set_joint_type(&mut self, joint: usize, joint_type: JointType) -> Result<(), Self::Error>;

    /// Set machine units per mm (linear) or per degree (angular).
    fn set_units(&mut self, joint: usize, units: f64) -> Result<(), Self::Error>;

    /// Set the backlash compensation distance.
    fn set_backlash(&mut self, joint: usize, backlash: f64) -> Result<(), Self::Error>;

    /// Set the minimum soft position limit.
    fn set_min_position_limit(&mut self, joint: usize, limit: f64) -> Result<(), Self::Error>;

    /// Set the maximum soft position limit.
    fn set_max_position_limit(&mut self, joint: usize, limit: f64) -> Result<(), Self::Error>;

    /// Set the maximum following error, reached at max velocity.
    fn set_ferror(&mut self, joint: usize, ferror: f64) -> Result<(), Self::Error>;

    /// Set the minimum following error, allowed at zero velocity.
    fn set_min_ferror(&mut self, joint: usize, ferror: f64) -> Result<(), Self::Error>;

    /// Set all homing parameters at once.
    fn set_homing_params(&mut self, joint: usize, homing: &HomingParams) -> Result<(), Self::Error>;

    /// Set the velocity cap.
    fn set_max_velocity(&mut self, joint: usize, velocity: f64) -> Result<(), Self::Error>;

    /// Set the acceleration cap.
    fn set_max_acceleration(&mut self, joint: usize, acceleration: f64) -> Result<(), Self::Error>;

    /// Load a compensation table from `path`.
    ///
    /// `file_type` 0 means rows of nominal, forward and reverse positions.
    fn load_compensation(&mut self, joint: usize, path: &str, file_type: i32) -> Result<(), Self::Error>;

    /// Enable the joint for control.
    fn activate(&mut self, joint: usize) -> Result<(), Self::Error>;
}

/// Identifies a [`JointController`] operation in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Setter {
    /// [`JointController::set_joint_type`]
    JointType,
    /// [`JointController::set_units`]
    Units,
    /// [`JointController::set_backlash`]
    Backlash,
    /// [`JointController::set_min_position_limit`]
    MinPositionLimit,
    /// [`JointController::set_max_position_limit`]
    MaxPositionLimit,
    /// [`JointController::set_ferror`]
    Ferror,
    /// [`JointController::set_min_ferror`]
    MinFerror,
    /// [`JointController::set_homing_params`]
    HomingParams,
    /// [`JointController::set_max_velocity`]
    MaxVelocity,
    /// [`JointController::set_max_acceleration`]
    MaxAcceleration,
    /// [`JointController::load_compensation`]
    LoadCompensation,
    /// [`JointController::activate`]
    Activate,
}

impl fmt::Display for Setter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Setter::JointType => "set_joint_type",
            Setter::Units => "set_units",
            Setter::Backlash => "set_backlash",
            Setter::MinPositionLimit => "set_min_position_limit",
            Setter::MaxPositionLimit => "set_max_position_limit",
            Setter::Ferror => "set_ferror",
            Setter::MinFerror => "set_min_ferror",
            Setter::HomingParams => "set_homing_params",
            Setter::MaxVelocity => "set_max_velocity",
            Setter::MaxAcceleration => "set_max_acceleration",
            Setter::LoadCompensation => "load_compensation",
            Setter::Activate => "activate",
        };
        f.write_str(name)
    }
}
