//! Resolution of one joint section and its application to a controller.

use core::fmt::{Debug, Write};

use crate::config::{ConfigSource, JointDefaults};
use crate::error::{Error, JointError, Result};

use super::controller::{JointController, Setter};
use super::params::{
    HomingParams, JointType, DEFAULT_FERROR, DEFAULT_MAX_LIMIT, DEFAULT_MIN_LIMIT,
};

/// Section name for a joint, `JOINT_<n>`.
pub type SectionName = heapless::String<32>;

/// Build the section name holding the keys of `joint`.
pub fn joint_section(joint: usize) -> SectionName {
    let mut section = SectionName::new();
    // "JOINT_" plus at most 20 digits always fits
    let _ = write!(section, "JOINT_{}", joint);
    section
}

/// Resolves a joint's parameters and pushes them to a [`JointController`].
///
/// Each value is applied as soon as it is resolved. The first malformed value
/// or rejected setter aborts the load; setters already applied are not rolled
/// back, but the joint is never activated.
///
/// # Example
///
/// ```rust,ignore
/// use joint_config::{JointDefaults, JointLoader, TomlSource};
///
/// let source = TomlSource::open("machine.toml")?;
/// JointLoader::new(JointDefaults::default()).load(0, &source, &mut controller)?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JointLoader {
    defaults: JointDefaults,
}

impl JointLoader {
    /// Create a loader using `defaults` for units and velocity/acceleration caps.
    pub fn new(defaults: JointDefaults) -> Self {
        Self { defaults }
    }

    /// Get the injected defaults.
    pub fn defaults(&self) -> &JointDefaults {
        &self.defaults
    }

    /// Load `[JOINT_<joint>]` from `source` into `controller`, then activate the joint.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Conversion` for a malformed value and
    /// `JointError::ControllerRejected` for a failed setter.
    pub fn load<S, C>(&self, joint: usize, source: &S, controller: &mut C) -> Result<()>
    where
        S: ConfigSource + ?Sized,
        C: JointController,
    {
        let section = joint_section(joint);
        let section = section.as_str();

        // The type decides the default and the lookup used for UNITS
        let joint_type: JointType = source.find("TYPE", section)?.unwrap_or_default();
        log::debug!("[{}] TYPE = {}", section, joint_type);
        check(joint, Setter::JointType, controller.set_joint_type(joint, joint_type))?;

        let units = match joint_type {
            JointType::Linear => source
                .find_linear_units("UNITS", section)?
                .unwrap_or(self.defaults.linear_units),
            JointType::Angular => source
                .find_angular_units("UNITS", section)?
                .unwrap_or(self.defaults.angular_units),
        };
        log::debug!("[{}] UNITS = {}", section, units);
        check(joint, Setter::Units, controller.set_units(joint, units))?;

        let backlash = source.find("BACKLASH", section)?.unwrap_or(0.0);
        check(joint, Setter::Backlash, controller.set_backlash(joint, backlash))?;

        let min_limit = source.find("MIN_LIMIT", section)?.unwrap_or(DEFAULT_MIN_LIMIT);
        check(
            joint,
            Setter::MinPositionLimit,
            controller.set_min_position_limit(joint, min_limit),
        )?;

        let max_limit = source.find("MAX_LIMIT", section)?.unwrap_or(DEFAULT_MAX_LIMIT);
        check(
            joint,
            Setter::MaxPositionLimit,
            controller.set_max_position_limit(joint, max_limit),
        )?;
        log::debug!("[{}] limits = [{}, {}]", section, min_limit, max_limit);

        let ferror = source.find("FERROR", section)?.unwrap_or(DEFAULT_FERROR);
        check(joint, Setter::Ferror, controller.set_ferror(joint, ferror))?;

        // An absent MIN_FERROR inherits FERROR
        let min_ferror = source.find("MIN_FERROR", section)?.unwrap_or(ferror);
        check(joint, Setter::MinFerror, controller.set_min_ferror(joint, min_ferror))?;
        log::debug!("[{}] ferror = {}, min_ferror = {}", section, ferror, min_ferror);

        let homing = HomingParams::resolve(source, section)?;
        log::debug!("[{}] {:?}", section, homing);
        check(
            joint,
            Setter::HomingParams,
            controller.set_homing_params(joint, &homing),
        )?;

        let max_velocity = source
            .find("MAX_VELOCITY", section)?
            .unwrap_or(self.defaults.max_velocity);
        check(
            joint,
            Setter::MaxVelocity,
            controller.set_max_velocity(joint, max_velocity),
        )?;

        let max_acceleration = source
            .find("MAX_ACCELERATION", section)?
            .unwrap_or(self.defaults.max_acceleration);
        check(
            joint,
            Setter::MaxAcceleration,
            controller.set_max_acceleration(joint, max_acceleration),
        )?;
        log::debug!(
            "[{}] max_velocity = {}, max_acceleration = {}",
            section,
            max_velocity,
            max_acceleration
        );

        let comp_file_type = source.find("COMP_FILE_TYPE", section)?.unwrap_or(0);
        if let Some(path) = source.find_string("COMP_FILE", section)? {
            log::debug!("[{}] COMP_FILE = {} (type {})", section, path, comp_file_type);
            check(
                joint,
                Setter::LoadCompensation,
                controller.load_compensation(joint, path, comp_file_type),
            )?;
        }

        // Last, so a half-configured joint is never active
        check(joint, Setter::Activate, controller.activate(joint))?;
        log::info!("joint {} configured and activated", joint);

        Ok(())
    }
}

/// Map a setter result to a load error, logging the rejection.
fn check<E: Debug>(joint: usize, setter: Setter, result: core::result::Result<(), E>) -> Result<()> {
    result.map_err(|e| {
        log::error!("bad return from {} for joint {}: {:?}", setter, joint, e);
        Error::Joint(JointError::ControllerRejected { joint, setter })
    })
}
