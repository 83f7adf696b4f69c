//! Joint parameter types and their documented defaults.

use core::fmt;

use crate::config::ConfigSource;
use crate::error::Result;

/// Default `MIN_LIMIT`, effectively unbounded.
pub const DEFAULT_MIN_LIMIT: f64 = -1e99;

/// Default `MAX_LIMIT`, effectively unbounded.
pub const DEFAULT_MAX_LIMIT: f64 = 1e99;

/// Default `FERROR` (following error at max velocity).
pub const DEFAULT_FERROR: f64 = 1.0;

/// `HOME_VEL` sentinel meaning "move at rapid speed".
pub const HOME_VEL_RAPID: f64 = -1.0;

/// `HOME_SEQUENCE` sentinel meaning "no sequence assigned".
pub const NO_HOME_SEQUENCE: i32 = -1;

/// Kinematic type of a joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JointType {
    /// Moves along a line; units follow the linear trajectory units.
    #[default]
    Linear,
    /// Rotates; units follow the angular trajectory units.
    Angular,
}

impl fmt::Display for JointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JointType::Linear => f.write_str("LINEAR"),
            JointType::Angular => f.write_str("ANGULAR"),
        }
    }
}

/// Homing parameters, applied to the controller in a single call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomingParams {
    /// Position to move to once homing completes (`HOME`).
    pub home: f64,
    /// Location of the home switch or index pulse (`HOME_OFFSET`).
    pub offset: f64,
    /// Speed from `offset` to `home`; [`HOME_VEL_RAPID`] for rapid (`HOME_VEL`).
    pub home_vel: f64,
    /// Search phase speed (`HOME_SEARCH_VEL`).
    pub search_vel: f64,
    /// Latch phase speed (`HOME_LATCH_VEL`).
    pub latch_vel: f64,
    /// Latch on the encoder index pulse (`HOME_USE_INDEX`).
    pub use_index: bool,
    /// Ignore limit switches while homing (`HOME_IGNORE_LIMITS`).
    pub ignore_limits: bool,
    /// Home switch is shared with other joints (`HOME_IS_SHARED`).
    pub is_shared: bool,
    /// Homing order; [`NO_HOME_SEQUENCE`] if unassigned (`HOME_SEQUENCE`).
    pub sequence: i32,
    /// Home state is lost when the machine is switched off (`VOLATILE_HOME`).
    pub volatile_home: i32,
}

impl Default for HomingParams {
    fn default() -> Self {
        Self {
            home: 0.0,
            offset: 0.0,
            home_vel: HOME_VEL_RAPID,
            search_vel: 0.0,
            latch_vel: 0.0,
            use_index: false,
            ignore_limits: false,
            is_shared: false,
            sequence: NO_HOME_SEQUENCE,
            volatile_home: 0,
        }
    }
}

impl HomingParams {
    /// Resolve every homing key in `section`, keeping the default for absent keys.
    ///
    /// # Errors
    ///
    /// Returns a conversion error for the first malformed value.
    pub fn resolve<S: ConfigSource + ?Sized>(source: &S, section: &str) -> Result<Self> {
        let d = Self::default();
        Ok(Self {
            home: source.find("HOME", section)?.unwrap_or(d.home),
            offset: source.find("HOME_OFFSET", section)?.unwrap_or(d.offset),
            search_vel: source.find("HOME_SEARCH_VEL", section)?.unwrap_or(d.search_vel),
            latch_vel: source.find("HOME_LATCH_VEL", section)?.unwrap_or(d.latch_vel),
            home_vel: source.find("HOME_VEL", section)?.unwrap_or(d.home_vel),
            is_shared: source.find("HOME_IS_SHARED", section)?.unwrap_or(d.is_shared),
            use_index: source.find("HOME_USE_INDEX", section)?.unwrap_or(d.use_index),
            ignore_limits: source
                .find("HOME_IGNORE_LIMITS", section)?
                .unwrap_or(d.ignore_limits),
            sequence: source.find("HOME_SEQUENCE", section)?.unwrap_or(d.sequence),
            volatile_home: source.find("VOLATILE_HOME", section)?.unwrap_or(d.volatile_home),
        })
    }
}
