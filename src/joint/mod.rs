//! Joint module for joint-config.
//!
//! Resolves the per-joint parameter schema and applies it, in order, to a
//! motion controller.

mod configure;
mod controller;
mod loader;
mod params;

#[cfg(feature = "std")]
pub use configure::configure_joint;
pub use configure::{axis_count, configure_joint_from_source};
pub use controller::{JointController, Setter};
pub use loader::{joint_section, JointLoader, SectionName};
pub use params::{
    HomingParams, JointType, DEFAULT_FERROR, DEFAULT_MAX_LIMIT, DEFAULT_MIN_LIMIT, HOME_VEL_RAPID,
    NO_HOME_SEQUENCE,
};
