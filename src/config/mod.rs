//! Configuration module for joint-config.
//!
//! Provides the section/key source capability, typed value conversion, unit
//! name tables and the system defaults injected into the joint loader. TOML
//! documents are supported with the `std` feature.

mod source;
mod system;
pub mod units;
mod value;
#[cfg(feature = "std")]
mod loader;

pub use source::ConfigSource;
pub use system::{
    JointDefaults, DEFAULT_JOINT_MAX_ACCELERATION, DEFAULT_JOINT_MAX_VELOCITY, TRAJ_SECTION,
};
pub use value::{FromConfigValue, RawValue, ValueKind};

#[cfg(feature = "std")]
pub use loader::TomlSource;
