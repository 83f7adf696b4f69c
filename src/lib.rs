//! # joint-config
//!
//! Schema-driven joint configuration loading for motion controllers.
//!
//! ## Features
//!
//! - **Schema-driven**: Every joint key has a documented default; only a
//!   malformed value is an error
//! - **Ordered application**: Parameters are pushed to a [`JointController`]
//!   one by one, and the joint is activated last
//! - **Unit-aware**: `UNITS` accepts `mm`, `inch`, `deg`, `rad`, ... as well as numbers
//! - **no_std compatible**: Core library works without standard library
//! - **Precision inference**: Format templates that preserve the digits of a
//!   value when it is written back
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use joint_config::{configure_joint, JointDefaults};
//!
//! // machine.toml:
//! //   [TRAJ]
//! //   AXES = 3
//! //
//! //   [JOINT_0]
//! //   TYPE = "LINEAR"
//! //   MAX_VELOCITY = 30.0
//! configure_joint(0, "machine.toml", &mut controller, JointDefaults::default())?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt formatting of diagnostic enums for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Core modules
pub mod config;
pub mod error;
pub mod format;
pub mod joint;

// Re-exports for ergonomic API
pub use config::{ConfigSource, JointDefaults, RawValue, ValueKind};
pub use error::{ConfigError, Error, JointError, Result};
pub use format::{float_format, float_pair_format, float_precision, FloatFormat};
pub use joint::{
    configure_joint_from_source, HomingParams, JointController, JointLoader, JointType, Setter,
};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::TomlSource;
#[cfg(feature = "std")]
pub use joint::configure_joint;
