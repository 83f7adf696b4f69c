//! Entry point: bounds-check a joint index against `[TRAJ] AXES`, then load it.

use crate::config::{ConfigSource, JointDefaults, TRAJ_SECTION};
use crate::error::{ConfigError, Error, JointError, Result};

use super::controller::JointController;
use super::loader::JointLoader;

/// Read the mandatory `[TRAJ] AXES` joint count.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the key is absent and
/// `ConfigError::Conversion` if it is not an integer.
pub fn axis_count<S: ConfigSource + ?Sized>(source: &S) -> Result<i32> {
    source.find("AXES", TRAJ_SECTION)?.ok_or_else(|| {
        let err = ConfigError::not_found("AXES", TRAJ_SECTION);
        log::error!("{}", err);
        Error::Config(err)
    })
}

/// Configure `joint` from an already opened source.
///
/// The unit defaults are taken from `[TRAJ] LINEAR_UNITS` / `ANGULAR_UNITS`
/// when present, falling back to `defaults`.
///
/// # Errors
///
/// Returns `JointError::IndexOutOfRange` if `joint` is negative or not below
/// `AXES`; no setter is called in that case. Otherwise see [`JointLoader::load`].
pub fn configure_joint_from_source<S, C>(
    joint: i32,
    source: &S,
    controller: &mut C,
    defaults: JointDefaults,
) -> Result<()>
where
    S: ConfigSource + ?Sized,
    C: JointController,
{
    let axes = axis_count(source)?;

    let index = match usize::try_from(joint) {
        Ok(index) if joint < axes => index,
        _ => {
            log::error!("joint {} exceeds machine axes ({})", joint, axes);
            return Err(Error::Joint(JointError::IndexOutOfRange { joint, axes }));
        }
    };

    let defaults = defaults.with_traj_units(source)?;
    JointLoader::new(defaults).load(index, source, controller)
}

/// Open the TOML document at `path` and configure `joint` from it.
///
/// # Errors
///
/// Returns `ConfigError::IoError` or `ConfigError::ParseError` if the document
/// cannot be opened, otherwise see [`configure_joint_from_source`].
///
/// # Example
///
/// ```rust,ignore
/// use joint_config::{configure_joint, JointDefaults};
///
/// configure_joint(0, "machine.toml", &mut controller, JointDefaults::default())?;
/// ```
#[cfg(feature = "std")]
pub fn configure_joint<P, C>(
    joint: i32,
    path: P,
    controller: &mut C,
    defaults: JointDefaults,
) -> Result<()>
where
    P: AsRef<std::path::Path>,
    C: JointController,
{
    let source = crate::config::TomlSource::open(path)?;
    configure_joint_from_source(joint, &source, controller, defaults)
}
