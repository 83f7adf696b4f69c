//! Recording controller shared by the test targets.

#![allow(dead_code)]

use joint_config::{HomingParams, JointController, JointType, Setter};

/// One controller call, with the values it received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    JointType(usize, JointType),
    Units(usize, f64),
    Backlash(usize, f64),
    MinPositionLimit(usize, f64),
    MaxPositionLimit(usize, f64),
    Ferror(usize, f64),
    MinFerror(usize, f64),
    HomingParams(usize, HomingParams),
    MaxVelocity(usize, f64),
    MaxAcceleration(usize, f64),
    LoadCompensation(usize, String, i32),
    Activate(usize),
}

impl Call {
    pub fn setter(&self) -> Setter {
        match self {
            Call::JointType(..) => Setter::JointType,
            Call::Units(..) => Setter::Units,
            Call::Backlash(..) => Setter::Backlash,
            Call::MinPositionLimit(..) => Setter::MinPositionLimit,
            Call::MaxPositionLimit(..) => Setter::MaxPositionLimit,
            Call::Ferror(..) => Setter::Ferror,
            Call::MinFerror(..) => Setter::MinFerror,
            Call::HomingParams(..) => Setter::HomingParams,
            Call::MaxVelocity(..) => Setter::MaxVelocity,
            Call::MaxAcceleration(..) => Setter::MaxAcceleration,
            Call::LoadCompensation(..) => Setter::LoadCompensation,
            Call::Activate(..) => Setter::Activate,
        }
    }
}

/// Rejection reported by [`RecordingController`].
#[derive(Debug, Clone, PartialEq)]
pub struct Rejected(pub Setter);

/// Controller that records every call and optionally rejects one setter.
#[derive(Debug, Default)]
pub struct RecordingController {
    pub calls: Vec<Call>,
    pub reject: Option<Setter>,
}

impl RecordingController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(setter: Setter) -> Self {
        Self {
            calls: Vec::new(),
            reject: Some(setter),
        }
    }

    pub fn setters(&self) -> Vec<Setter> {
        self.calls.iter().map(Call::setter).collect()
    }

    pub fn activated(&self) -> bool {
        self.calls.iter().any(|c| matches!(c, Call::Activate(_)))
    }

    fn record(&mut self, call: Call) -> Result<(), Rejected> {
        let setter = call.setter();
        self.calls.push(call);
        match self.reject {
            Some(rejected) if rejected == setter => Err(Rejected(setter)),
            _ => Ok(()),
        }
    }
}

impl JointController for RecordingController {
    type Error = Rejected;

    fn set_joint_type(&mut self, joint: usize, joint_type: JointType) -> Result<(), Rejected> {
        self.record(Call::JointType(joint, joint_type))
    }

    fn set_units(&mut self, joint: usize, units: f64) -> Result<(), Rejected> {
        self.record(Call::Units(joint, units))
    }

    fn set_backlash(&mut self, joint: usize, backlash: f64) -> Result<(), Rejected> {
        self.record(Call::Backlash(joint, backlash))
    }

    fn set_min_position_limit(&mut self, joint: usize, limit: f64) -> Result<(), Rejected> {
        self.record(Call::MinPositionLimit(joint, limit))
    }

    fn set_max_position_limit(&mut self, joint: usize, limit: f64) -> Result<(), Rejected> {
        self.record(Call::MaxPositionLimit(joint, limit))
    }

    fn set_ferror(&mut self, joint: usize, ferror: f64) -> Result<(), Rejected> {
        self.record(Call::Ferror(joint, ferror))
    }

    fn set_min_ferror(&mut self, joint: usize, ferror: f64) -> Result<(), Rejected> {
        self.record(Call::MinFerror(joint, ferror))
    }

    fn set_homing_params(&mut self, joint: usize, homing: &HomingParams) -> Result<(), Rejected> {
        self.record(Call::HomingParams(joint, *homing))
    }

    fn set_max_velocity(&mut self, joint: usize, velocity: f64) -> Result<(), Rejected> {
        self.record(Call::MaxVelocity(joint, velocity))
    }

    fn set_max_acceleration(&mut self, joint: usize, acceleration: f64) -> Result<(), Rejected> {
        self.record(Call::MaxAcceleration(joint, acceleration))
    }

    fn load_compensation(&mut self, joint: usize, path: &str, file_type: i32) -> Result<(), Rejected> {
        self.record(Call::LoadCompensation(joint, path.to_string(), file_type))
    }

    fn activate(&mut self, joint: usize) -> Result<(), Rejected> {
        self.record(Call::Activate(joint))
    }
}
