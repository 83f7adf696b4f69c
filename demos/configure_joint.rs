//! Example: Configure one joint from a TOML machine description.
//!
//! Prints every controller call the loader makes, in order, and exits with a
//! failure status if the joint cannot be configured.
//!
//! Run with: `cargo run --example configure_joint -- 0 machine.toml`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use joint_config::{configure_joint, HomingParams, JointController, JointDefaults, JointType};

/// Load one joint section and print the resulting controller calls.
#[derive(Debug, Parser)]
struct Args {
    /// Zero-based joint index.
    #[arg(allow_negative_numbers = true)]
    joint: i32,

    /// Path to the TOML machine description.
    path: PathBuf,

    /// Log resolved values as they are read.
    #[arg(short, long)]
    verbose: bool,
}

/// Controller that accepts everything and prints each call.
struct PrintController;

impl JointController for PrintController {
    type Error = core::convert::Infallible;

    fn set_joint_type(&mut self, joint: usize, joint_type: JointType) -> Result<(), Self::Error> {
        println!("joint {}: type = {}", joint, joint_type);
        Ok(())
    }

    fn set_units(&mut self, joint: usize, units: f64) -> Result<(), Self::Error> {
        println!("joint {}: units = {}", joint, units);
        Ok(())
    }

    fn set_backlash(&mut self, joint: usize, backlash: f64) -> Result<(), Self::Error> {
        println!("joint {}: backlash = {}", joint, backlash);
        Ok(())
    }

    fn set_min_position_limit(&mut self, joint: usize, limit: f64) -> Result<(), Self::Error> {
        println!("joint {}: min limit = {}", joint, limit);
        Ok(())
    }

    fn set_max_position_limit(&mut self, joint: usize, limit: f64) -> Result<(), Self::Error> {
        println!("joint {}: max limit = {}", joint, limit);
        Ok(())
    }

    fn set_ferror(&mut self, joint: usize, ferror: f64) -> Result<(), Self::Error> {
        println!("joint {}: ferror = {}", joint, ferror);
        Ok(())
    }

    fn set_min_ferror(&mut self, joint: usize, ferror: f64) -> Result<(), Self::Error> {
        println!("joint {}: min ferror = {}", joint, ferror);
        Ok(())
    }

    fn set_homing_params(&mut self, joint: usize, homing: &HomingParams) -> Result<(), Self::Error> {
        println!("joint {}: homing = {:?}", joint, homing);
        Ok(())
    }

    fn set_max_velocity(&mut self, joint: usize, velocity: f64) -> Result<(), Self::Error> {
        println!("joint {}: max velocity = {}", joint, velocity);
        Ok(())
    }

    fn set_max_acceleration(&mut self, joint: usize, acceleration: f64) -> Result<(), Self::Error> {
        println!("joint {}: max acceleration = {}", joint, acceleration);
        Ok(())
    }

    fn load_compensation(&mut self, joint: usize, path: &str, file_type: i32) -> Result<(), Self::Error> {
        println!("joint {}: compensation = {} (type {})", joint, path, file_type);
        Ok(())
    }

    fn activate(&mut self, joint: usize) -> Result<(), Self::Error> {
        println!("joint {}: active", joint);
        Ok(())
    }
}

fn init_logger(verbose: bool) -> Result<(), log::SetLoggerError> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logger(args.verbose) {
        eprintln!("cannot set up logging: {}", e);
    }

    match configure_joint(args.joint, &args.path, &mut PrintController, JointDefaults::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
