//! Unit test harness for joint-config.
//!
//! This module organizes unit tests for each component of the library.

#[path = "../common/mod.rs"]
mod common;

mod config_parsing;
mod document_loading;
mod float_format;
