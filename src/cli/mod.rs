//! Command-line interface
//!
//! Argument definitions and command handlers for the `yamlenv` binary.

pub mod args;
pub mod commands;
