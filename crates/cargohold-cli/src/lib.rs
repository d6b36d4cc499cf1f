//! Cargohold CLI library.
//!
//! This crate provides the interactive menu, the self-check harness, the inert
//! persistence stand-in and terminal styling used by the `cargohold-cli` binary.

pub mod commands;
pub mod persistence;
pub mod terminal;

pub use commands::menu::{Flow, Menu, MenuCommand};
pub use commands::self_check::{run_self_check, CheckReport, CheckResult};
