//! Entrance tracker CLI library.
//!
//! This crate provides the command handlers, terminal styling, and output
//! formatting behind the `entrance-tracker` binary.

pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;
