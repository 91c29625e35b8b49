//! Konship CLI library.
//!
//! This crate provides the operator console for the Konship container
//! inventory: command parsing and handlers, the session loop, output
//! formatting and terminal styling.

pub mod commands;
pub mod logging;
pub mod output;
pub mod session;
pub mod terminal;
