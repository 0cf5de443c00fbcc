// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for commit-gate.
//!
//! This module handles command-line argument parsing and execution.

pub mod args;
mod dispatch;

pub use args::{Cli, OutputFormat};
pub use dispatch::{run, ERROR_TEMPLATE};
