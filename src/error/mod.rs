// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commit-gate.
//!
//! A message that breaks the convention is not an error: it is reported as
//! a `false` verdict. The types here cover the cases that must stay distinct
//! from that verdict: an unreadable message file and a message whose shape
//! has no rule at all.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commit-gate operations.
#[derive(Error, Debug)]
pub enum GateError {
    // Message file errors
    #[error("Failed to read commit message file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Structural errors
    #[error("Internal error: {0}")]
    Structure(#[from] StructureError),
}

impl GateError {
    /// Process exit status for this error.
    ///
    /// `1` is reserved for a rejected message, so errors start at `2`.
    pub fn exit_code(&self) -> i32 {
        match self {
            GateError::Read { .. } => 2,
            GateError::Structure(_) => 3,
        }
    }
}

/// Errors raised when a message cannot be mapped onto line roles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error(
        "no rule covers line {line} ('{text}'): only the subject, one body paragraph \
         and BREAKING CHANGES trailers are recognised"
    )]
    UnassignedLine { line: usize, text: String },
}

/// Result type alias for commit-gate operations.
pub type Result<T> = std::result::Result<T, GateError>;
