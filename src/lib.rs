// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-gate - commit-msg hook for tagged commit messages
//!
//! Checks that a commit message has the shape
//!
//! ```text
//! <feature|fix|style|docs|text>(<scope>): <description>
//!
//! <detailed description>
//!
//! BREAKING CHANGES: <description>
//! ```
//!
//! where the scope, the body and the trailer are optional.
//!
//! # Example
//!
//! ```
//! use commit_gate::validate;
//!
//! assert!(validate("fix(app.py): Fixed issue #250").unwrap());
//! assert!(!validate("Add change to app.py").unwrap());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use error::{GateError, Result};
pub use rules::{check, validate};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commit-gate.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, short_sha(sha), date)
            }
            (Some(sha), None) => format!("{} ({})", VERSION, short_sha(sha)),
            _ => VERSION.to_string(),
        }
    }

    fn short_sha(sha: &str) -> &str {
        sha.get(..7).unwrap_or(sha)
    }

}
