// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Structural roles of logical lines.

use serde::Serialize;

use crate::rules::BREAKING_CHANGES;

/// Structural role assigned to a logical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRole {
    /// The tagged first line.
    Subject,
    /// The single optional free-text paragraph.
    Body,
    /// A `BREAKING CHANGES` line, at any position.
    BreakingChangeTrailer,
}

impl LineRole {
    /// Assign a role from position and prefix.
    ///
    /// The trailer prefix wins over position. Non-trailer lines past the
    /// body have no role.
    pub fn classify(index: usize, text: &str) -> Option<Self> {
        if text.starts_with(BREAKING_CHANGES) {
            return Some(LineRole::BreakingChangeTrailer);
        }

        match index {
            0 => Some(LineRole::Subject),
            1 => Some(LineRole::Body),
            _ => None,
        }
    }

    /// Get the role name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineRole::Subject => "subject",
            LineRole::Body => "body",
            LineRole::BreakingChangeTrailer => "breaking_change_trailer",
        }
    }
}

impl std::fmt::Display for LineRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
