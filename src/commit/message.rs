// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message splitting into logical lines.

use lazy_static::lazy_static;
use regex::Regex;

use super::role::LineRole;

lazy_static! {
    /// Separator between logical lines: any run of newlines.
    static ref NEWLINE_RUN: Regex = Regex::new(r"\n+").unwrap();
}

/// One paragraph-like unit of a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 0-based position among the logical lines.
    pub index: usize,
    /// Line text, possibly empty.
    pub text: String,
}

impl LogicalLine {
    /// 1-based line number for user-facing output.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// The role this line plays, or `None` if no position or prefix claims it.
    pub fn role(&self) -> Option<LineRole> {
        LineRole::classify(self.index, &self.text)
    }
}

/// A commit message split into logical lines.
#[derive(Debug, Clone)]
pub struct CommitMessage {
    /// The raw text as given.
    pub raw: String,
    /// Logical lines in order. Never empty.
    pub lines: Vec<LogicalLine>,
}

impl CommitMessage {
    /// Split a commit message on runs of newlines.
    ///
    /// Blank separator lines disappear, but a leading or trailing newline
    /// still produces an empty first or last line, and an empty message
    /// yields a single empty line.
    pub fn parse(message: &str) -> Self {
        let lines = NEWLINE_RUN
            .split(message)
            .enumerate()
            .map(|(index, text)| LogicalLine {
                index,
                text: text.to_string(),
            })
            .collect();

        Self {
            raw: message.to_string(),
            lines,
        }
    }

    /// Get the first line (subject position).
    pub fn first_line(&self) -> &str {
        self.lines.first().map(|l| l.text.as_str()).unwrap_or("")
    }

    /// Number of logical lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the message has no logical lines. Always false after `parse`.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
