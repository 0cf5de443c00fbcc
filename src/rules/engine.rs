// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine: classify every line, then check it against its role.

use crate::commit::{CommitMessage, LineRole, LogicalLine};
use crate::error::{GateError, Result, StructureError};

use super::builtin::apply_rule;
use super::validator::ValidationResult;

/// Assign a role to every line, failing on the first line nothing claims.
///
/// Classification runs over the whole message before any rule so that an
/// unassigned line is always reported, whatever the earlier lines contain.
fn classify(message: &CommitMessage) -> Result<Vec<(LineRole, &LogicalLine)>> {
    message
        .lines
        .iter()
        .map(|line| match line.role() {
            Some(role) => {
                tracing::debug!(line = line.number(), role = %role, "Classified line");
                Ok((role, line))
            }
            None => Err(GateError::from(StructureError::UnassignedLine {
                line: line.number(),
                text: line.text.clone(),
            })),
        })
        .collect()
}

/// Validate a commit message, collecting one issue per failing line.
pub fn check(message: &str) -> Result<ValidationResult> {
    let parsed = CommitMessage::parse(message);
    tracing::debug!("Checking message with {} logical lines", parsed.len());

    let mut result = ValidationResult::new(parsed.raw.clone());
    for (role, line) in classify(&parsed)? {
        if let Some(issue) = apply_rule(role, line) {
            tracing::debug!(line = issue.line, code = %issue.code, "Rule violated");
            result.push(issue);
        }
    }

    Ok(result)
}

/// Validate a commit message and return only the verdict.
///
/// `Ok(false)` means the message breaks the convention. `Err` is reserved
/// for messages with a non-trailer line after the body.
pub fn validate(message: &str) -> Result<bool> {
    let parsed = CommitMessage::parse(message);
    let classified = classify(&parsed)?;

    Ok(classified
        .into_iter()
        .all(|(role, line)| apply_rule(role, line).is_none()))
}
