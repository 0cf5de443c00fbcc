// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in line rules.

use lazy_static::lazy_static;
use regex::Regex;

use crate::commit::{LineRole, LogicalLine};

use super::validator::ValidationIssue;

/// Marker that opens a breaking-change trailer.
pub const BREAKING_CHANGES: &str = "BREAKING CHANGES";

/// Tags accepted at the start of a subject line.
///
/// `text` is the accepted literal; the help template shows `test`.
pub const COMMIT_TAGS: &[&str] = &["feature", "fix", "style", "docs", "text"];

lazy_static! {
    /// Subject grammar: `tag(scope): word`, scope optional, prefix match.
    static ref SUBJECT_REGEX: Regex =
        Regex::new(r"^(?:feature|fix|style|docs|text)(?:\([a-zA-Z0-9._-]*\))?: *\w+").unwrap();

    /// Trailer grammar: marker, colon, anything.
    static ref TRAILER_REGEX: Regex = Regex::new(r"^BREAKING CHANGES: *.*").unwrap();
}

/// Apply the rule for `role` to a line.
pub fn apply_rule(role: LineRole, line: &LogicalLine) -> Option<ValidationIssue> {
    match role {
        LineRole::Subject => check_subject(line),
        LineRole::Body => check_body(line),
        LineRole::BreakingChangeTrailer => check_trailer(line),
    }
}

/// Check the subject line.
fn check_subject(line: &LogicalLine) -> Option<ValidationIssue> {
    if line.text.contains(BREAKING_CHANGES) {
        return Some(ValidationIssue {
            code: "subject-contains-trailer".to_string(),
            message: format!("Subject must not contain '{}'", BREAKING_CHANGES),
            suggestion: Some(format!(
                "Move '{}: ...' to its own paragraph after a blank line",
                BREAKING_CHANGES
            )),
            line: line.number(),
            role: LineRole::Subject,
        });
    }

    if SUBJECT_REGEX.is_match(&line.text) {
        None
    } else {
        Some(ValidationIssue {
            code: "subject-format".to_string(),
            message: format!("Subject '{}' does not start with tag(scope): description", line.text),
            suggestion: Some(format!("Start with one of: {}", COMMIT_TAGS.join(", "))),
            line: line.number(),
            role: LineRole::Subject,
        })
    }
}

/// Check the body paragraph. Any text is fine except the trailer marker.
fn check_body(line: &LogicalLine) -> Option<ValidationIssue> {
    if line.text.contains(BREAKING_CHANGES) {
        Some(ValidationIssue {
            code: "body-contains-trailer".to_string(),
            message: format!("Body must not contain '{}'", BREAKING_CHANGES),
            suggestion: Some(format!(
                "Start a new paragraph with '{}: ...'",
                BREAKING_CHANGES
            )),
            line: line.number(),
            role: LineRole::Body,
        })
    } else {
        None
    }
}

/// Check a breaking-change trailer.
fn check_trailer(line: &LogicalLine) -> Option<ValidationIssue> {
    if TRAILER_REGEX.is_match(&line.text) {
        None
    } else {
        Some(ValidationIssue {
            code: "trailer-format".to_string(),
            message: format!("Trailer must start with '{}:'", BREAKING_CHANGES),
            suggestion: Some(format!("Write '{}: <description>'", BREAKING_CHANGES)),
            line: line.number(),
            role: LineRole::BreakingChangeTrailer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_line(index: usize, text: &str) -> LogicalLine {
        LogicalLine {
            index,
            text: text.to_string(),
        }
    }

    fn code(issue: Option<ValidationIssue>) -> Option<String> {
        issue.map(|i| i.code)
    }

    #[test]
    fn test_subject_every_tag_without_scope() {
        for tag in COMMIT_TAGS {
            let line = make_line(0, &format!("{}: add changes to file", tag));
            assert!(check_subject(&line).is_none(), "tag {} rejected", tag);
        }
    }

    #[test]
    fn test_subject_with_scope() {
        for subject in [
            "feature(app.py): Add changes to the file",
            "docs(app_2.js): Remove documentation",
            "style(src-main.rs): Reformat",
            "fix(): Empty scope is allowed",
            "text(A.b_c-9):x",
        ] {
            assert!(check_subject(&make_line(0, subject)).is_none(), "{}", subject);
        }
    }

    #[test]
    fn test_subject_rejects_bad_format() {
        for subject in [
            "Add change to app.py",
            "",
            "test: uses the wrong tag",
            "feat: not a recognised tag",
            "fix(app/main.rs): slash in scope",
            "fix (app.py): space before scope",
            "fix:",
            "fix: !!!",
            "Fix: capitalised",
            " fix: leading space",
        ] {
            assert_eq!(
                code(check_subject(&make_line(0, subject))).as_deref(),
                Some("subject-format"),
                "{}",
                subject
            );
        }
    }

    #[test]
    fn test_subject_rejects_marker() {
        let line = make_line(0, "fix(app.py): Fixed issue #250 BREAKING CHANGES: Changed x method");
        let issue = check_subject(&line).unwrap();
        assert_eq!(issue.code, "subject-contains-trailer");
        assert_eq!(issue.line, 1);
    }

    #[test]
    fn test_body_accepts_anything_but_marker() {
        assert!(check_body(&make_line(1, "")).is_none());
        assert!(check_body(&make_line(1, "Provided a fix for the issue. ")).is_none());
        assert_eq!(
            code(check_body(&make_line(1, "see BREAKING CHANGES below"))).as_deref(),
            Some("body-contains-trailer")
        );
    }

    #[test]
    fn test_trailer() {
        assert!(check_trailer(&make_line(2, "BREAKING CHANGES: Changed x method")).is_none());
        assert!(check_trailer(&make_line(1, "BREAKING CHANGES:")).is_none());
        assert!(check_trailer(&make_line(1, "BREAKING CHANGES:no space")).is_none());

        let issue = check_trailer(&make_line(2, "BREAKING CHANGES Changed x")).unwrap();
        assert_eq!(issue.code, "trailer-format");
        assert_eq!(issue.line, 3);
        assert_eq!(issue.role, LineRole::BreakingChangeTrailer);
    }

    #[test]
    fn test_apply_rule_dispatch() {
        let line = make_line(0, "free text");
        assert_eq!(
            code(apply_rule(LineRole::Subject, &line)).as_deref(),
            Some("subject-format")
        );
        assert!(apply_rule(LineRole::Body, &line).is_none());
        assert_eq!(
            code(apply_rule(LineRole::BreakingChangeTrailer, &line)).as_deref(),
            Some("trailer-format")
        );
    }
}
