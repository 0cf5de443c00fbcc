// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::cli::args::OutputFormat;
use crate::commit::LineRole;
use console::{style, Style};
use serde::Serialize;

/// A single rule violation on one logical line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
    /// 1-based logical line number.
    pub line: usize,
    /// Role the line was checked as.
    pub role: LineRole,
}

impl ValidationIssue {
    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let mut output = format!(
            "{} {} {} {}",
            style("✗").red().bold(),
            Style::new().red().apply_to(&self.code),
            style(format!("line {}:", self.line)).dim(),
            self.message
        );

        if let Some(ref suggestion) = self.suggestion {
            output.push_str(&format!(
                "\n  {} {}",
                style("→").dim(),
                style(suggestion).dim()
            ));
        }

        output
    }
}

/// Result of validating a commit message.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// Whether every line passed its rule.
    pub valid: bool,
    /// The original message.
    pub message: String,
    /// Validation errors, in line order.
    pub errors: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create an empty (passing) result.
    pub fn new(message: String) -> Self {
        Self {
            valid: true,
            message,
            errors: Vec::new(),
        }
    }

    /// Record an issue.
    pub fn push(&mut self, issue: ValidationIssue) {
        self.valid = false;
        self.errors.push(issue);
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Print the result to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        for error in &self.errors {
            println!("  {}", error.format());
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        println!("{}", self.to_json());
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            "Valid".to_string()
        } else {
            format!("Invalid ({} errors)", self.errors.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_issue(code: &str) -> ValidationIssue {
        ValidationIssue {
            code: code.to_string(),
            message: "Test message".to_string(),
            suggestion: Some("Fix it".to_string()),
            line: 1,
            role: LineRole::Subject,
        }
    }

    #[test]
    fn test_validation_result_valid() {
        let result = ValidationResult::new("fix: test".to_string());
        assert!(result.is_valid());
        assert!(result.errors.is_empty());
        assert_eq!(result.summary(), "Valid");
    }

    #[test]
    fn test_validation_result_with_errors() {
        let mut result = ValidationResult::new("test".to_string());
        result.push(make_issue("subject-format"));

        assert!(!result.is_valid());
        assert_eq!(result.summary(), "Invalid (1 errors)");
    }

    #[test]
    fn test_validation_issue_format() {
        let formatted = make_issue("subject-format").format();
        assert!(formatted.contains("subject-format"));
        assert!(formatted.contains("Test message"));
        assert!(formatted.contains("line 1"));
        assert!(formatted.contains("Fix it"));
    }

    #[test]
    fn test_json_shape() {
        let mut result = ValidationResult::new("bad".to_string());
        result.push(make_issue("subject-format"));

        let json: serde_json::Value = serde_json::from_str(&result.to_json()).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["message"], "bad");
        assert_eq!(json["errors"][0]["code"], "subject-format");
        assert_eq!(json["errors"][0]["line"], 1);
        assert_eq!(json["errors"][0]["role"], "subject");
    }
}
