// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! The grammar is fixed: a tagged subject, one optional body paragraph and
//! any number of `BREAKING CHANGES:` trailers.

mod builtin;
mod engine;
mod validator;

pub use builtin::{apply_rule, BREAKING_CHANGES, COMMIT_TAGS};
pub use engine::{check, validate};
pub use validator::{ValidationIssue, ValidationResult};
