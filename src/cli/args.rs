// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// commit-gate - commit-msg hook for tagged commit messages
///
/// Exits 0 when the message is valid, 1 when it is not, and 2 or 3 when the
/// message could not be checked at all.
#[derive(Parser, Debug)]
#[command(name = "commit-gate")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Validate a commit message file against the tagged message convention", long_about = None)]
pub struct Cli {
    /// File holding the commit message (git passes .git/COMMIT_EDITMSG)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Output format for rejected messages
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}
