// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command execution.

use crate::error::{GateError, Result};
use crate::rules;

use super::args::{Cli, OutputFormat};

/// Help text printed when a message is rejected.
///
/// The grammar accepts the tag `text`, while this text advertises `test`.
/// Both are kept as they are.
pub const ERROR_TEMPLATE: &str = "
Commit must be in the form:
<feature|fix|style|docs|test>(<file>): <description>

<detailed description> ( optional )

<BREAKING CHANGES>: <description> ( optional )
";

/// Run the CLI with the given arguments.
///
/// Returns the verdict; errors are for messages that could not be checked.
pub fn run(cli: Cli) -> Result<bool> {
    tracing::debug!("Reading commit message from {:?}", cli.file);

    let message = std::fs::read_to_string(&cli.file).map_err(|source| GateError::Read {
        path: cli.file.clone(),
        source,
    })?;

    let result = rules::check(&message)?;
    tracing::debug!("Verdict: {}", result.summary());

    if !result.is_valid() {
        result.print(cli.format);
        if cli.format != Some(OutputFormat::Json) {
            println!("{}", ERROR_TEMPLATE);
        }
    }

    Ok(result.is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn cli_for(path: PathBuf) -> Cli {
        Cli {
            file: path,
            debug: false,
            format: None,
        }
    }

    fn message_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_run_valid() {
        let file = message_file("docs(README.md): Describe the hook");
        assert!(run(cli_for(file.path().to_path_buf())).unwrap());
    }

    #[test]
    fn test_run_invalid() {
        let file = message_file("Add change to app.py");
        assert!(!run(cli_for(file.path().to_path_buf())).unwrap());
    }

    #[test]
    fn test_run_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(cli_for(dir.path().join("COMMIT_EDITMSG"))).unwrap_err();
        assert!(matches!(err, GateError::Read { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_run_unassigned_line() {
        let file = message_file("fix: a\nbody\nextra");
        let err = run(cli_for(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, GateError::Structure(_)));
    }

    #[test]
    fn test_template_mentions_every_part() {
        assert!(ERROR_TEMPLATE.contains("<feature|fix|style|docs|test>"));
        assert!(ERROR_TEMPLATE.contains("<BREAKING CHANGES>"));
    }
}
