//! Script runtime integration.
//!
//! The pipeline only needs one capability from a runtime: turn a snippet of
//! source text into an [`Outcome`]. `CommandRuntime` provides that over any
//! interpreter that reads a program on stdin, which is how the default
//! `ruby` setup works.

use anyhow::Result;
use std::io::Write;
use std::process::{Command, Stdio};

use crate::config::RuntimeConfig;
use crate::outcome::Outcome;

/// A script evaluation capability.
///
/// Implementations must never return an error for a failed evaluation; the
/// failure text is the outcome. Deterministic input should produce
/// deterministic success/failure text.
pub trait Runtime {
    fn evaluate(&mut self, source: &str) -> Outcome;
}

/// Runs snippets through an external interpreter process.
///
/// The snippet is written to the interpreter's stdin; stdout becomes the
/// success text (trailing newline trimmed). A non-zero exit renders stderr
/// as the failure text, and a spawn failure renders the spawn error itself.
pub struct CommandRuntime {
    command: String,
    args: Vec<String>,
}

impl CommandRuntime {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
        }
    }

    /// Probe that the configured interpreter exists in PATH.
    pub fn check_available(&self) -> Result<()> {
        if !which(&self.command) {
            anyhow::bail!("Interpreter not found in PATH: {}", self.command);
        }
        Ok(())
    }

    fn run(&self, source: &str) -> Result<Outcome> {
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // stdin is piped, so take() cannot fail here
        if let Some(mut stdin) = child.stdin.take() {
            // An interpreter that exits without reading its stdin closes the
            // pipe early; that is not a write failure worth reporting over
            // the process's own exit status.
            if let Err(e) = stdin.write_all(source.as_bytes()) {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
        }

        let output = child.wait_with_output()?;

        if output.status.success() {
            let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
            if text.ends_with('\n') {
                text.pop();
            }
            Ok(Outcome::Success(text))
        } else {
            let mut text = String::from_utf8_lossy(&output.stderr).into_owned();
            if text.is_empty() {
                text = format!("{} exited with {}", self.command, output.status);
            } else if text.ends_with('\n') {
                text.pop();
            }
            Ok(Outcome::Failure(text))
        }
    }
}

impl Runtime for CommandRuntime {
    fn evaluate(&mut self, source: &str) -> Outcome {
        log::debug!("evaluating {} bytes via {}", source.len(), self.command);
        match self.run(source) {
            Ok(outcome) => outcome,
            Err(e) => Outcome::Failure(e.to_string()),
        }
    }
}

/// Check if a command exists in PATH
fn which(command: &str) -> bool {
    Command::new("which")
        .arg(command)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runtime(command: &str, args: &[&str]) -> CommandRuntime {
        CommandRuntime {
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn test_cat_echoes_snippet() {
        let mut rt = runtime("cat", &[]);
        let outcome = rt.evaluate("1+1");
        assert_eq!(outcome, Outcome::Success("1+1".to_string()));
    }

    #[test]
    fn test_trailing_newline_trimmed() {
        let mut rt = runtime("cat", &[]);
        let outcome = rt.evaluate("1+1\n");
        assert_eq!(outcome.render(), "1+1");
    }

    #[test]
    fn test_missing_command_is_failure_outcome() {
        let mut rt = runtime("definitely-not-an-interpreter", &[]);
        let outcome = rt.evaluate("1+1");
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_nonzero_exit_renders_stderr() {
        let mut rt = runtime("sh", &["-c", "echo boom >&2; exit 1"]);
        let outcome = rt.evaluate("");
        assert_eq!(outcome, Outcome::Failure("boom".to_string()));
    }

    #[test]
    fn test_nonzero_exit_without_stderr_mentions_status() {
        let mut rt = runtime("sh", &["-c", "exit 3"]);
        let outcome = rt.evaluate("");
        assert!(outcome.is_failure());
        assert!(outcome.render().contains("sh"));
    }

    #[test]
    fn test_check_available() {
        assert!(runtime("sh", &[]).check_available().is_ok());
        assert!(runtime("definitely-not-an-interpreter", &[])
            .check_available()
            .is_err());
    }
}
