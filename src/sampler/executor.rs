//! Shell command executor: one child process per sample, stdout parsed as `f64`.

#![allow(missing_docs)]

use std::process::{Command, Stdio};

use crate::core::errors::{Result, WbgError};

/// Anything that can produce one numeric sample on demand.
///
/// The watch loop only depends on this trait so it can be driven by scripted
/// sources in tests.
pub trait SampleSource {
    /// Produce exactly one sample or fail.
    fn sample(&mut self) -> Result<f64>;
}

/// Runs `<shell> -c <command>` and interprets trimmed stdout as a sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandExecutor {
    command: String,
    shell: String,
}

impl CommandExecutor {
    #[must_use]
    pub fn new(command: impl Into<String>, shell: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            shell: shell.into(),
        }
    }

    /// The command text passed to the shell.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    #[must_use]
    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Execute the command once and parse its output.
    ///
    /// Blocks until the child exits. There is no timeout.
    pub fn run(&self) -> Result<f64> {
        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(&self.command)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|error| WbgError::Execution {
                command: self.command.clone(),
                details: error.to_string(),
            })?;

        if !output.status.success() {
            return Err(WbgError::Execution {
                command: self.command.clone(),
                details: output.status.to_string(),
            });
        }

        parse_sample(&String::from_utf8_lossy(&output.stdout))
    }
}

impl SampleSource for CommandExecutor {
    fn sample(&mut self) -> Result<f64> {
        self.run()
    }
}

/// Parse raw command output into a finite sample.
///
/// Surrounding whitespace is ignored. Anything else that is not a single
/// float literal (empty text, words, several numbers) is a parse error.
pub fn parse_sample(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let value = trimmed.parse::<f64>().map_err(|error| WbgError::Parse {
        input: trimmed.to_string(),
        details: error.to_string(),
    })?;
    if !value.is_finite() {
        return Err(WbgError::Parse {
            input: trimmed.to_string(),
            details: "sample is not a finite number".to_string(),
        });
    }
    Ok(value)
}
