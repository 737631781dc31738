//! Configuration: environment overrides on top of fixed defaults.

#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, WbgError};

/// Shell used when `SHELL` is unset or empty.
pub const DEFAULT_SHELL: &str = "sh";
/// Number of samples retained for plotting.
pub const DEFAULT_WINDOW_SIZE: usize = 100;
/// Rows of vertical resolution in the rendered chart.
pub const DEFAULT_GRAPH_HEIGHT: usize = 10;
/// Sampling period. Not configurable.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

const SHELL_VAR: &str = "SHELL";
const LOG_JSONL_VAR: &str = "WBG_LOG_JSONL";

/// Runtime configuration resolved once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Shell executable invoked as `<shell> -c <command>`.
    pub shell: String,
    /// Maximum samples kept in the rolling window (0 = unbounded).
    pub window_size: usize,
    /// Chart height in rows.
    pub graph_height: usize,
    /// Emit JSONL activity events on stderr.
    pub log_jsonl: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shell: DEFAULT_SHELL.to_string(),
            window_size: DEFAULT_WINDOW_SIZE,
            graph_height: DEFAULT_GRAPH_HEIGHT,
            log_jsonl: false,
        }
    }
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_env_lookup(env_var)
    }

    /// Resolve configuration through an injectable variable lookup.
    ///
    /// An empty `SHELL` counts as unset; any other value is used verbatim.
    /// Blank flag values count as unset.
    pub fn from_env_lookup<F>(mut lookup: F) -> Result<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(shell) = lookup(SHELL_VAR).filter(|raw| !raw.is_empty()) {
            cfg.shell = shell;
        }
        if let Some(raw) = lookup(LOG_JSONL_VAR).filter(|raw| !raw.trim().is_empty()) {
            cfg.log_jsonl = parse_env_bool(LOG_JSONL_VAR, &raw)?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.shell.is_empty() {
            return Err(WbgError::Config {
                var: SHELL_VAR,
                details: "shell path must not be empty".to_string(),
            });
        }
        if self.graph_height == 0 {
            return Err(WbgError::Config {
                var: "graph_height",
                details: "graph height must be >= 1".to_string(),
            });
        }
        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok()
}

fn parse_env_bool(name: &'static str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(WbgError::Config {
            var: name,
            details: format!("{name}={raw:?}: expected a boolean"),
        }),
    }
}
