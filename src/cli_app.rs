//! Top-level CLI definition and dispatch.

use clap::{ArgAction, Parser};

use watchbygraph::core::config::Config;
use watchbygraph::core::errors::Result;
use watchbygraph::watch::{self, StopReason};

/// Plot a command's numeric output once per second as a rolling ASCII graph.
#[derive(Debug, Parser)]
#[command(
    name = "watchbygraph",
    author,
    version,
    disable_help_flag = true,
    disable_version_flag = true,
    about = "Run a shell command every second and graph its output",
    long_about = "Runs `$SHELL -c <COMMAND>` once per second, parses the trimmed output as a \
                  number and redraws a line graph of the last 100 samples. Stop with Ctrl-C."
)]
pub struct Cli {
    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version.
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Command to run; all words are joined with single spaces.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    command: Vec<String>,
}

/// Validate arguments, resolve configuration and watch until stopped.
pub fn run(cli: &Cli) -> Result<StopReason> {
    let command = watch::join_command(&cli.command)?;
    let config = Config::from_env()?;
    watch::run(&config, &command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchbygraph::core::errors::ErrorKind;

    #[test]
    fn collects_all_words_as_command() {
        let cli = Cli::try_parse_from(["watchbygraph", "echo", "-n", "1"]).unwrap();
        assert_eq!(cli.command, vec!["echo", "-n", "1"]);
    }

    #[test]
    fn leading_hyphen_words_belong_to_command() {
        let cli = Cli::try_parse_from(["watchbygraph", "-x", "date +%s"]).unwrap();
        assert_eq!(cli.command, vec!["-x", "date +%s"]);
    }

    #[test]
    fn empty_invocation_parses_but_fails_to_run() {
        let cli = Cli::try_parse_from(["watchbygraph"]).unwrap();
        assert!(cli.command.is_empty());
        let err = run(&cli).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
    }

    #[test]
    fn help_and_version_are_handled_by_clap() {
        let help = Cli::try_parse_from(["watchbygraph", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
        let version = Cli::try_parse_from(["watchbygraph", "--version"]).unwrap_err();
        assert_eq!(version.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn short_help_and_version_are_command_words() {
        let cli = Cli::try_parse_from(["watchbygraph", "-h"]).unwrap();
        assert_eq!(cli.command, vec!["-h"]);
        let cli = Cli::try_parse_from(["watchbygraph", "-V", "x"]).unwrap();
        assert_eq!(cli.command, vec!["-V", "x"]);
    }

    #[test]
    fn only_a_leading_double_dash_is_consumed() {
        let cli = Cli::try_parse_from(["watchbygraph", "--", "echo", "1"]).unwrap();
        assert_eq!(cli.command, vec!["echo", "1"]);
        let cli = Cli::try_parse_from(["watchbygraph", "echo", "--", "1"]).unwrap();
        assert_eq!(cli.command, vec!["echo", "--", "1"]);
    }
}
