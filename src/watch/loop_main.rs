//! Main watch loop: wait on ticker or signal, sample, render, print.
//!
//! One thread, one `select!`. A tick runs the sample-and-render cycle to
//! completion before the loop waits again, so at most one command is in
//! flight. A signal that arrives while the command runs is seen on the next
//! wait. The first sampling error ends the loop.

#![allow(missing_docs)]

use std::io::{self, Write};
use std::time::Instant;

use chrono::Local;
use crossbeam_channel::{Receiver, select};

use crate::core::config::{Config, TICK_INTERVAL};
use crate::core::errors::{Result, WbgError};
use crate::graph::RollingGraphRenderer;
use crate::logger::jsonl::{EventType, JsonlWriter, LogEntry, Severity};
use crate::sampler::{CommandExecutor, SampleSource};
use crate::watch::display::write_frame;
use crate::watch::signals::{SignalGuard, StopSignal};
use crate::watch::ticker::Ticker;

/// Why a loop that did not fail came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// SIGINT or SIGTERM between ticks.
    Signal(StopSignal),
    /// The tick source hung up. Only scripted tick sources do this.
    TicksExhausted,
}

/// Join command-line words into the command string run on every tick.
pub fn join_command<S: AsRef<str>>(args: &[S]) -> Result<String> {
    if args.is_empty() {
        return Err(WbgError::Argument {
            details: "command must be given".to_string(),
        });
    }
    Ok(args
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" "))
}

/// Sampling loop state: source, window, output sinks.
pub struct WatchLoop<S, W, L = io::Stderr>
where
    L: Write,
{
    command: String,
    shell: Option<String>,
    source: S,
    renderer: RollingGraphRenderer,
    out: W,
    activity: JsonlWriter<L>,
    ticks: u64,
}

impl<S, W> WatchLoop<S, W, io::Stderr>
where
    S: SampleSource,
    W: Write,
{
    pub fn new(
        command: impl Into<String>,
        source: S,
        renderer: RollingGraphRenderer,
        out: W,
    ) -> Self {
        Self {
            command: command.into(),
            shell: None,
            source,
            renderer,
            out,
            activity: JsonlWriter::disabled(),
            ticks: 0,
        }
    }
}

impl<S, W, L> WatchLoop<S, W, L>
where
    S: SampleSource,
    W: Write,
    L: Write,
{
    /// Replace the activity log sink.
    pub fn with_activity_log<L2: Write>(self, activity: JsonlWriter<L2>) -> WatchLoop<S, W, L2> {
        WatchLoop {
            command: self.command,
            shell: self.shell,
            source: self.source,
            renderer: self.renderer,
            out: self.out,
            activity,
            ticks: self.ticks,
        }
    }

    /// Shell recorded on the `watch_start` event.
    #[must_use]
    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = Some(shell.into());
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Samples currently in the window, oldest first.
    pub fn history(&self) -> Vec<f64> {
        self.renderer.history()
    }

    /// Completed sample-and-render cycles.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (W, JsonlWriter<L>) {
        (self.out, self.activity)
    }

    /// Run one sample-and-render cycle.
    ///
    /// On a sampling error nothing is added to the window and nothing is
    /// printed.
    pub fn tick(&mut self) -> Result<()> {
        let started = Instant::now();
        let value = match self.source.sample() {
            Ok(value) => value,
            Err(err) => {
                self.log_error(&err);
                return Err(err);
            }
        };
        let elapsed = started.elapsed();

        let chart = self.renderer.next(value);
        write_frame(&mut self.out, &Local::now(), &self.command, &chart)
            .map_err(|e| WbgError::io("display", e))?;
        self.ticks += 1;

        let mut entry = LogEntry::new(EventType::Sample, Severity::Info);
        entry.value = Some(value);
        entry.window_len = Some(self.renderer.len());
        entry.duration_ms = Some(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX));
        self.activity.write_entry(&entry);
        Ok(())
    }

    /// Wait on `ticks` and `signals` until a signal, an error, or the tick
    /// source disconnects.
    pub fn run(
        &mut self,
        ticks: &Receiver<Instant>,
        signals: &Receiver<StopSignal>,
    ) -> Result<StopReason> {
        let mut entry = LogEntry::new(EventType::WatchStart, Severity::Info);
        entry.command = Some(self.command.clone());
        entry.shell.clone_from(&self.shell);
        self.activity.write_entry(&entry);

        loop {
            select! {
                recv(ticks) -> tick => match tick {
                    Ok(_) => self.tick()?,
                    Err(_) => return Ok(self.stop(StopReason::TicksExhausted)),
                },
                recv(signals) -> signal => match signal {
                    Ok(signal) => {
                        writeln!(self.out, "stopped by {signal}")
                            .and_then(|()| self.out.flush())
                            .map_err(|e| WbgError::io("display", e))?;
                        return Ok(self.stop(StopReason::Signal(signal)));
                    }
                    Err(_) => {
                        let err = WbgError::ChannelClosed { component: "signals" };
                        self.log_error(&err);
                        return Err(err);
                    }
                },
            }
        }
    }

    fn stop(&mut self, reason: StopReason) -> StopReason {
        let mut entry = LogEntry::new(EventType::WatchStop, Severity::Info);
        entry.window_len = Some(self.renderer.len());
        entry.details = Some(match reason {
            StopReason::Signal(signal) => format!("stopped by {signal}"),
            StopReason::TicksExhausted => "tick source closed".to_string(),
        });
        self.activity.write_entry(&entry);
        reason
    }

    fn log_error(&mut self, err: &WbgError) {
        let mut entry = LogEntry::new(EventType::Error, Severity::Critical);
        entry.command = Some(self.command.clone());
        entry.error_code = Some(err.code().to_string());
        entry.error_message = Some(err.to_string());
        self.activity.write_entry(&entry);
    }
}

/// Watch `command` until SIGINT/SIGTERM or the first error.
///
/// The ticker and the signal subscription live for the duration of this call
/// and are released on every return path.
pub fn run(config: &Config, command: &str) -> Result<StopReason> {
    let executor = CommandExecutor::new(command, config.shell.as_str());
    let shell = executor.shell().to_string();
    let renderer = RollingGraphRenderer::new(config.window_size, config.graph_height);

    let ticker = Ticker::start(TICK_INTERVAL);
    let signals = SignalGuard::install()?;

    let mut watch = WatchLoop::new(
        executor.command().to_string(),
        executor,
        renderer,
        io::stdout().lock(),
    )
    .with_shell(shell)
    .with_activity_log(JsonlWriter::stderr(config.log_jsonl));
    watch.run(ticker.receiver(), signals.receiver())
}
