#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

pub struct CmdResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
    pub log_path: PathBuf,
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

pub fn resolve_bin_path() -> PathBuf {
    if let Ok(path) = std::env::var("CARGO_BIN_EXE_watchbygraph") {
        return PathBuf::from(path);
    }

    let exe_name = if cfg!(windows) {
        "watchbygraph.exe"
    } else {
        "watchbygraph"
    };
    let fallback = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .and_then(|deps| deps.parent().map(PathBuf::from))
        .map(|debug_dir| debug_dir.join(exe_name));

    match fallback {
        Some(path) if path.exists() => path,
        _ => panic!("unable to resolve watchbygraph binary path for integration test"),
    }
}

/// Base command with a predictable shell and no inherited log settings.
pub fn base_command(args: &[&str]) -> Command {
    let mut cmd = Command::new(resolve_bin_path());
    cmd.args(args)
        .env("SHELL", "sh")
        .env_remove("WBG_LOG_JSONL")
        .env("RUST_BACKTRACE", "1");
    cmd
}

/// Start the binary with piped stdout/stderr for tests that signal it.
pub fn spawn_cli(args: &[&str], extra_env: &[(&str, &str)]) -> Child {
    let mut cmd = base_command(args);
    for (name, value) in extra_env {
        cmd.env(name, value);
    }
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn watchbygraph")
}

/// Write a per-case log so failures can be inspected after the run.
pub fn record_case(
    case_name: &str,
    args: &[&str],
    status: ExitStatus,
    stdout: String,
    stderr: String,
) -> CmdResult {
    let root = std::env::temp_dir().join("wbg-test-logs");
    fs::create_dir_all(&root).expect("create temp test log dir");
    let log_path = root.join(format!("{}-{}.log", sanitize(case_name), now_millis()));

    let mut log_content = String::new();
    log_content.push_str(&format!("case={case_name}\n"));
    log_content.push_str(&format!("bin={}\n", resolve_bin_path().display()));
    log_content.push_str(&format!("args={args:?}\n"));
    log_content.push_str(&format!("status={status}\n"));
    log_content.push_str("----- stdout -----\n");
    log_content.push_str(&stdout);
    log_content.push('\n');
    log_content.push_str("----- stderr -----\n");
    log_content.push_str(&stderr);
    log_content.push('\n');
    fs::write(&log_path, log_content).expect("write test log");

    CmdResult {
        status,
        stdout,
        stderr,
        log_path,
    }
}

pub fn run_cli_case(case_name: &str, args: &[&str]) -> CmdResult {
    let output = base_command(args)
        .stdin(Stdio::null())
        .output()
        .expect("execute watchbygraph command");

    record_case(
        case_name,
        args,
        output.status,
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}
