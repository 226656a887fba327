//! Controlling terminal lookup
//!
//! Finds the device file the OSC 52 sequence has to be written to. Inside
//! tmux the `tty` query often fails because the process has no controlling
//! terminal of its own, so the active pane's device is asked from tmux.

use std::path::PathBuf;

use super::environment::Environment;
use super::process::CommandRunner;
use crate::error::{OscyankError, Result};

const NOT_A_TTY: &str = "not a tty";
const PANE_FORMAT: &str = "#{pane_active} #{pane_tty}";

/// Resolve the terminal device path
pub fn resolve(env: &Environment, runner: &dyn CommandRunner) -> Result<PathBuf> {
    if let Some(tty) = env.shell_tty() {
        log::debug!("Using terminal from environment: {}", tty);
        return Ok(PathBuf::from(tty));
    }

    if let Some(tty) = query_tty(runner) {
        log::debug!("Resolved terminal via tty: {}", tty);
        return Ok(PathBuf::from(tty));
    }

    if env.in_tmux() {
        let tty = tmux_active_pane_tty(runner)?;
        log::debug!("Resolved terminal via tmux: {}", tty);
        return Ok(PathBuf::from(tty));
    }

    log::warn!("No available tty is found!");
    Err(OscyankError::TerminalNotFound)
}

fn query_tty(runner: &dyn CommandRunner) -> Option<String> {
    match runner.capture("tty", &[]) {
        Ok(out) => {
            let tty = out.trim();
            if tty.is_empty() || tty == NOT_A_TTY {
                None
            } else {
                Some(tty.to_string())
            }
        }
        Err(e) => {
            log::debug!("tty query failed: {}", e);
            None
        }
    }
}

fn tmux_active_pane_tty(runner: &dyn CommandRunner) -> Result<String> {
    let listing = runner
        .capture("tmux", &["list-panes", "-F", PANE_FORMAT])
        .map_err(|e| {
            log::debug!("tmux pane query failed: {}", e);
            OscyankError::TerminalNotFound
        })?;

    parse_active_pane(&listing).ok_or(OscyankError::TerminalNotFound)
}

/// Pick the device of the first pane flagged active in `list-panes` output
fn parse_active_pane(listing: &str) -> Option<String> {
    listing.lines().find_map(|line| {
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next()) {
            (Some("1"), Some(tty)) => Some(tty.to_string()),
            _ => None,
        }
    })
}

#[cfg(test)]
#[path = "tty_tests.rs"]
mod tty_tests;
