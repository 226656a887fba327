use std::fmt;

use crate::config::{BackendPreference, ClipboardConfig};
use crate::error::Result;
use crate::selection::Payload;

use super::environment::Environment;
use super::manager::{self, ClipboardCommand, ExecutableLookup};
use super::process::CommandRunner;
use super::{osc52, tty};

/// How the payload reaches the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Osc52,
    Manager(ClipboardCommand),
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Osc52 => f.write_str("osc52"),
            Strategy::Manager(command) => write!(f, "manager ({})", command.program()),
        }
    }
}

/// Pick a strategy for this invocation
///
/// An explicit preference always wins. In auto mode an SSH session without a
/// forwarded display goes through OSC 52; otherwise the first local clipboard
/// manager found on the path is used, and OSC 52 is the last resort.
pub fn select(
    preference: BackendPreference,
    env: &Environment,
    path: &dyn ExecutableLookup,
) -> Strategy {
    match preference {
        BackendPreference::Osc => Strategy::Osc52,
        BackendPreference::Manager => match manager::discover(path) {
            Some(command) => Strategy::Manager(command),
            None => {
                log::warn!("No clipboard manager found on PATH, falling back to OSC 52");
                Strategy::Osc52
            }
        },
        BackendPreference::Auto => {
            if env.is_remote_without_display() {
                return Strategy::Osc52;
            }
            manager::discover(path).map_or(Strategy::Osc52, Strategy::Manager)
        }
    }
}

/// Everything a copy needs besides the payload
pub struct CopyContext<'a> {
    pub config: ClipboardConfig,
    pub env: &'a Environment,
    pub path: &'a dyn ExecutableLookup,
    pub runner: &'a dyn CommandRunner,
}

impl CopyContext<'_> {
    pub fn strategy(&self) -> Strategy {
        select(self.config.backend, self.env, self.path)
    }
}

/// Deliver the payload through the selected backend
pub fn copy_to_clipboard(payload: Payload, ctx: &CopyContext<'_>) -> Result<Strategy> {
    let strategy = ctx.strategy();
    log::debug!("Clipboard strategy: {} (preference {})", strategy, ctx.config.backend);
    deliver(strategy, payload, ctx)?;
    Ok(strategy)
}

pub fn deliver(strategy: Strategy, payload: Payload, ctx: &CopyContext<'_>) -> Result<()> {
    let text = payload.into_string();
    match strategy {
        Strategy::Osc52 => {
            let device = tty::resolve(ctx.env, ctx.runner)?;
            let kitty_clear = ctx.config.kitty_clear && ctx.env.is_kitty();
            osc52::copy(&text, &device, kitty_clear)
        }
        Strategy::Manager(command) => manager::invoke(command, &text, ctx.runner),
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod backend_tests;
