//! Process environment snapshot
//!
//! Every decision the clipboard code makes from environment variables goes
//! through an [`Environment`] captured once per invocation.

use std::collections::HashMap;

pub const SSH_CLIENT: &str = "SSH_CLIENT";
pub const SSH_CONNECTION: &str = "SSH_CONNECTION";
pub const DISPLAY: &str = "DISPLAY";
pub const TMUX: &str = "TMUX";
pub const TERM: &str = "TERM";
pub const LC_TERMINAL: &str = "LC_TERMINAL";
pub const KITTY_WINDOW_ID: &str = "KITTY_WINDOW_ID";
/// Set by some shells (zsh) to the controlling terminal device
pub const TTY: &str = "TTY";

const CAPTURED: [&str; 8] = [
    SSH_CLIENT,
    SSH_CONNECTION,
    DISPLAY,
    TMUX,
    TERM,
    LC_TERMINAL,
    KITTY_WINDOW_ID,
    TTY,
];

/// Read-only view of the environment variables relevant to clipboard delivery
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Capture the relevant variables from the current process
    pub fn from_process() -> Self {
        let vars = CAPTURED
            .iter()
            .filter_map(|name| std::env::var(name).ok().map(|v| (name.to_string(), v)))
            .collect();
        Environment { vars }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Environment {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Logged in over SSH with no X11 display forwarded back
    pub fn is_remote_without_display(&self) -> bool {
        (self.contains(SSH_CLIENT) || self.contains(SSH_CONNECTION)) && !self.contains(DISPLAY)
    }

    pub fn in_tmux(&self) -> bool {
        self.contains(TMUX)
    }

    pub fn is_kitty(&self) -> bool {
        self.get(LC_TERMINAL) == Some("kitty")
            || self.contains(KITTY_WINDOW_ID)
            || self.get(TERM) == Some("xterm-kitty")
    }

    /// Terminal device exported by the shell, if any
    pub fn shell_tty(&self) -> Option<&str> {
        self.get(TTY).filter(|tty| !tty.is_empty())
    }
}
