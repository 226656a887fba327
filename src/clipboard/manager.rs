//! Local clipboard manager programs
//!
//! Every supported manager accepts UTF-8 text on stdin; they only differ in
//! their argument vectors and in how many invocations it takes to fill both
//! the X primary selection and the clipboard proper.

use super::process::CommandRunner;
use crate::error::Result;

/// Answers whether a program can be found on the executable search path
pub trait ExecutableLookup {
    fn contains(&self, program: &str) -> bool;
}

/// Looks programs up on `PATH`
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchPath;

impl ExecutableLookup for SearchPath {
    fn contains(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

/// One clipboard manager: the argument vectors to run, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardCommand {
    invocations: &'static [&'static [&'static str]],
}

impl ClipboardCommand {
    pub const fn new(invocations: &'static [&'static [&'static str]]) -> Self {
        ClipboardCommand { invocations }
    }

    pub fn program(&self) -> &'static str {
        self.invocations
            .first()
            .and_then(|argv| argv.first())
            .copied()
            .unwrap_or_default()
    }

    pub fn invocations(&self) -> &'static [&'static [&'static str]] {
        self.invocations
    }
}

pub const PBCOPY: ClipboardCommand = ClipboardCommand::new(&[&["pbcopy"]]);
pub const WL_COPY: ClipboardCommand = ClipboardCommand::new(&[&["wl-copy"]]);
pub const TERMUX: ClipboardCommand = ClipboardCommand::new(&[&["termux-clipboard-set"]]);
pub const XCLIP: ClipboardCommand = ClipboardCommand::new(&[
    &["xclip", "-i", "-selection", "primary"],
    &["xclip", "-i", "-selection", "clipboard"],
]);
pub const XSEL: ClipboardCommand = ClipboardCommand::new(&[
    &["xsel", "-i", "--primary"],
    &["xsel", "-i", "--clipboard"],
]);

/// Supported managers, most preferred first
pub const MANAGERS: [ClipboardCommand; 5] = [PBCOPY, WL_COPY, TERMUX, XCLIP, XSEL];

/// First supported manager present on the search path
pub fn discover(path: &dyn ExecutableLookup) -> Option<ClipboardCommand> {
    MANAGERS
        .iter()
        .copied()
        .find(|command| path.contains(command.program()))
}

/// Pipe `text` into every invocation of `command`, stopping at the first failure
pub fn invoke(command: ClipboardCommand, text: &str, runner: &dyn CommandRunner) -> Result<()> {
    for argv in command.invocations() {
        let Some((program, args)) = argv.split_first() else {
            continue;
        };
        log::debug!("Piping {} bytes into {} {:?}", text.len(), program, args);
        runner.feed(program, args, text)?;
    }
    Ok(())
}
