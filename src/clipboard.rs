//! Clipboard module for oscyank
//!
//! Provides clipboard delivery with support for:
//! - OSC 52 escape sequences written to the controlling terminal (SSH, tmux)
//! - Local clipboard managers (pbcopy, wl-copy, termux, xclip, xsel)
//! - Auto mode (OSC 52 over SSH, otherwise a local manager, OSC 52 as fallback)

mod backend;
pub mod environment;
pub mod manager;
pub mod osc52;
mod process;
pub mod tty;

pub use backend::{CopyContext, Strategy, copy_to_clipboard, deliver, select};
pub use environment::Environment;
pub use manager::{ClipboardCommand, ExecutableLookup, SearchPath};
pub use process::{CommandRunner, SystemRunner};
