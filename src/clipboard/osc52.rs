//! OSC 52 clipboard backend
//!
//! Provides clipboard access via terminal escape sequences, useful for
//! remote sessions (SSH, tmux). The sequence is written straight to the
//! terminal device so it still reaches the terminal when stdout is redirected.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Asks kitty to drop any clipboard data from an earlier write
pub const KITTY_CLEAR: &str = "\x1b]52;c;!\x07";

/// Encode text for OSC 52
///
/// Format: \x1b]52;c;{base64}\x07
///
/// The sequence consists of:
/// - `\x1b]52;` - OSC 52 introducer
/// - `c;` - clipboard selection (c = clipboard, p = primary)
/// - `{base64}` - base64-encoded UTF-8 content, unwrapped
/// - `\x07` - string terminator (BEL)
pub fn encode_osc52(text: &str) -> String {
    let encoded = STANDARD.encode(text);
    format!("\x1b]52;c;{}\x07", encoded)
}

/// Full byte sequence to send, with the kitty clear prefix when requested
pub fn sequence(text: &str, kitty_clear: bool) -> Vec<u8> {
    let mut bytes = Vec::new();
    if kitty_clear {
        bytes.extend_from_slice(KITTY_CLEAR.as_bytes());
    }
    bytes.extend_from_slice(encode_osc52(text).as_bytes());
    bytes
}

/// Write the sequence to a terminal device in one go
///
/// Nothing is read back. Terminals may cap the length of escape sequences;
/// oversized payloads are sent as-is.
pub fn copy(text: &str, device: &Path, kitty_clear: bool) -> Result<()> {
    let bytes = sequence(text, kitty_clear);
    log::debug!("Writing {} byte OSC 52 sequence to {:?}", bytes.len(), device);

    let mut tty = OpenOptions::new().write(true).open(device)?;
    tty.write_all(&bytes)?;
    tty.flush()?;
    Ok(())
}
