//! External process execution
//!
//! The terminal resolver and the clipboard manager invoker talk to other
//! programs only through [`CommandRunner`], so tests can stand in for them.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{OscyankError, Result};

pub trait CommandRunner {
    /// Run a program and return its stdout. Launch failure or a non-zero exit
    /// status is an error.
    fn capture(&self, program: &str, args: &[&str]) -> Result<String>;

    /// Run a program with `input` written to its stdin and wait for it to exit.
    fn feed(&self, program: &str, args: &[&str], input: &str) -> Result<()>;
}

const CONTROLLING_TERMINAL: &str = "/dev/tty";

/// Runs real processes
///
/// Captured programs get the controlling terminal as stdin, so `tty` still
/// reports it when our own stdin is a pipe.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    terminal: PathBuf,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::with_terminal(CONTROLLING_TERMINAL)
    }

    pub fn with_terminal(terminal: impl Into<PathBuf>) -> Self {
        SystemRunner {
            terminal: terminal.into(),
        }
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdin wired to `terminal`, or our own stdin when it cannot be opened
fn terminal_stdin(terminal: &Path) -> Stdio {
    match File::open(terminal) {
        Ok(file) => Stdio::from(file),
        Err(e) => {
            log::debug!("Cannot open {:?} ({}), inheriting stdin", terminal, e);
            Stdio::inherit()
        }
    }
}

impl CommandRunner for SystemRunner {
    fn capture(&self, program: &str, args: &[&str]) -> Result<String> {
        let output = Command::new(program)
            .args(args)
            .stdin(terminal_stdin(&self.terminal))
            .output()
            .map_err(|e| OscyankError::subprocess(program, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let detail = if stderr.trim().is_empty() { stdout } else { stderr };
            return Err(OscyankError::subprocess(
                program,
                format!("{} ({})", output.status, detail.trim()),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn feed(&self, program: &str, args: &[&str], input: &str) -> Result<()> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| OscyankError::subprocess(program, e))?;

        // Dropping the handle closes the pipe so the program sees EOF
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(input.as_bytes())
                .map_err(|e| OscyankError::subprocess(program, e))?;
        }

        let status = child
            .wait()
            .map_err(|e| OscyankError::subprocess(program, e))?;

        if status.success() {
            Ok(())
        } else {
            Err(OscyankError::subprocess(program, status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> SystemRunner {
        SystemRunner::default()
    }

    #[test]
    fn test_capture_missing_program() {
        let result = runner().capture("oscyank-definitely-not-a-program", &[]);
        assert!(matches!(result, Err(OscyankError::Subprocess { .. })));
    }

    #[test]
    fn test_feed_missing_program() {
        let result = runner().feed("oscyank-definitely-not-a-program", &[], "text");
        assert!(matches!(
            result,
            Err(OscyankError::Subprocess { ref program, .. }) if program == "oscyank-definitely-not-a-program"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_stdout() {
        let out = runner().capture("sh", &["-c", "echo hello"]).unwrap();
        assert_eq!(out.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_non_zero_exit() {
        let result = runner().capture("sh", &["-c", "echo oops >&2; exit 3"]);
        match result {
            Err(OscyankError::Subprocess { program, reason }) => {
                assert_eq!(program, "sh");
                assert!(reason.contains("oops"), "{reason}");
            }
            other => panic!("expected subprocess failure, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_feed_writes_stdin() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("out.txt");
        let script = format!("cat > '{}'", out.display());
        runner().feed("sh", &["-c", &script], "line1\nline2").unwrap();
        assert_eq!(std::fs::read_to_string(out).unwrap(), "line1\nline2");
    }

    #[cfg(unix)]
    #[test]
    fn test_feed_non_zero_exit() {
        let result = runner().feed("sh", &["-c", "cat > /dev/null; exit 1"], "x");
        assert!(matches!(result, Err(OscyankError::Subprocess { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_reads_stdin_from_terminal_device() {
        let dir = tempfile::TempDir::new().unwrap();
        let device = dir.path().join("pts");
        std::fs::write(&device, "from the terminal").unwrap();

        let runner = SystemRunner::with_terminal(&device);
        let out = runner.capture("cat", &[]).unwrap();
        assert_eq!(out, "from the terminal");
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_without_terminal_device_inherits_stdin() {
        let dir = tempfile::TempDir::new().unwrap();
        let runner = SystemRunner::with_terminal(dir.path().join("missing"));
        let out = runner.capture("sh", &["-c", "echo ok"]).unwrap();
        assert_eq!(out.trim(), "ok");
    }

    #[test]
    fn test_default_runner_uses_controlling_terminal() {
        assert_eq!(runner().terminal, PathBuf::from(CONTROLLING_TERMINAL));
    }
}
