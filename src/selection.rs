//! Selection handling
//!
//! Turns the selected filesystem entries into the text that ends up on the
//! clipboard: pick one attribute per entry, optionally shorten home-rooted
//! paths, join with newlines.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use std::str::FromStr;

use crate::error::OscyankError;

/// A selected filesystem entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Entry { path: path.into() }
    }

    /// Build an entry from user input, anchoring relative paths at `cwd`
    ///
    /// Paths without a final name component (`/`, `foo/..`) are rejected since
    /// they have no basename to copy.
    pub fn resolve(path: impl AsRef<Path>, cwd: &Path) -> Result<Self, OscyankError> {
        let path = cwd.join(path);
        if path.file_name().is_none() {
            return Err(OscyankError::NoFileName { path });
        }
        Ok(Entry { path })
    }

    pub fn basename(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn basename_without_extension(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn dirname(&self) -> String {
        self.path
            .parent()
            .map(|parent| parent.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    fn attribute(&self, mode: Mode) -> String {
        match mode {
            Mode::Basename => self.basename(),
            Mode::BasenameWithoutExtension => self.basename_without_extension(),
            Mode::Dirname => self.dirname(),
            Mode::Path => self.path(),
        }
    }
}

/// Which attribute of each entry gets copied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Basename,
    BasenameWithoutExtension,
    Dirname,
    Path,
}

/// Mode tokens accepted on the command line, sorted
pub const MODE_NAMES: [&str; 4] = ["dir", "name", "name_without_extension", "path"];

impl Mode {
    /// Parse an optional token; a missing or empty token means [`Mode::Basename`]
    pub fn from_token(token: Option<&str>) -> Result<Self, OscyankError> {
        match token {
            None | Some("") => Ok(Mode::default()),
            Some(token) => token.parse(),
        }
    }

    pub fn is_basename(self) -> bool {
        matches!(self, Mode::Basename | Mode::BasenameWithoutExtension)
    }

    /// Completion candidates for a partially typed mode token
    pub fn completions(prefix: &str) -> Vec<&'static str> {
        MODE_NAMES
            .iter()
            .copied()
            .filter(|name| name.starts_with(prefix))
            .collect()
    }
}

impl FromStr for Mode {
    type Err = OscyankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Mode::Basename),
            "name_without_extension" => Ok(Mode::BasenameWithoutExtension),
            "dir" => Ok(Mode::Dirname),
            "path" => Ok(Mode::Path),
            _ => Err(OscyankError::UnknownMode {
                token: s.to_string(),
            }),
        }
    }
}

/// How aggressively to shorten paths under the home directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Abbreviation {
    /// `/home/u/src` becomes `~/src`
    Tilde,
    /// `/home/u/src` becomes `src`
    Strip,
}

impl Abbreviation {
    /// Map a numeric quantifier to a level. Only 1 and 2 mean anything.
    pub fn from_quantifier(quantifier: Option<u32>) -> Option<Self> {
        match quantifier {
            Some(1) => Some(Abbreviation::Tilde),
            Some(2) => Some(Abbreviation::Strip),
            _ => None,
        }
    }
}

/// The user's home directory as a string ending in a separator
pub fn home_prefix() -> Option<String> {
    dirs::home_dir().map(|home| with_trailing_separator(&home))
}

fn with_trailing_separator(dir: &Path) -> String {
    let mut prefix = dir.to_string_lossy().into_owned();
    if !prefix.ends_with(MAIN_SEPARATOR) {
        prefix.push(MAIN_SEPARATOR);
    }
    prefix
}

/// Extract one string per entry and apply the abbreviation uniformly
///
/// `home` must end with a separator (see [`home_prefix`]). Matching is a plain
/// string-prefix test, so a sibling like `/home/user2` is not treated as being
/// inside `/home/user` only because of the trailing separator.
pub fn transform(
    mode: Mode,
    abbreviation: Option<Abbreviation>,
    entries: &[Entry],
    home: Option<&str>,
) -> Vec<String> {
    let selection = entries.iter().map(|entry| entry.attribute(mode));

    let (Some(abbreviation), Some(home), false) = (abbreviation, home, mode.is_basename()) else {
        return selection.collect();
    };

    selection
        .map(|value| match value.strip_prefix(home) {
            Some(rest) => match abbreviation {
                Abbreviation::Tilde => format!("~{}{}", MAIN_SEPARATOR, rest),
                Abbreviation::Strip => rest.to_string(),
            },
            None => value,
        })
        .collect()
}

/// Newline-joined clipboard content, consumed by exactly one backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload(String);

impl Payload {
    pub fn from_lines(lines: &[String]) -> Self {
        Payload(lines.join("\n"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
