//! Shared test utilities for oscyank
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    use crate::clipboard::{CommandRunner, ExecutableLookup};
    use crate::error::{OscyankError, Result};

    /// A recorded program invocation
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Call {
        pub program: String,
        pub args: Vec<String>,
        pub input: Option<String>,
    }

    /// Scripted stand-in for external programs
    ///
    /// `capture` answers from the scripted outputs (unscripted programs fail
    /// as if they were missing). `feed` succeeds unless the program was
    /// registered with [`FakeRunner::failing`].
    #[derive(Default)]
    pub struct FakeRunner {
        outputs: HashMap<String, std::result::Result<String, String>>,
        failing: HashSet<String>,
        calls: RefCell<Vec<Call>>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn output(mut self, program: &str, stdout: &str) -> Self {
            self.outputs
                .insert(program.to_string(), Ok(stdout.to_string()));
            self
        }

        pub fn error(mut self, program: &str, reason: &str) -> Self {
            self.outputs
                .insert(program.to_string(), Err(reason.to_string()));
            self
        }

        pub fn failing(mut self, program: &str) -> Self {
            self.failing.insert(program.to_string());
            self
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn record(&self, program: &str, args: &[&str], input: Option<&str>) {
            self.calls.borrow_mut().push(Call {
                program: program.to_string(),
                args: args.iter().map(|a| a.to_string()).collect(),
                input: input.map(str::to_string),
            });
        }
    }

    impl CommandRunner for FakeRunner {
        fn capture(&self, program: &str, args: &[&str]) -> Result<String> {
            self.record(program, args, None);
            match self.outputs.get(program) {
                Some(Ok(stdout)) => Ok(stdout.clone()),
                Some(Err(reason)) => Err(OscyankError::subprocess(program, reason)),
                None => Err(OscyankError::subprocess(program, "No such file or directory")),
            }
        }

        fn feed(&self, program: &str, args: &[&str], input: &str) -> Result<()> {
            self.record(program, args, Some(input));
            if self.failing.contains(program) {
                Err(OscyankError::subprocess(program, "exit status: 1"))
            } else {
                Ok(())
            }
        }
    }

    /// Fixed set of programs considered present on PATH
    pub struct FakePath(pub Vec<&'static str>);

    impl ExecutableLookup for FakePath {
        fn contains(&self, program: &str) -> bool {
            self.0.iter().any(|p| *p == program)
        }
    }
}
