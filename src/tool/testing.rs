use std::cell::RefCell;

use super::{ToolCommand, ToolRunner, ToolStatus};
use crate::error::{GitstubError, Result};

/// Records every command instead of running it.
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<ToolCommand>>,
    fail_on: Option<(String, String)>,
    missing: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit 1 for any call to `program` whose first argument is `first_arg`.
    pub fn failing_on(program: &str, first_arg: &str) -> Self {
        Self {
            fail_on: Some((program.to_string(), first_arg.to_string())),
            ..Self::default()
        }
    }

    /// Report `program` as absent from PATH.
    pub fn without(program: &str) -> Self {
        Self {
            missing: vec![program.to_string()],
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<ToolCommand> {
        self.calls.borrow().clone()
    }

    /// Calls rendered as `program arg arg ...`, unredacted.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|c| {
                std::iter::once(c.program.as_str())
                    .chain(c.args.iter().map(String::as_str))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

impl ToolRunner for RecordingRunner {
    fn run(&self, command: &ToolCommand) -> Result<ToolStatus> {
        self.calls.borrow_mut().push(command.clone());
        let fails = self.fail_on.as_ref().is_some_and(|(program, first)| {
            *program == command.program && command.args.first() == Some(first)
        });
        Ok(ToolStatus {
            code: Some(if fails { 1 } else { 0 }),
        })
    }

    fn ensure_available(&self, program: &str) -> Result<()> {
        if self.missing.iter().any(|m| m == program) {
            return Err(GitstubError::ToolUnavailable {
                program: program.to_string(),
            });
        }
        Ok(())
    }
}
