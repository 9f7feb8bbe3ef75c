use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};
use url::Url;

use crate::error::{GitstubError, Result};

#[cfg(test)]
pub mod testing;

/// One invocation of an external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
    pub dir: PathBuf,
}

impl ToolCommand {
    pub fn new(program: &str, dir: &Path) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            dir: dir.to_path_buf(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

/// Renders the command line with any URL password masked.
impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", redact(arg))?;
        }
        Ok(())
    }
}

fn redact(arg: &str) -> String {
    if !arg.contains("://") || !arg.contains('@') {
        return arg.to_string();
    }
    match Url::parse(arg) {
        Ok(mut url) if url.password().is_some() => {
            let _ = url.set_password(Some("***"));
            url.to_string()
        }
        Ok(url) => url.to_string(),
        Err(_) => "<redacted url>".to_string(),
    }
}

/// How an external program finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus {
    pub code: Option<i32>,
}

impl ToolStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => write!(f, "termination by signal"),
        }
    }
}

/// Runs external programs. The pipeline only talks to tools through this.
pub trait ToolRunner {
    /// Run to completion with inherited stdio and report the exit status.
    fn run(&self, command: &ToolCommand) -> Result<ToolStatus>;

    /// Fail with `ToolUnavailable` if `program` cannot be found.
    fn ensure_available(&self, program: &str) -> Result<()>;
}

/// Spawns real processes.
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, command: &ToolCommand) -> Result<ToolStatus> {
        debug!(command = %command, dir = %command.dir.display(), "running");
        // A missing working directory also spawns with NotFound; keep it apart from a missing program.
        if !command.dir.is_dir() {
            return Err(GitstubError::Io(std::io::Error::new(
                ErrorKind::NotFound,
                format!("working directory {} does not exist", command.dir.display()),
            )));
        }
        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.dir)
            .status()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => GitstubError::ToolUnavailable {
                    program: command.program.clone(),
                },
                _ => GitstubError::Io(e),
            })?;
        debug!(command = %command, code = ?status.code(), "finished");
        Ok(ToolStatus {
            code: status.code(),
        })
    }

    fn ensure_available(&self, program: &str) -> Result<()> {
        which::which(program)
            .map(|_| ())
            .map_err(|_| GitstubError::ToolUnavailable {
                program: program.to_string(),
            })
    }
}

/// A runner plus the policy for what a non-zero exit means.
pub struct Tools<'a> {
    runner: &'a dyn ToolRunner,
    halt_on_failure: bool,
}

impl<'a> Tools<'a> {
    pub fn new(runner: &'a dyn ToolRunner, halt_on_failure: bool) -> Self {
        Self {
            runner,
            halt_on_failure,
        }
    }

    pub fn ensure_available(&self, program: &str) -> Result<()> {
        self.runner.ensure_available(program)
    }

    /// Run `command`. A failed exit is an error when halting is on, a warning otherwise.
    pub fn invoke(&self, command: ToolCommand) -> Result<ToolStatus> {
        let status = self.runner.run(&command)?;
        if status.success() {
            return Ok(status);
        }
        if self.halt_on_failure {
            return Err(GitstubError::ToolFailed {
                command: command.to_string(),
                status: status.to_string(),
            });
        }
        warn!(command = %command, %status, "command failed, continuing");
        Ok(status)
    }
}
