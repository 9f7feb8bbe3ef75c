use std::path::Path;

use crate::config::project::ProjectConfig;
use crate::error::Result;
use crate::tool::{ToolCommand, Tools};

/// Stage everything, commit with the configured message, push to `origin/<branch>`.
///
/// The branch is taken as given; the local default branch is not inspected.
pub fn commit_and_push(
    tools: &Tools,
    git: &str,
    root: &Path,
    project: &ProjectConfig,
    branch: &str,
) -> Result<()> {
    tools.invoke(ToolCommand::new(git, root).args(["add", "-A"]))?;
    tools.invoke(
        ToolCommand::new(git, root)
            .args(["commit", "-m"])
            .arg(project.commit_message.as_str()),
    )?;
    tools.invoke(
        ToolCommand::new(git, root)
            .args(["push", "--set-upstream", "origin"])
            .arg(branch),
    )?;
    Ok(())
}
