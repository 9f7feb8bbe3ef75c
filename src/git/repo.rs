use std::path::Path;

use url::Url;

use crate::config::project::ProjectConfig;
use crate::error::{GitstubError, Result};
use crate::tool::{ToolCommand, Tools};

const GITHUB_WEB: &str = "https://github.com/";

/// Push URL for `origin`. Carries the credentials, so never print it unredacted.
///
/// User and password are percent-encoded, so `@`, `/` or `#` in them cannot
/// move the host or path.
pub fn remote_url(project: &ProjectConfig) -> Result<String> {
    let invalid = |_| GitstubError::InvalidRemoteUrl(project.user.clone());
    let mut url = Url::parse(GITHUB_WEB).map_err(|e| GitstubError::InvalidRemoteUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(invalid)?
        .pop_if_empty()
        .push(&project.user)
        .push(&format!("{}.git", project.repo_name()));
    url.set_username(&project.user).map_err(invalid)?;
    url.set_password(Some(&project.pass)).map_err(invalid)?;
    Ok(url.into())
}

/// `git init` followed by `git remote add origin <url>` (shells out to git CLI)
pub fn init_local(tools: &Tools, git: &str, root: &Path, project: &ProjectConfig) -> Result<()> {
    tools.invoke(ToolCommand::new(git, root).arg("init"))?;
    tools.invoke(
        ToolCommand::new(git, root)
            .args(["remote", "add", "origin"])
            .arg(remote_url(project)?),
    )?;
    Ok(())
}
