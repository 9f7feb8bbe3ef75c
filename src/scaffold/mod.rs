pub mod gitignore;

use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::project::ProjectConfig;
use crate::error::Result;
use crate::tool::{ToolCommand, Tools};

/// Generate the dotnet layout (unless reusing an existing one), then write `.gitignore`.
pub fn scaffold(tools: &Tools, dotnet: &str, root: &Path, project: &ProjectConfig) -> Result<()> {
    if project.use_existing {
        info!("using existing project, skipping generation");
    } else if project.use_solution {
        scaffold_solution(tools, dotnet, root, project)?;
    } else {
        tools.invoke(
            ToolCommand::new(dotnet, root)
                .arg("new")
                .args(project.passthrough_args.iter().cloned()),
        )?;
    }

    let path = gitignore::write(root)?;
    info!(path = %path.display(), "wrote ignore file");
    Ok(())
}

/// `src/<project>` plus a solution file at the root that references it.
fn scaffold_solution(tools: &Tools, dotnet: &str, root: &Path, project: &ProjectConfig) -> Result<()> {
    let relative = project_dir(&project.project);
    let project_dir = root.join(&relative);
    fs::create_dir_all(&project_dir)?;

    tools.invoke(
        ToolCommand::new(dotnet, root).args(["new", "sln", "-n", project.solution.as_str()]),
    )?;
    tools.invoke(
        ToolCommand::new(dotnet, &project_dir)
            .arg("new")
            .args(project.passthrough_args.iter().cloned()),
    )?;
    tools.invoke(ToolCommand::new(dotnet, root).args(["sln", "add", relative.as_str()]))?;
    Ok(())
}

/// Forward slashes work for both `dotnet sln add` and `Path::join` on every platform.
fn project_dir(project: &str) -> String {
    format!("src/{project}")
}
