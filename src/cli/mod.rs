pub mod args;
pub mod help;
pub mod validate;

use std::path::Path;

use console::style;
use tracing::info;

use crate::config::local::LocalConfig;
use crate::error::Result;
use crate::github::client::GitHubClient;
use crate::orchestrator::pipeline::{Pipeline, RemoteStatus};
use crate::orchestrator::state::Stage;
use crate::tool::SystemRunner;
use args::Invocation;

/// Used when the working directory has no name of its own (e.g. `/`).
const FALLBACK_NAME: &str = "project";

/// Basename of `root`, the default for both project and solution names.
pub fn default_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

/// Parse, validate, then run every step in `root`.
///
/// Settings are only read once the credentials check has passed.
pub fn run(tokens: Vec<String>, root: &Path, settings_path: Option<&Path>) -> Result<()> {
    info!(stage = %Stage::Start, tokens = tokens.len(), "starting");
    let project = match args::parse(tokens, &default_name(root))? {
        Invocation::Help => {
            help::print();
            return Ok(());
        }
        Invocation::Run(project) => project,
    };
    info!(stage = %Stage::ArgsParsed, repo = project.repo_name(), "arguments parsed");

    validate::validate(&project)?;
    info!(stage = %Stage::Validated, "credentials present");

    let settings = match settings_path {
        Some(path) => LocalConfig::load(path)?,
        None => LocalConfig::default(),
    };
    let client = GitHubClient::new(&settings)?;
    let pipeline = Pipeline::new(root, &settings, &SystemRunner, &client);
    let report = pipeline.run(&project)?;

    match report.remote {
        RemoteStatus::Created { url } => {
            println!(
                "{} Project '{}' is live at {url}",
                style("✓").green().bold(),
                project.repo_name()
            );
        }
        RemoteStatus::Unreachable { .. } => {
            println!(
                "{} Local setup finished, but the GitHub repository may not exist yet",
                style("!").yellow().bold()
            );
        }
    }
    Ok(())
}
