mod cli;
mod config;
mod error;
mod git;
mod github;
mod orchestrator;
mod scaffold;
mod tool;

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::local::LocalConfig;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            println!("Failed to read the current directory: {e}");
            return ExitCode::from(4);
        }
    };

    let settings_path = std::env::var_os("GITSTUB_CONFIG")
        .map(PathBuf::from)
        .or_else(LocalConfig::default_path);

    let tokens: Vec<String> = std::env::args().skip(1).collect();
    match cli::run(tokens, &root, settings_path.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
