use thiserror::Error;

use crate::github::response::ApiFailure;

/// One credential the user forgot to pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingParameter {
    pub field: &'static str,
    pub flag: &'static str,
}

impl std::fmt::Display for MissingParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Error: missing parameter, need {}, please specify it with {}",
            self.field, self.flag
        )
    }
}

#[derive(Error, Debug)]
pub enum GitstubError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Error: Invalid Parameters. Flag '{flag}' expects a value after it.")]
    MissingValue { flag: String },

    #[error("{}", render_missing(.0))]
    MissingParameters(Vec<MissingParameter>),

    #[error("{0}")]
    RemoteApi(ApiFailure),

    #[error("Cannot build a GitHub remote URL for '{0}'")]
    InvalidRemoteUrl(String),

    #[error("Could not reach GitHub while creating the repository: {0}")]
    Transport(String),

    #[error("Command `{command}` failed with {status}")]
    ToolFailed { command: String, status: String },

    #[error("'{program}' was not found on PATH")]
    ToolUnavailable { program: String },
}

impl GitstubError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingParameters(_) => 1,
            Self::MissingValue { .. }
            | Self::InvalidRemoteUrl(_)
            | Self::RemoteApi(_)
            | Self::Transport(_) => 2,
            Self::ToolFailed { .. } | Self::ToolUnavailable { .. } => 3,
            Self::Io(_) | Self::Json(_) | Self::Yaml(_) | Self::InvalidSettings(_) => 4,
        }
    }
}

fn render_missing(missing: &[MissingParameter]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, GitstubError>;
