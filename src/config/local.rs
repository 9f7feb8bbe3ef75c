use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{GitstubError, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com/user/repos";

/// Per-user settings read from `config.yml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalConfig {
    pub api_url: String,
    pub timeout_secs: u64,
    pub git_program: String,
    pub dotnet_program: String,
    pub branch: String,
    pub halt_on_tool_failure: bool,
    pub halt_on_transport_error: bool,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 30,
            git_program: "git".to_string(),
            dotnet_program: "dotnet".to_string(),
            branch: "master".to_string(),
            halt_on_tool_failure: true,
            halt_on_transport_error: false,
        }
    }
}

impl LocalConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yml::from_str(&contents)?;
        config.check()?;
        Ok(config)
    }

    /// `<config dir>/gitstub/config.yml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gitstub").join("config.yml"))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn check(&self) -> Result<()> {
        let url = Url::parse(&self.api_url)
            .map_err(|e| GitstubError::InvalidSettings(format!("api_url '{}': {e}", self.api_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(GitstubError::InvalidSettings(format!(
                "api_url must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.timeout_secs == 0 {
            return Err(GitstubError::InvalidSettings(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.branch.trim().is_empty() {
            return Err(GitstubError::InvalidSettings("branch must not be empty".to_string()));
        }
        Ok(())
    }
}
