pub mod client;
pub mod request;
pub mod response;

use reqwest::StatusCode;

use crate::config::project::ProjectConfig;
use crate::error::Result;

/// Somewhere a repository can be created.
///
/// `Ok` carries whatever status the host answered with; `Err` is for
/// failures where no answer arrived at all (`GitstubError::Transport`).
pub trait RepoHost {
    fn create_repository(&self, project: &ProjectConfig) -> Result<StatusCode>;
}
