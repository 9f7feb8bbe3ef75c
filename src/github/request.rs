use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use crate::config::project::ProjectConfig;

/// JSON body of `POST /user/repos`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CreateRepository<'a> {
    pub name: &'a str,
    pub description: &'a str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub private: bool,
}

impl<'a> CreateRepository<'a> {
    pub fn from_project(project: &'a ProjectConfig) -> Self {
        Self {
            name: project.repo_name(),
            description: &project.description,
            private: project.access_private,
        }
    }
}

/// `Basic <base64(user:pass)>`
pub fn authorization(project: &ProjectConfig) -> String {
    format!("Basic {}", STANDARD.encode(project.auth()))
}

/// `<user>/<repo>`; GitHub rejects requests without a User-Agent.
pub fn user_agent(project: &ProjectConfig) -> String {
    format!("{}/{}", project.user, project.repo_name())
}
