use std::error::Error as _;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use tracing::debug;

use super::RepoHost;
use super::request::{self, CreateRepository};
use crate::config::local::LocalConfig;
use crate::config::project::ProjectConfig;
use crate::error::{GitstubError, Result};

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Blocking client for the GitHub repository API.
pub struct GitHubClient {
    http: Client,
    api_url: String,
}

impl GitHubClient {
    pub fn new(settings: &LocalConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| GitstubError::InvalidSettings(format!("HTTP client: {e}")))?;
        Ok(Self::with_http(http, &settings.api_url))
    }

    pub fn with_http(http: Client, api_url: &str) -> Self {
        Self {
            http,
            api_url: api_url.to_string(),
        }
    }
}

impl RepoHost for GitHubClient {
    fn create_repository(&self, project: &ProjectConfig) -> Result<StatusCode> {
        let body = CreateRepository::from_project(project);
        debug!(url = %self.api_url, name = body.name, private = body.private, "creating repository");
        let payload = serde_json::to_vec(&body)?;

        let response = self
            .http
            .post(&self.api_url)
            .header(AUTHORIZATION, request::authorization(project))
            .header(USER_AGENT, request::user_agent(project))
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .map_err(|e| GitstubError::Transport(describe(&e)))?;

        debug!(status = %response.status(), "repository API answered");
        Ok(response.status())
    }
}

/// reqwest's own message is terse; append the underlying causes.
fn describe(err: &reqwest::Error) -> String {
    let mut message = if err.is_timeout() {
        format!("request timed out ({err})")
    } else {
        err.to_string()
    };
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
