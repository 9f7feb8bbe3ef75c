use std::fmt;

use reqwest::StatusCode;

/// A non-success answer from the repository API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub code: u16,
    pub reason: &'static str,
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GitHub API Error, returned ({}) while trying to create the repository. {}",
            self.code, self.reason
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome {
    Created,
    Failed(ApiFailure),
}

pub fn classify(status: StatusCode) -> ApiOutcome {
    let reason = match status {
        StatusCode::CREATED => return ApiOutcome::Created,
        StatusCode::NOT_FOUND => {
            "Not Found. In this context, it probably means a problem with your username or password"
        }
        StatusCode::FORBIDDEN => "Forbidden. Too many failed login attempts",
        StatusCode::UNAUTHORIZED => "Unauthorized. Check username and password",
        _ => "Not sure what happened here...",
    };
    ApiOutcome::Failed(ApiFailure {
        code: status.as_u16(),
        reason,
    })
}
