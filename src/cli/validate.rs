use crate::config::project::ProjectConfig;
use crate::error::{GitstubError, MissingParameter, Result};

const USER: MissingParameter = MissingParameter {
    field: "your GitHub username",
    flag: "-gsu <username>",
};

const PASS: MissingParameter = MissingParameter {
    field: "your GitHub password",
    flag: "-gsp <password>",
};

const PROJECT: MissingParameter = MissingParameter {
    field: "the Repository/Project to create",
    flag: "-gsr <repository>",
};

const SOLUTION: MissingParameter = MissingParameter {
    field: "the Solution/Repository to create",
    flag: "-gss <solution>",
};

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Report every missing credential, and a blank repository name, at once.
pub fn validate(config: &ProjectConfig) -> Result<()> {
    let mut missing = Vec::new();
    if is_blank(&config.user) {
        missing.push(USER);
    }
    if is_blank(&config.pass) {
        missing.push(PASS);
    }
    if is_blank(config.repo_name()) {
        missing.push(if config.use_solution { SOLUTION } else { PROJECT });
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(GitstubError::MissingParameters(missing))
    }
}
