/// Commit message used when `-gsm` is not given.
pub const DEFAULT_COMMIT_MESSAGE: &str = "gitstub => Project Initialization";

/// Everything one run needs to know about the project being bootstrapped.
///
/// Built once by the argument parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub user: String,
    pub pass: String,
    pub project: String,
    pub solution: String,
    pub description: String,
    pub access_private: bool,
    pub commit_message: String,
    pub use_existing: bool,
    pub use_solution: bool,
    pub passthrough_args: Vec<String>,
}

impl ProjectConfig {
    /// Configuration with every default applied. `default_name` is normally
    /// the basename of the working directory.
    pub fn with_defaults(default_name: &str) -> Self {
        Self {
            user: String::new(),
            pass: String::new(),
            project: default_name.to_string(),
            solution: default_name.to_string(),
            description: String::new(),
            access_private: false,
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            use_existing: false,
            use_solution: false,
            passthrough_args: Vec::new(),
        }
    }

    /// `user:pass`, used for Basic auth and in the remote URL.
    pub fn auth(&self) -> String {
        format!("{}:{}", self.user, self.pass)
    }

    /// Name of the GitHub repository: the solution in solution mode, the project otherwise.
    pub fn repo_name(&self) -> &str {
        if self.use_solution {
            &self.solution
        } else {
            &self.project
        }
    }

    /// Browser URL of the repository once it exists.
    pub fn web_url(&self) -> String {
        format!("https://github.com/{}/{}", self.user, self.repo_name())
    }
}
