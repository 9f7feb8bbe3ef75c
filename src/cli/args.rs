use crate::config::project::ProjectConfig;
use crate::error::{GitstubError, Result};

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Run(ProjectConfig),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    User,
    Pass,
    Project,
    Solution,
    Description,
    CommitMessage,
    Private,
    Existing,
    UseSolution,
    Help,
}

impl Flag {
    fn lookup(token: &str) -> Option<Self> {
        let flag = match token.to_ascii_lowercase().as_str() {
            "-gsu" => Flag::User,
            "-gsp" => Flag::Pass,
            "-gsr" => Flag::Project,
            "-gss" => Flag::Solution,
            "-gsd" => Flag::Description,
            "-gsm" => Flag::CommitMessage,
            "--private" => Flag::Private,
            "--existing" => Flag::Existing,
            "--sln" => Flag::UseSolution,
            "-h" | "--help" | "-?" => Flag::Help,
            _ => return None,
        };
        Some(flag)
    }

    fn takes_value(self) -> bool {
        matches!(
            self,
            Flag::User
                | Flag::Pass
                | Flag::Project
                | Flag::Solution
                | Flag::Description
                | Flag::CommitMessage
        )
    }
}

/// Accumulates flags while scanning; consumed by `build`.
struct Builder {
    config: ProjectConfig,
}

impl Builder {
    fn new(default_name: &str) -> Self {
        Self {
            config: ProjectConfig::with_defaults(default_name),
        }
    }

    fn switch(&mut self, flag: Flag) {
        match flag {
            Flag::Private => self.config.access_private = true,
            Flag::Existing => self.config.use_existing = true,
            Flag::UseSolution => self.config.use_solution = true,
            _ => {}
        }
    }

    fn set(&mut self, flag: Flag, value: String) {
        match flag {
            Flag::User => self.config.user = value,
            Flag::Pass => self.config.pass = value,
            Flag::Project => self.config.project = value,
            Flag::Solution => {
                self.config.solution = value;
                self.config.use_solution = true;
            }
            Flag::Description => self.config.description = value,
            Flag::CommitMessage => self.config.commit_message = value,
            _ => {}
        }
    }

    fn passthrough(&mut self, token: String) {
        self.config.passthrough_args.push(token);
    }

    fn build(self) -> ProjectConfig {
        self.config
    }
}

/// Scan `tokens` left to right.
///
/// Flags match case-insensitively. A value flag always takes the next token,
/// whatever it looks like. Unknown tokens are kept, in order, for `dotnet new`.
/// No tokens at all means help.
pub fn parse<I, S>(tokens: I, default_name: &str) -> Result<Invocation>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut tokens = tokens.into_iter().map(Into::into).peekable();
    if tokens.peek().is_none() {
        return Ok(Invocation::Help);
    }

    let mut builder = Builder::new(default_name);
    while let Some(token) = tokens.next() {
        match Flag::lookup(&token) {
            Some(Flag::Help) => return Ok(Invocation::Help),
            Some(flag) if flag.takes_value() => {
                let value = tokens
                    .next()
                    .ok_or_else(|| GitstubError::MissingValue { flag: token.clone() })?;
                builder.set(flag, value);
            }
            Some(flag) => builder.switch(flag),
            None => builder.passthrough(token),
        }
    }
    Ok(Invocation::Run(builder.build()))
}
