use std::fmt;

/// Where a run has got to. Runs only ever move forward through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Start,
    ArgsParsed,
    Validated,
    Scaffolded,
    LocalInitialized,
    RemoteCreated,
    Pushed,
    Done,
}

impl Stage {
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Start => Some(Stage::ArgsParsed),
            Stage::ArgsParsed => Some(Stage::Validated),
            Stage::Validated => Some(Stage::Scaffolded),
            Stage::Scaffolded => Some(Stage::LocalInitialized),
            Stage::LocalInitialized => Some(Stage::RemoteCreated),
            Stage::RemoteCreated => Some(Stage::Pushed),
            Stage::Pushed => Some(Stage::Done),
            Stage::Done => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::ArgsParsed => "args-parsed",
            Stage::Validated => "validated",
            Stage::Scaffolded => "scaffolded",
            Stage::LocalInitialized => "local-initialized",
            Stage::RemoteCreated => "remote-created",
            Stage::Pushed => "pushed",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}
