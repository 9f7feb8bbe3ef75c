pub mod local;
pub mod project;
