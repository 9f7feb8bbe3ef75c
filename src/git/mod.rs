pub mod publish;
pub mod repo;
