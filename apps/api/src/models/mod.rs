pub mod snapshot;
pub mod student;
