pub mod fixtures;
pub mod guard;
