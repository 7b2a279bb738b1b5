pub mod merge;
pub mod schedule;
