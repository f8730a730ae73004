pub mod stopwatch;
pub mod types;
