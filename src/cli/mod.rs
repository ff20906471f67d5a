//! Command-line adapter: collects rent terms, hands them to the schedule
//! engine, and prints the result.

pub mod commands;
pub mod forms;
pub mod output;
pub mod render;

pub use commands::{run_cli, run_with_args};
