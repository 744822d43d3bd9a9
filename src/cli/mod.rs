//! CLI command handlers
//!
//! Argument parsing, routing and one handler per subcommand. Handlers drive
//! the screen controllers and print their state.

pub mod args;
pub mod commands;
pub mod context;
pub mod router;

pub use args::{Cli, Commands};
pub use router::execute_command;
