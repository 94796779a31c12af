//! Command handlers, one module per subcommand.

pub mod choices;
pub mod completions;
pub mod config;
pub mod init;
pub mod setup;
