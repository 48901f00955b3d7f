pub mod commands;

pub use commands::{Cli, resolve_config, run};
