mod commands;
mod logging;

pub use commands::Cli;
pub use logging::{init_logging, resolve_level};
