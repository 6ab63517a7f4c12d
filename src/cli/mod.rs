pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, OutputFormatArg, PolicyArg};
pub use output::{OutputFormat, OutputFormatter};
