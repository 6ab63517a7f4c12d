use tooldocs::cli::handlers::handle_generate;
use tooldocs::cli::CliArgs;
use tooldocs::util::logging::{init_logging, json_requested, resolve_level, LoggingConfig};
use tooldocs::VERSION;

use clap::Parser;
use std::env;
use tracing::debug;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("tooldocs v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = handle_generate(&args).await;

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let configured = env::var("TOOLDOCS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let level = resolve_level(args.log_level.as_deref(), args.verbose, args.quiet, &configured);

    init_logging(LoggingConfig {
        level,
        use_json: json_requested(),
        ..LoggingConfig::default()
    });
}
