use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use rapids_tools::cli::{dump_tool_usage, Cli, Commands};
use rapids_tools::env_store::ProcessEnv;
use rapids_tools::{bootstrap, command, logging};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // No command specified, show usage and fail
    let cmd = match cli.command {
        Some(Commands::Usage { tool }) => {
            dump_tool_usage(tool.as_deref(), true);
            return Ok(ExitCode::FAILURE);
        }
        Some(cmd) => cmd,
        None => {
            dump_tool_usage(None, true);
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut store = ProcessEnv;
    let context = bootstrap::initialize(&mut store, cmd.short_name())?;

    logging::init_logging(
        logging::debug_enabled(cli.verbose, &store),
        Some(context.log_file.as_path()),
    )?;
    debug!("Run context: {:?}", context);

    match cmd {
        Commands::Path { path } => command::run_path(&path)?,
        Commands::Uri { input } => command::run_uri(&input)?,
        Commands::CheckUrl { value } => {
            if !command::run_check_url(&value) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Case { word, to } => command::run_case(&word, to),
        Commands::Lookup { file, keys } => command::run_lookup(&file, &keys)?,
        Commands::RunInfo => command::run_run_info(&context)?,
        Commands::Usage { tool } => dump_tool_usage(tool.as_deref(), true),
    }

    Ok(ExitCode::SUCCESS)
}
