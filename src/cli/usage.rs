//! Usage dumping for commands invoked incorrectly.

use clap::Parser;

use super::args::Cli;

/// Program name shown in dumped usage text.
pub const HELP_NAME: &str = "rapids-tools";

/// Render `<HELP_NAME> [tool] --help` through the argument parser.
///
/// The parser reports help as an early exit; that is caught and its rendered
/// text returned instead.
pub fn render_tool_usage(tool_name: Option<&str>) -> String {
    let mut argv = vec![HELP_NAME];
    argv.extend(tool_name);
    argv.push("--help");

    match Cli::try_parse_from(argv) {
        Err(err) => err.render().to_string(),
        Ok(_) => String::new(),
    }
}

/// Print the usage for `tool_name`. With `raise_exit`, the process then
/// exits with status 1 because usage was requested for a bad invocation.
pub fn dump_tool_usage(tool_name: Option<&str>, raise_exit: bool) {
    print!("{}", render_tool_usage(tool_name));
    if raise_exit {
        std::process::exit(1);
    }
}
