mod args;
mod usage;

pub use args::{CaseStyle, Cli, Commands};
pub use usage::{dump_tool_usage, render_tool_usage, HELP_NAME};
