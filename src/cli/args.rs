use clap::{Parser, Subcommand, ValueEnum};

/// Spark RAPIDS user tools - path, naming and run environment helpers
#[derive(Debug, Parser)]
#[command(name = "rapids-tools")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the absolute, user-expanded form of a local path
    Path {
        /// Path to resolve (may be relative or start with ~)
        path: String,
    },
    /// Print a path or URI as a canonical URI
    Uri {
        /// Local path or <scheme>:// URI
        input: String,
    },
    /// Check whether a value is a well-formed http(s) URL
    CheckUrl {
        /// Value to check
        value: String,
    },
    /// Convert an identifier between naming conventions
    Case {
        /// Identifier to convert
        word: String,

        /// Target naming convention
        #[arg(short, long, value_enum, default_value_t = CaseStyle::Snake)]
        to: CaseStyle,
    },
    /// Print the element found at a key path in a JSON file
    Lookup {
        /// JSON file (path or ~ path)
        file: String,

        /// Keys to follow; array elements are addressed by index
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Print the values derived for this run as JSON
    RunInfo,
    /// Show usage for a command and exit with an error status
    Usage {
        /// Command to describe (all commands when omitted)
        tool: Option<String>,
    },
}

impl Commands {
    /// Name used for the run's log file.
    pub fn short_name(&self) -> &'static str {
        match self {
            Commands::Path { .. } => "path",
            Commands::Uri { .. } => "uri",
            Commands::CheckUrl { .. } => "check_url",
            Commands::Case { .. } => "case",
            Commands::Lookup { .. } => "lookup",
            Commands::RunInfo => "run_info",
            Commands::Usage { .. } => "usage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseStyle {
    /// snake_case
    Snake,
    /// camelCase
    Camel,
    /// PascalCase
    Pascal,
}
