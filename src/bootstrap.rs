//! Per-invocation runtime setup.
//!
//! [`initialize`] runs once at startup, before any command does work:
//! - generate a run identifier and publish it
//! - resolve the tools home directory and publish it
//! - derive the log file location, publish it and create the log directory
//! - tell the user where the log file lives
//!
//! It is kept out of argument parsing so that `--help` never creates
//! directories or prints the banner.

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::banner::{gen_app_banner, gen_report_sec_header};
use crate::env_store::{EnvStore, KEY_HOME, KEY_LOG_FILE, KEY_UUID};
use crate::error::{Result, ToolsError};

/// Base directory used when `HOME` is not available.
pub const FALLBACK_HOME_DIR: &str = "/tmp";
/// Directory created under the home directory for tool state.
pub const TOOLS_HOME_DIR_NAME: &str = ".spark_rapids_tools";
/// Length of the random part of a run identifier.
pub const UUID_SUFFIX_LEN: usize = 8;

/// Values derived for the current run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunContext {
    pub uuid: String,
    pub tools_home_dir: PathBuf,
    pub log_dir: PathBuf,
    pub log_file: PathBuf,
}

/// `<YYYYmmddHHMMSS>_<suffix_len random alphanumerics>`.
pub fn gen_uuid_with_ts(suffix_len: usize) -> String {
    let ts = Local::now().format("%Y%m%d%H%M%S");
    if suffix_len == 0 {
        return ts.to_string();
    }
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(suffix_len)
        .map(char::from)
        .collect();
    format!("{}_{}", ts, suffix)
}

/// The user's home directory, or [`FALLBACK_HOME_DIR`] when unset or empty.
pub fn resolve_home_dir<S: EnvStore + ?Sized>(store: &S) -> PathBuf {
    store
        .sys_var("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(FALLBACK_HOME_DIR))
}

/// Create `dir` and its parents. An existing directory is not an error.
pub fn make_dirs(dir: &std::path::Path) -> Result<()> {
    match std::fs::create_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(e) => Err(ToolsError::io(dir, e)),
    }
}

/// Derive the run identifier and log locations and publish them to `store`.
/// Nothing is created on disk.
pub fn prepare_run_context<S: EnvStore + ?Sized>(store: &mut S, short_name: &str) -> RunContext {
    let uuid = gen_uuid_with_ts(UUID_SUFFIX_LEN);
    store.set(KEY_UUID, &uuid);

    let tools_home_dir = resolve_home_dir(&*store).join(TOOLS_HOME_DIR_NAME);
    store.set(KEY_HOME, &tools_home_dir.to_string_lossy());

    let log_dir = tools_home_dir.join("logs");
    let log_file = log_dir.join(format!("{}_{}.log", short_name, uuid));
    store.set(KEY_LOG_FILE, &log_file.to_string_lossy());

    RunContext {
        uuid,
        tools_home_dir,
        log_dir,
        log_file,
    }
}

/// Set up the run environment and report the log location on stdout.
pub fn initialize<S: EnvStore + ?Sized>(store: &mut S, short_name: &str) -> Result<RunContext> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    initialize_with_output(store, short_name, &mut out)
}

/// Same as [`initialize`], writing the user-facing notice to `out`.
pub fn initialize_with_output<S, W>(
    store: &mut S,
    short_name: &str,
    out: &mut W,
) -> Result<RunContext>
where
    S: EnvStore + ?Sized,
    W: Write + ?Sized,
{
    let context = prepare_run_context(store, short_name);

    make_dirs(&context.log_dir)?;
    debug!("Log directory ready at {}", context.log_dir.display());

    print_log_notice(&context, out).map_err(|e| ToolsError::io(&context.log_file, e))?;

    info!("Initialized run {}", context.uuid);
    Ok(context)
}

fn print_log_notice<W: Write + ?Sized>(context: &RunContext, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", gen_app_banner())?;
    writeln!(out, "{}", gen_report_sec_header("Application Logs"))?;
    writeln!(out, "Location: {}", context.log_file.display())?;
    writeln!(
        out,
        "In case of any errors, please share the log file with the Spark RAPIDS team.\n"
    )?;
    out.flush()
}
