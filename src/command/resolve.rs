use anyhow::{Context, Result};
use tracing::debug;

use crate::paths::{is_http_like, stringify_path, to_uri};

pub fn run_path(path: &str) -> Result<()> {
    let resolved =
        stringify_path(path).with_context(|| format!("Failed to resolve path: {}", path))?;
    println!("{}", resolved);
    Ok(())
}

pub fn run_uri(input: &str) -> Result<()> {
    let uri = to_uri(input).with_context(|| format!("Failed to convert to URI: {}", input))?;
    println!("{}", uri);
    Ok(())
}

/// Prints the verdict and returns it so the caller can set the exit status.
pub fn run_check_url(value: &str) -> bool {
    let verdict = is_http_like(value);
    debug!("is_http_like({:?}) = {}", value, verdict);
    println!("{}", verdict);
    verdict
}
