use anyhow::{Context, Result};

use crate::bootstrap::RunContext;

pub fn run_run_info(context: &RunContext) -> Result<()> {
    let json = serde_json::to_string_pretty(context).context("Failed to serialize run info")?;
    println!("{}", json);
    Ok(())
}
