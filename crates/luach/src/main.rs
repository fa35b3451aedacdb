//! Main entry point for luach.

use anyhow::Result;

fn main() -> Result<()> {
    luach_cli::run().map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
