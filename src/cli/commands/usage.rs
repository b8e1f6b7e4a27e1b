use anyhow::Result;

use crate::cli::GlobalArgs;

/// Prints usage and limits for the current billing period.
pub async fn run_usage(global: &GlobalArgs) -> Result<()> {
    let (_, settings) = super::load_settings(global)?;

    let usage = settings.client().usage().await?;
    println!("{usage}");

    Ok(())
}
