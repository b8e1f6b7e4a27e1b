use anyhow::Result;

use crate::cli::GlobalArgs;
use crate::deepl::format_glossary_pairs;

/// Prints the language pairs glossaries can be created for.
pub async fn run_glossary_language_pairs(global: &GlobalArgs) -> Result<()> {
    let (_, settings) = super::load_settings(global)?;

    let pairs = settings.client().glossary_language_pairs().await?;
    println!("{}", format_glossary_pairs(&pairs));

    Ok(())
}
