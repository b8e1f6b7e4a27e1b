use anyhow::Result;

use crate::cli::GlobalArgs;
use crate::config::resolve_language_type;
use crate::deepl::{LanguageType, format_languages};

/// Prints the languages DeepL accepts on the given side of a translation.
pub async fn run_languages(global: &GlobalArgs, language_type: Option<LanguageType>) -> Result<()> {
    let (config_file, settings) = super::load_settings(global)?;
    let language_type = resolve_language_type(language_type, &config_file);

    let languages = settings.client().languages(language_type).await?;
    println!("{}", format_languages(&languages));

    Ok(())
}
