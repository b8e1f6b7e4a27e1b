use anyhow::Result;
use std::io::{self, Write};

use crate::cli::{GlobalArgs, TranslateArgs};
use crate::config::resolve_translate_options;
use crate::deepl::ApiError;
use crate::input::InputReader;
use crate::ui::{Spinner, cancellable};

/// Reads the input, translates it and writes the result to stdout.
pub async fn run_translate(global: &GlobalArgs, args: &TranslateArgs) -> Result<()> {
    let (config_file, settings) = super::load_settings(global)?;
    let options = resolve_translate_options(&args.overrides(global), &config_file)?;

    let Some(source_text) = cancellable(|| InputReader::read(args.file.as_deref()))? else {
        return Ok(());
    };
    if source_text.trim().is_empty() {
        return Err(ApiError::EmptyInput.into());
    }

    let client = settings.client();

    let spinner = Spinner::new("Translating...");
    let translated = client.translate(&source_text, &options).await;
    spinner.stop();

    write_segments(&mut io::stdout().lock(), &translated?)?;

    Ok(())
}

/// Writes the segments back to back, exactly as the service returned them.
fn write_segments(out: &mut impl Write, segments: &[String]) -> io::Result<()> {
    for segment in segments {
        out.write_all(segment.as_bytes())?;
    }
    out.flush()
}
