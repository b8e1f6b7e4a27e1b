//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{ConfigFile, ConfigManager, DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG};
use crate::ui::{Style, cancellable};

const PLAN_CHOICES: &[&str] = &["auto (from key)", "free", "pro"];

/// Runs the configure command, or prints the current settings with `--show`.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;

    if show {
        let config = manager.load_or_default()?;
        print_settings(&manager, &config);
        return Ok(());
    }

    cancellable(|| run_configure_inner(&manager))?;
    Ok(())
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default()?;

    print_settings(manager, &config);

    let source_lang = prompt_language(
        "Default source language:",
        config.deepl.source_lang.as_deref().unwrap_or(DEFAULT_SOURCE_LANG),
    )?;
    let target_lang = prompt_language(
        "Default target language:",
        config.deepl.target_lang.as_deref().unwrap_or(DEFAULT_TARGET_LANG),
    )?;

    if source_lang.eq_ignore_ascii_case(&target_lang) {
        bail!("Source and target language must differ (both are {source_lang})");
    }

    let starting_cursor = match config.deepl.pro {
        None => 0,
        Some(false) => 1,
        Some(true) => 2,
    };
    let plan = Select::new("Subscription plan:", PLAN_CHOICES.to_vec())
        .with_starting_cursor(starting_cursor)
        .prompt()?;

    config.deepl.source_lang = Some(source_lang);
    config.deepl.target_lang = Some(target_lang);
    config.deepl.pro = match plan {
        "free" => Some(false),
        "pro" => Some(true),
        _ => None,
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn prompt_language(message: &str, default: &str) -> Result<String> {
    let value = Text::new(message).with_default(default).prompt()?;
    let value = value.trim().to_ascii_uppercase();

    if value.is_empty() {
        bail!("Language code cannot be empty");
    }
    Ok(value)
}

fn print_settings(manager: &ConfigManager, config: &ConfigFile) {
    let settings = &config.deepl;
    let or_default = |value: Option<&str>, default: &str| {
        value.map_or_else(
            || Style::secondary(format!("{default} (default)")),
            Style::value,
        )
    };
    let plan = match settings.pro {
        Some(true) => Style::value("pro"),
        Some(false) => Style::value("free"),
        None => Style::secondary("auto (from key)"),
    };

    println!("{}", Style::header("Current settings"));
    println!(
        "  {}  {}",
        Style::label("source_lang"),
        or_default(settings.source_lang.as_deref(), DEFAULT_SOURCE_LANG)
    );
    println!(
        "  {}  {}",
        Style::label("target_lang"),
        or_default(settings.target_lang.as_deref(), DEFAULT_TARGET_LANG)
    );
    println!("  {}         {}", Style::label("plan"), plan);
    println!(
        "  {}      {}",
        Style::label("api key"),
        Style::value(format!("${}", settings.auth_key_env()))
    );
    if settings.legacy_auth == Some(true) {
        println!("  {}  {}", Style::label("legacy_auth"), Style::value("on"));
    }
    if let Some(base_url) = &settings.base_url {
        println!("  {}     {}", Style::label("base_url"), Style::value(base_url));
    }
    println!(
        "  {}       {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display())
    );
    println!();
}
