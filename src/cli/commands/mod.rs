//! Subcommand implementations.

use anyhow::Result;

use crate::cli::GlobalArgs;
use crate::config::{ConfigFile, ConfigManager, ResolvedConfig, resolve_config};

/// Configure command handler.
pub mod configure;

/// Glossary language pairs command handler.
pub mod glossary;

/// Supported languages command handler.
pub mod languages;

/// Translation command handler.
pub mod translate;

/// Usage command handler.
pub mod usage;

/// Loads the config file and resolves the connection settings.
fn load_settings(global: &GlobalArgs) -> Result<(ConfigFile, ResolvedConfig)> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;

    let auth_key = ConfigManager::auth_key_from_env(&config_file);
    let resolved = resolve_config(&global.resolve_options(auth_key), &config_file)?;

    Ok((config_file, resolved))
}
