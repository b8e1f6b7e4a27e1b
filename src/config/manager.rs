use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::deepl::{
    AuthPlacement, Credential, DeepLClient, Formality, LanguageType, Plan, SplitSentences,
    TagHandling, TranslateOptions,
};
use crate::paths;

/// Environment variable holding the authentication key unless configured otherwise.
pub const DEFAULT_AUTH_KEY_ENV: &str = "DEEPL_TOKEN";
pub const DEFAULT_SOURCE_LANG: &str = "EN";
pub const DEFAULT_TARGET_LANG: &str = "JA";

/// Settings in the `[deepl]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeeplConfig {
    /// Default source language code.
    pub source_lang: Option<String>,
    /// Default target language code.
    pub target_lang: Option<String>,
    /// Use the Pro endpoint. Unset means "guess from the key".
    pub pro: Option<bool>,
    /// Send the key as an `auth_key` parameter instead of a header.
    pub legacy_auth: Option<bool>,
    /// Name of the environment variable that holds the key.
    pub auth_key_env: Option<String>,
    /// Replaces the plan's base URL (proxies, mock servers).
    pub base_url: Option<String>,
    pub tag_handling: Option<TagHandling>,
    pub split_sentences: Option<SplitSentences>,
    pub preserve_formatting: Option<bool>,
    pub outline_detection: Option<bool>,
    pub formality: Option<Formality>,
    pub non_splitting_tags: Option<Vec<String>>,
    pub splitting_tags: Option<Vec<String>>,
    pub ignore_tags: Option<Vec<String>>,
    /// Side listed by `languages` when `--type` is not given.
    #[serde(rename = "type")]
    pub language_type: Option<LanguageType>,
}

impl DeeplConfig {
    pub fn auth_key_env(&self) -> &str {
        self.auth_key_env
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_AUTH_KEY_ENV)
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/deepl-cli/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub deepl: DeeplConfig,
}

/// Problems with the resolved settings, detected before any request is made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "No DeepL token is set\n\n\
         Set the {env_var} environment variable:\n  \
         export {env_var}=\"your-auth-key\""
    )]
    MissingAuthKey { env_var: String },

    #[error("Cannot have identical source language ({source_lang}) and target language ({target_lang})")]
    SameLanguage {
        source_lang: String,
        target_lang: String,
    },
}

/// Connection-level overrides from the command line.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Authentication key, usually read from the environment.
    pub auth_key: Option<String>,
    pub pro: bool,
    pub legacy_auth: bool,
    pub base_url: Option<String>,
}

/// Everything needed to talk to the service.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub credential: Credential,
    pub plan: Plan,
    pub base_url: String,
}

impl ResolvedConfig {
    pub fn client(&self) -> DeepLClient {
        DeepLClient::new(self.plan, self.credential.clone()).with_base_url(&self.base_url)
    }
}

/// Resolves connection settings; CLI options take precedence over the file.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig, ConfigError> {
    let settings = &config_file.deepl;

    let key = options
        .auth_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingAuthKey {
            env_var: settings.auth_key_env().to_string(),
        })?;

    let placement = if options.legacy_auth || settings.legacy_auth.unwrap_or(false) {
        AuthPlacement::FormField
    } else {
        AuthPlacement::Header
    };
    let credential = Credential::new(key.trim()).with_placement(placement);

    let plan = if options.pro {
        Plan::Pro
    } else {
        match settings.pro {
            Some(true) => Plan::Pro,
            Some(false) => Plan::Free,
            None => Plan::for_credential(&credential),
        }
    };

    let base_url = options
        .base_url
        .as_ref()
        .or(settings.base_url.as_ref())
        .cloned()
        .unwrap_or_else(|| plan.base_url().to_string());

    Ok(ResolvedConfig {
        credential,
        plan,
        base_url,
    })
}

/// Translation overrides from the command line.
#[derive(Debug, Clone, Default)]
pub struct TranslateOverrides {
    pub source_lang: Option<String>,
    pub target_lang: Option<String>,
    pub tag_handling: Option<TagHandling>,
    pub split_sentences: Option<SplitSentences>,
    pub preserve_formatting: Option<bool>,
    pub outline_detection: Option<bool>,
    pub formality: Option<Formality>,
    pub non_splitting_tags: Vec<String>,
    pub splitting_tags: Vec<String>,
    pub ignore_tags: Vec<String>,
}

/// Merges CLI overrides, file defaults and built-in defaults into request options.
pub fn resolve_translate_options(
    overrides: &TranslateOverrides,
    config_file: &ConfigFile,
) -> Result<TranslateOptions, ConfigError> {
    let settings = &config_file.deepl;

    let source_lang = overrides
        .source_lang
        .as_ref()
        .or(settings.source_lang.as_ref())
        .map_or(DEFAULT_SOURCE_LANG, String::as_str)
        .trim()
        .to_string();
    let target_lang = overrides
        .target_lang
        .as_ref()
        .or(settings.target_lang.as_ref())
        .map_or(DEFAULT_TARGET_LANG, String::as_str)
        .trim()
        .to_string();

    if source_lang.eq_ignore_ascii_case(&target_lang) {
        return Err(ConfigError::SameLanguage {
            source_lang,
            target_lang,
        });
    }

    Ok(TranslateOptions {
        source_lang: Some(source_lang),
        target_lang,
        tag_handling: overrides.tag_handling.or(settings.tag_handling),
        split_sentences: overrides.split_sentences.or(settings.split_sentences),
        preserve_formatting: overrides
            .preserve_formatting
            .or(settings.preserve_formatting),
        outline_detection: overrides.outline_detection.or(settings.outline_detection),
        formality: overrides.formality.or(settings.formality),
        non_splitting_tags: tags_or_file(
            &overrides.non_splitting_tags,
            settings.non_splitting_tags.as_deref(),
        ),
        splitting_tags: tags_or_file(&overrides.splitting_tags, settings.splitting_tags.as_deref()),
        ignore_tags: tags_or_file(&overrides.ignore_tags, settings.ignore_tags.as_deref()),
    })
}

/// An empty CLI list means the flag was not given.
fn tags_or_file(cli: &[String], file: Option<&[String]>) -> Vec<String> {
    if cli.is_empty() {
        file.map(<[String]>::to_vec).unwrap_or_default()
    } else {
        cli.to_vec()
    }
}

/// Picks the `languages` listing side: `--type`, then the file, then source.
pub fn resolve_language_type(cli: Option<LanguageType>, config_file: &ConfigFile) -> LanguageType {
    cli.or(config_file.deepl.language_type).unwrap_or_default()
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Configuration is stored at `$XDG_CONFIG_HOME/deepl-cli/config.toml`
    /// or `~/.config/deepl-cli/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the file, treating a missing file as empty configuration.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }

    /// Writes the file through a temp file and rename, so an interrupted
    /// save never leaves a truncated config behind.
    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        let parent = self.config_path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory: {}", parent.display())
        })?;

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        let temp_path = parent.join(".config.toml.tmp");
        fs::write(&temp_path, contents)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &self.config_path).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Reads the authentication key from the configured environment variable.
    pub fn auth_key_from_env(config: &ConfigFile) -> Option<String> {
        std::env::var(config.deepl.auth_key_env())
            .ok()
            .filter(|key| !key.is_empty())
    }
}
