//! Configuration file management and setting resolution.

mod manager;

pub use manager::{
    ConfigError, ConfigFile, ConfigManager, DEFAULT_AUTH_KEY_ENV, DEFAULT_SOURCE_LANG,
    DEFAULT_TARGET_LANG, DeeplConfig, ResolveOptions, ResolvedConfig, TranslateOverrides,
    resolve_config, resolve_language_type, resolve_translate_options,
};
