//! # deepl-cli - DeepL Translation CLI
//!
//! `deepl` translates text from a file or stdin with the DeepL API and prints
//! the result. It also reports account usage, supported languages and
//! glossary language pairs.
//!
//! ## Quick Start
//!
//! ```bash
//! export DEEPL_TOKEN="your-auth-key:fx"
//!
//! # Translate a file
//! deepl -s EN -t DE ./notes.txt
//!
//! # Translate from stdin
//! cat report.html | deepl -t FR translate --tag-handling html
//!
//! # Account and service information
//! deepl usage
//! deepl languages --type target
//! deepl glossary-language-pairs
//! ```
//!
//! ## Configuration
//!
//! Defaults are stored in `~/.config/deepl-cli/config.toml`:
//!
//! ```toml
//! [deepl]
//! source_lang = "EN"
//! target_lang = "JA"
//! pro = false
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and setting resolution.
pub mod config;

/// DeepL API protocol layer.
pub mod deepl;

/// Input reading from files, pipes and the terminal.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;

/// Build metadata for `--version`.
pub mod version;
