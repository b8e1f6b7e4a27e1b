//! Build metadata shown by `--version`.
//!
//! Computed once in `main` and handed to the argument parser; nothing here
//! is cached globally.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Commit hash, injected at build time via `DEEPL_CLI_COMMIT`.
    pub commit: Option<&'static str>,
    /// Builder name, injected at build time via `DEEPL_CLI_BUILT_BY`.
    pub built_by: Option<&'static str>,
    pub os: &'static str,
    pub arch: &'static str,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            commit: option_env!("DEEPL_CLI_COMMIT"),
            built_by: option_env!("DEEPL_CLI_BUILT_BY"),
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (rev {}) [{} {}]",
            self.version,
            self.commit.unwrap_or("unknown"),
            self.os,
            self.arch
        )?;
        if let Some(builder) = self.built_by {
            write!(f, " [built by {builder}]")?;
        }
        Ok(())
    }
}
