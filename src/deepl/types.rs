//! Typed shapes of successful response bodies.
//!
//! Every shape tolerates unknown fields and fills missing ones with defaults.

use serde::Deserialize;
use std::fmt;

/// Body of `POST /translate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TranslationList {
    #[serde(alias = "Translations")]
    pub translations: Vec<Translation>,
}

impl TranslationList {
    /// Translated texts, in response order.
    pub fn into_texts(self) -> Vec<String> {
        self.translations.into_iter().map(|t| t.text).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Translation {
    pub detected_source_language: String,
    pub text: String,
}

/// Body of `GET /usage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Usage {
    /// Characters translated so far in the current billing period.
    pub character_count: u64,
    /// Maximum number of characters per billing period.
    pub character_limit: u64,
    /// Documents translated so far in the current billing period.
    pub document_count: u64,
    /// Maximum number of documents per billing period.
    pub document_limit: u64,
    /// Documents translated by the whole team so far.
    pub team_document_count: u64,
    /// Maximum number of documents for the whole team.
    pub team_document_limit: u64,
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Character Count: {}; Character Limit: {}; Document Limit: {}; Document Count: {}; \
             Team Document Limit: {}; Team Document Count: {}.",
            self.character_count,
            self.character_limit,
            self.document_limit,
            self.document_count,
            self.team_document_limit,
            self.team_document_count,
        )
    }
}

/// One entry of `GET /languages`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Language {
    pub language: String,
    pub name: String,
    pub supports_formality: bool,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.language, self.name)?;
        if self.supports_formality {
            f.write_str(" (+ formality)")?;
        }
        Ok(())
    }
}

/// Body of `GET /glossary-language-pairs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GlossaryLanguagePairs {
    pub supported_languages: Vec<GlossaryLanguagePair>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GlossaryLanguagePair {
    pub source_lang: String,
    pub target_lang: String,
}

impl fmt::Display for GlossaryLanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ⇒ {}", self.source_lang, self.target_lang)
    }
}

/// One language per line.
pub fn format_languages(languages: &[Language]) -> String {
    join_lines(languages)
}

/// One glossary pair per line.
pub fn format_glossary_pairs(pairs: &[GlossaryLanguagePair]) -> String {
    join_lines(pairs)
}

fn join_lines<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
