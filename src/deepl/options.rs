//! Translation parameters and their wire encoding.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How markup in the input is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagHandling {
    Xml,
    Html,
}

impl TagHandling {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Html => "html",
        }
    }
}

/// Whether the engine splits the input into sentences first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum SplitSentences {
    /// No splitting; the whole input is one sentence.
    #[value(name = "0")]
    #[serde(rename = "0")]
    Off,
    /// Split on punctuation and newlines.
    #[value(name = "1")]
    #[serde(rename = "1")]
    On,
    /// Split on punctuation only.
    #[value(name = "nonewlines")]
    #[serde(rename = "nonewlines")]
    NoNewlines,
}

impl SplitSentences {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "0",
            Self::On => "1",
            Self::NoNewlines => "nonewlines",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Formality {
    Default,
    More,
    Less,
    PreferMore,
    PreferLess,
}

impl Formality {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::More => "more",
            Self::Less => "less",
            Self::PreferMore => "prefer_more",
            Self::PreferLess => "prefer_less",
        }
    }
}

/// Which side of a translation `GET /languages` lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageType {
    #[default]
    Source,
    Target,
}

impl LanguageType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Target => "target",
        }
    }
}

/// Everything about a translation request except the text itself.
///
/// Only the fields that are set end up as request parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Source language; `None` lets the service detect it.
    pub source_lang: Option<String>,
    pub target_lang: String,
    pub tag_handling: Option<TagHandling>,
    pub split_sentences: Option<SplitSentences>,
    pub preserve_formatting: Option<bool>,
    pub outline_detection: Option<bool>,
    pub formality: Option<Formality>,
    pub non_splitting_tags: Vec<String>,
    pub splitting_tags: Vec<String>,
    pub ignore_tags: Vec<String>,
}

impl TranslateOptions {
    pub fn new(target_lang: impl Into<String>) -> Self {
        Self {
            target_lang: target_lang.into(),
            ..Self::default()
        }
    }

    /// Request parameters for translating `text`.
    pub fn to_params(&self, text: &str) -> Vec<(String, String)> {
        let mut params = vec![
            ("text".to_string(), text.to_string()),
            ("target_lang".to_string(), self.target_lang.clone()),
        ];

        let mut push = |name: &str, value: &str| {
            if !value.is_empty() {
                params.push((name.to_string(), value.to_string()));
            }
        };

        if let Some(source) = &self.source_lang {
            push("source_lang", source);
        }
        if let Some(tag_handling) = self.tag_handling {
            push("tag_handling", tag_handling.as_str());
        }
        if let Some(split) = self.split_sentences {
            push("split_sentences", split.as_str());
        }
        if let Some(preserve) = self.preserve_formatting {
            push("preserve_formatting", flag(preserve));
        }
        if let Some(outline) = self.outline_detection {
            push("outline_detection", flag(outline));
        }
        if let Some(formality) = self.formality {
            push("formality", formality.as_str());
        }
        push("non_splitting_tags", &join_tags(&self.non_splitting_tags));
        push("splitting_tags", &join_tags(&self.splitting_tags));
        push("ignore_tags", &join_tags(&self.ignore_tags));

        params
    }
}

const fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

fn join_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
