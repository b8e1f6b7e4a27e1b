use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ResolveOptions, TranslateOverrides};
use crate::deepl::{Formality, LanguageType, SplitSentences, TagHandling};

#[derive(Parser, Debug)]
#[command(name = "deepl")]
#[command(about = "Translate text with the DeepL API")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub translate: TranslateArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every subcommand.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Source language code (default: EN, or the config file)
    #[arg(short = 's', long, alias = "source_lang", global = true)]
    pub source_lang: Option<String>,

    /// Target language code (default: JA, or the config file)
    #[arg(short = 't', long, alias = "target_lang", global = true)]
    pub target_lang: Option<String>,

    /// Use the Pro plan endpoint
    #[arg(long, global = true)]
    pub pro: bool,

    /// Send the auth key as a form field instead of a header
    #[arg(long, global = true)]
    pub legacy_auth: bool,

    /// Override the API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Debug output on stderr; repeat for more detail
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count, global = true)]
    pub debug: u8,
}

impl GlobalArgs {
    pub fn resolve_options(&self, auth_key: Option<String>) -> ResolveOptions {
        ResolveOptions {
            auth_key,
            pro: self.pro,
            legacy_auth: self.legacy_auth,
            base_url: self.base_url.clone(),
        }
    }
}

/// Translation input and formatting options.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct TranslateArgs {
    /// File to translate (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Parse the input as XML or HTML
    #[arg(long, value_enum, visible_alias = "tag", alias = "tag_handling")]
    pub tag_handling: Option<TagHandling>,

    /// Sentence splitting: 0 (none), 1 (punctuation and newlines), nonewlines
    #[arg(long, value_enum, visible_alias = "split", alias = "split_sentences")]
    pub split_sentences: Option<SplitSentences>,

    /// Keep the original formatting (0 or 1)
    #[arg(long, value_parser = parse_switch, visible_alias = "preserve", alias = "preserve_formatting")]
    pub preserve_formatting: Option<bool>,

    /// Automatic XML structure detection (0 disables it)
    #[arg(long, value_parser = parse_switch, visible_alias = "outline", alias = "outline_detection")]
    pub outline_detection: Option<bool>,

    /// Formality of the translation, for target languages that support it
    #[arg(long, value_enum)]
    pub formality: Option<Formality>,

    /// Comma-separated XML tags that never split sentences
    #[arg(long, value_delimiter = ',', visible_alias = "never", alias = "non_splitting_tags")]
    pub non_splitting_tags: Vec<String>,

    /// Comma-separated XML tags that always split sentences
    #[arg(long, value_delimiter = ',', visible_alias = "always", alias = "splitting_tags")]
    pub splitting_tags: Vec<String>,

    /// Comma-separated XML tags whose content is not translated
    #[arg(long, value_delimiter = ',', visible_alias = "ignore", alias = "ignore_tags")]
    pub ignore_tags: Vec<String>,
}

impl TranslateArgs {
    pub fn overrides(&self, global: &GlobalArgs) -> TranslateOverrides {
        TranslateOverrides {
            source_lang: global.source_lang.clone(),
            target_lang: global.target_lang.clone(),
            tag_handling: self.tag_handling,
            split_sentences: self.split_sentences,
            preserve_formatting: self.preserve_formatting,
            outline_detection: self.outline_detection,
            formality: self.formality,
            non_splitting_tags: self.non_splitting_tags.clone(),
            splitting_tags: self.splitting_tags.clone(),
            ignore_tags: self.ignore_tags.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate text (the default when no subcommand is given)
    #[command(visible_alias = "trans")]
    Translate(TranslateArgs),
    /// Show character and document usage for the current billing period
    #[command(visible_alias = "u")]
    Usage,
    /// List languages supported for translation
    Languages {
        /// List source or target languages (default: source, or the config file)
        #[arg(long = "type", value_enum)]
        language_type: Option<LanguageType>,
    },
    /// List language pairs supported by glossaries
    GlossaryLanguagePairs,
    /// Configure default settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

fn parse_switch(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" => Ok(true),
        "0" | "false" | "off" => Ok(false),
        _ => Err(format!("expected 0 or 1 (got: {value})")),
    }
}
