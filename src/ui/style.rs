//! Terminal colors for human-facing output.
//!
//! Colors are dropped when the target stream is not a terminal or `NO_COLOR`
//! is set. Translations and listings are never styled.

use owo_colors::{OwoColorize, Stream, Style as Ansi};
use std::fmt::Display;

pub struct Style;

impl Style {
    /// Section headers, e.g. "Current settings".
    pub fn header<T: Display>(text: T) -> String {
        paint(&text, Stream::Stdout, Ansi::new().bold())
    }

    /// Setting names.
    pub fn label<T: Display>(text: T) -> String {
        paint(&text, Stream::Stdout, Ansi::new().dimmed())
    }

    /// Setting values.
    pub fn value<T: Display>(text: T) -> String {
        paint(&text, Stream::Stdout, Ansi::new().cyan())
    }

    /// Defaults and file paths.
    pub fn secondary<T: Display>(text: T) -> String {
        paint(&text, Stream::Stdout, Ansi::new().dimmed().italic())
    }

    pub fn success<T: Display>(text: T) -> String {
        paint(&text, Stream::Stdout, Ansi::new().green())
    }

    /// Error prefix; goes to stderr, so it follows stderr's color support.
    pub fn error<T: Display>(text: T) -> String {
        paint(&text, Stream::Stderr, Ansi::new().red().bold())
    }
}

fn paint<T: Display>(text: &T, stream: Stream, style: Ansi) -> String {
    text.if_supports_color(stream, |t| t.style(style)).to_string()
}
