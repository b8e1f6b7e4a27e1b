//! Input text from a file, a pipe, or the terminal.

mod reader;

pub use reader::{InputReader, MAX_INPUT_SIZE};
