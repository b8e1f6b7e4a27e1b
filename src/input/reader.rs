use anyhow::{Context, Result, bail};
use inquire::Text;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

/// Upper bound on input size; DeepL rejects request bodies above 128 KiB
/// anyway, this just stops runaway pipes early.
pub const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

pub struct InputReader;

impl InputReader {
    /// Reads from `file_path`, or from stdin when no path is given.
    ///
    /// An interactive stdin gets a single-line prompt instead of waiting for EOF.
    pub fn read(file_path: Option<&Path>) -> Result<String> {
        match file_path {
            Some(path) => Self::read_file(path),
            None if io::stdin().is_terminal() => Self::prompt_line(),
            None => Self::read_stdin(),
        }
    }

    fn read_file(path: &Path) -> Result<String> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to access file: {}", path.display()))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(
                "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                 Consider splitting the file into smaller parts.",
                size as f64 / 1024.0 / 1024.0
            );
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    fn prompt_line() -> Result<String> {
        Text::new("Text to translate:")
            .prompt()
            .context("Failed to read from terminal")
    }

    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        // One byte past the limit is enough to know it was exceeded.
        io::stdin()
            .lock()
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;

        if buffer.len() > MAX_INPUT_SIZE {
            bail!(
                "Input size exceeds maximum allowed size (1 MB).\n\n\
                 Consider splitting the input into smaller parts."
            );
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}
