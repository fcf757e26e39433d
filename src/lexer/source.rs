use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Character-at-a-time reader over a scene description source.
///
/// Owns the full decoded text of one source (a file or an in-memory buffer)
/// and hands out characters strictly forward, tracking line and column for
/// diagnostics. End of source is signalled by `None`, which no valid
/// character can be confused with.
#[derive(Debug)]
pub struct SourceReader {
    /// Path the source came from (synthetic for in-memory buffers)
    path: PathBuf,
    /// Source text as character vector
    chars: Vec<char>,
    /// Current read position
    pos: usize,
    /// Line of the next unread character (1-indexed)
    line: usize,
    /// Column of the next unread character (1-indexed)
    column: usize,
}

impl SourceReader {
    /// Opens a scene file for reading.
    ///
    /// Fails with [`Error::SourceUnavailable`] if the file cannot be opened
    /// or is not valid UTF-8.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path).map_err(|e| Error::SourceUnavailable {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self::with_text(path, &text))
    }

    /// Wraps an in-memory buffer. Never fails.
    pub fn from_str(text: &str) -> Self {
        Self::with_text(PathBuf::from("<memory>"), text)
    }

    fn with_text(path: PathBuf, text: &str) -> Self {
        SourceReader {
            path,
            chars: text.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Total size of the source in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true for a zero-length source.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Current read position in characters from the start.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Path of the underlying source.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Line of the next unread character (1-indexed).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column of the next unread character (1-indexed).
    pub fn column(&self) -> usize {
        self.column
    }

    /// True once every character has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Next unread character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Consumes and returns the next character, or `None` at end of source.
    pub fn next_char(&mut self) -> Option<char> {
        let c = *self.chars.get(self.pos)?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_reads() {
        let mut reader = SourceReader::from_str("ab");
        assert_eq!(reader.len(), 2);
        assert_eq!(reader.next_char(), Some('a'));
        assert_eq!(reader.next_char(), Some('b'));
        assert_eq!(reader.next_char(), None);
        assert_eq!(reader.next_char(), None);
        assert!(reader.is_at_end());
    }

    #[test]
    fn test_line_column_tracking() {
        let mut reader = SourceReader::from_str("a\nbc");
        assert_eq!((reader.line(), reader.column()), (1, 1));
        reader.next_char();
        assert_eq!((reader.line(), reader.column()), (1, 2));
        reader.next_char(); // newline
        assert_eq!((reader.line(), reader.column()), (2, 1));
        reader.next_char();
        assert_eq!((reader.line(), reader.column()), (2, 2));
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let err = SourceReader::from_path("/no/such/scene.pbrt").unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable { .. }));
    }

    #[test]
    fn test_empty_source() {
        let mut reader = SourceReader::from_str("");
        assert!(reader.is_empty());
        assert!(reader.is_at_end());
        assert_eq!(reader.next_char(), None);
    }
}
