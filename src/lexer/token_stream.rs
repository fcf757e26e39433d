use std::path::Path;

use super::source::SourceReader;
use super::token::Token;
use crate::error::{Error, Result};

/// Lifecycle state of a [`TokenStream`].
///
/// A fresh stream sits before its first token; advancing moves it to `Live`,
/// and exhausting the source moves it to `AtEnd`. `AtEnd` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// Created but never advanced
    Fresh,
    /// At least one token has been yielded and more may follow
    Live,
    /// Source exhausted; no further tokens
    AtEnd,
}

/// Lazy, pull-based tokenizer over a [`SourceReader`].
///
/// Each [`advance`](TokenStream::advance) call performs one bounded read
/// loop: skip whitespace and `#` comments, then accumulate characters until
/// the next whitespace delimiter or end of source. Nothing is buffered
/// beyond the current token, and the stream is single-pass: re-iterating
/// requires a fresh reader.
///
/// Runs of consecutive delimiters collapse, and a source that ends exactly
/// on a delimiter yields no trailing empty token.
///
/// The stream implements [`Iterator`], so ordinary `for` syntax works:
///
/// ```
/// use pbrt_parser::TokenStream;
///
/// let texts: Vec<String> = TokenStream::from_str("Translate 0 1.5 0")
///     .map(|tok| tok.text)
///     .collect();
/// assert_eq!(texts, ["Translate", "0", "1.5", "0"]);
/// ```
#[derive(Debug)]
pub struct TokenStream {
    reader: SourceReader,
    current: Option<Token>,
    state: StreamState,
}

impl TokenStream {
    /// Creates a stream over an existing reader.
    pub fn new(reader: SourceReader) -> Self {
        TokenStream {
            reader,
            current: None,
            state: StreamState::Fresh,
        }
    }

    /// Opens a scene file and wraps it in a stream.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(SourceReader::from_path(path)?))
    }

    /// Wraps an in-memory buffer in a stream.
    pub fn from_str(text: &str) -> Self {
        Self::new(SourceReader::from_str(text))
    }

    /// Current lifecycle state.
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// True once the source is exhausted.
    pub fn is_at_end(&self) -> bool {
        self.state == StreamState::AtEnd
    }

    /// Path of the underlying source.
    pub fn path(&self) -> &Path {
        self.reader.path()
    }

    /// The most recently yielded token.
    ///
    /// Fails with [`Error::NoCurrentToken`] on a stream that has not been
    /// advanced, or whose source is exhausted.
    pub fn current(&self) -> Result<&Token> {
        match self.state {
            StreamState::Live => self.current.as_ref().ok_or(Error::NoCurrentToken),
            StreamState::Fresh | StreamState::AtEnd => Err(Error::NoCurrentToken),
        }
    }

    /// Produces the next token, or `None` once the source is exhausted.
    ///
    /// Calling `advance` on an exhausted stream is a no-op that stays in
    /// the end state.
    pub fn advance(&mut self) -> Option<Token> {
        if self.state == StreamState::AtEnd {
            return None;
        }
        self.skip_blank();

        let line = self.reader.line();
        let column = self.reader.column();
        let mut text = String::new();

        loop {
            match self.reader.peek() {
                None => break,
                Some(c) if c.is_whitespace() => break,
                Some('#') => {
                    self.skip_comment();
                    break;
                }
                Some('"') if text.is_empty() => {
                    self.read_quoted(&mut text);
                    break;
                }
                Some(c) => {
                    text.push(c);
                    self.reader.next_char();
                }
            }
        }

        if text.is_empty() {
            // Nothing but delimiters remained; no trailing empty token.
            self.state = StreamState::AtEnd;
            self.current = None;
            return None;
        }

        tracing::trace!("token '{}' at {}:{}", text, line, column);
        let token = Token::new(text, line, column);
        self.current = Some(token.clone());
        self.state = StreamState::Live;
        Some(token)
    }

    /// Consumes whitespace and `#` comments up to the next token start.
    fn skip_blank(&mut self) {
        while let Some(c) = self.reader.peek() {
            if c.is_whitespace() {
                self.reader.next_char();
            } else if c == '#' {
                self.skip_comment();
            } else {
                break;
            }
        }
    }

    fn skip_comment(&mut self) {
        while let Some(c) = self.reader.peek() {
            if c == '\n' {
                break;
            }
            self.reader.next_char();
        }
    }

    /// Reads a double-quoted run, including any whitespace inside it.
    ///
    /// The closing quote is consumed if present; if the source ends first,
    /// the token keeps its unbalanced opening quote and coercion rejects it
    /// downstream.
    fn read_quoted(&mut self, text: &mut String) {
        text.push('"');
        self.reader.next_char();
        while let Some(c) = self.reader.next_char() {
            text.push(c);
            if c == '"' {
                break;
            }
        }
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.advance()
    }
}
