use serde::{Deserialize, Serialize};

/// A single whitespace-delimited lexical item from a scene source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Text of the token, exactly as it appears in the source
    pub text: String,
    /// Line where the token starts (1-indexed)
    pub line: usize,
    /// Column where the token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token at the given source position
    pub fn new(text: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            text: text.into(),
            line,
            column,
        }
    }

    /// Inner text of a double-quoted token, or `None` if the token is not
    /// a complete quoted string.
    pub fn unquote(&self) -> Option<&str> {
        self.text.strip_prefix('"')?.strip_suffix('"')
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
