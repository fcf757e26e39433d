//! Lexical analysis for scene description sources
//!
//! Converts raw text into a lazy stream of whitespace-delimited tokens.

mod source;
mod token;
mod token_stream;

pub use source::SourceReader;
pub use token::Token;
pub use token_stream::{StreamState, TokenStream};
