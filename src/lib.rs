//! # pbrt-parser
//!
//! A streaming tokenizer and statement parser for PBRT-style scene
//! description files.
//!
//! Scene sources are whitespace-delimited keyword-then-arguments sequences:
//!
//! ```text
//! # place the camera
//! LookAt 3 4 1.5  .5 .5 0  0 0 1
//! AttributeBegin
//!     Translate 0 0 -1
//!     Reflectance .2 .8 .2
//! AttributeEnd
//! ```
//!
//! The crate turns such text into a tree of typed statement nodes and lets
//! consumers walk that tree through a visitor, without the parser knowing
//! anything about the consumer.
//!
//! ## Architecture
//!
//! ```text
//! Source text → SourceReader → TokenStream (lazy) → SceneParser → AST nodes → Visitor
//! ```
//!
//! - [`SourceReader`] - character-at-a-time reader over a file or buffer
//! - [`TokenStream`] - lazy, pull-based whitespace tokenizer
//! - [`SceneParser`] - keyword-table-driven statement parser
//! - [`Node`] / [`Stmt`] - the closed set of statement forms
//! - [`Visitor`] - traversal protocol over parsed nodes
//! - [`Param`] - named, kind-tagged statement parameter values
//!
//! ## Quick Start
//!
//! ```rust
//! use pbrt_parser::{NodeTag, SceneParser, Stmt};
//!
//! let output = SceneParser::from_str("LookAt 0 0 0  0 0 1  0 1 0").parse();
//! assert!(output.is_complete());
//!
//! let node = &output.nodes[0];
//! assert_eq!(node.tag(), NodeTag::LookAt);
//! if let Stmt::LookAt { eye, .. } = &node.stmt {
//!     assert_eq!(eye.to_array(), [0.0, 0.0, 0.0]);
//! }
//! ```
//!
//! ## Error Handling
//!
//! A failed parse keeps everything recognized before the failure and
//! reports a structured error with the offending source position:
//!
//! ```rust
//! use pbrt_parser::{Error, SceneParser};
//!
//! let output = SceneParser::from_str("Translate 1 2 3\nBogus 1").parse();
//! assert_eq!(output.nodes.len(), 1);
//! match output.error {
//!     Some(Error::UnknownStatement { keyword, line, .. }) => {
//!         assert_eq!(keyword, "Bogus");
//!         assert_eq!(line, 2);
//!     }
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```
//!
//! ## Scope
//!
//! The crate covers tokenization, statement recognition and the AST/visitor
//! contract. Semantic validation of argument values, scene-graph
//! construction and rendering are consumer concerns; the grammar itself is
//! configuration (see [`KeywordTable`]).

/// Version of the pbrt-parser crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod ast;
pub mod error;
pub mod lexer;
pub mod param;
pub mod parser;

// Re-export main types
pub use ast::{Node, NodeTag, SourceLocation, Stmt, Visitor};
pub use error::{Error, Result};
pub use lexer::{SourceReader, StreamState, Token, TokenStream};
pub use param::{Param, ParamKind, ParamValue};
pub use parser::{ArgKind, KeywordTable, ParseOutput, SceneParser, StatementKind, StatementSig};
