//! Statement parsing for scene description sources
//!
//! Classifies tokens against a keyword table and emits AST nodes.

mod keyword_table;
mod scene_parser;

pub use keyword_table::{ArgKind, KeywordTable, StatementKind, StatementSig};
pub use scene_parser::{ParseOutput, SceneParser};
