//! Abstract syntax tree for parsed scene statements
//!
//! A closed, tagged set of statement forms plus the visitor protocol
//! consumers use to traverse them.

mod node;
mod visitor;

pub use node::{Node, NodeTag, SourceLocation, Stmt};
pub use visitor::Visitor;
