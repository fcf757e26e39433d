use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::ast::NodeTag;

/// Coercion target for a single argument token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Parses as `i64`
    Int,
    /// Parses as `f64`
    Float,
    /// Literal `true` or `false`
    Bool,
    /// Double-quoted string
    Str,
}

impl ArgKind {
    /// Diagnostic name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            ArgKind::Int => "integer",
            ArgKind::Float => "float",
            ArgKind::Bool => "bool",
            ArgKind::Str => "quoted string",
        }
    }
}

/// What recognizing a keyword does to the parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Emit a node with the given tag once the arguments are read
    Emit(NodeTag),
    /// Open a new block scope
    BeginBlock,
    /// Close the innermost block scope
    EndBlock,
}

/// Argument contract for one statement keyword
///
/// The kind signature is derived from the node tag, so a signature always
/// matches the payload its node constructor expects. Constructed through
/// [`StatementSig::emit`], [`StatementSig::begin_block`] and
/// [`StatementSig::end_block`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementSig {
    kind: StatementKind,
    args: Vec<ArgKind>,
}

impl StatementSig {
    /// Signature of a node-emitting statement with the tag's canonical
    /// argument list.
    pub fn emit(tag: NodeTag) -> Self {
        StatementSig {
            kind: StatementKind::Emit(tag),
            args: canonical_args(tag),
        }
    }

    /// Signature of a block-opening keyword (no arguments).
    pub fn begin_block() -> Self {
        StatementSig {
            kind: StatementKind::BeginBlock,
            args: Vec::new(),
        }
    }

    /// Signature of a block-closing keyword (no arguments).
    pub fn end_block() -> Self {
        StatementSig {
            kind: StatementKind::EndBlock,
            args: Vec::new(),
        }
    }

    /// Effect of the keyword on the parse.
    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    /// Declared kind of each argument token, in order.
    pub fn args(&self) -> &[ArgKind] {
        &self.args
    }

    /// Number of argument tokens the statement consumes.
    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

/// Canonical argument kinds for each statement form.
fn canonical_args(tag: NodeTag) -> Vec<ArgKind> {
    use ArgKind::{Float, Str};
    match tag {
        NodeTag::Reflectance | NodeTag::Emission => vec![Float; 3],
        NodeTag::Translate | NodeTag::Scale => vec![Float; 3],
        NodeTag::Rotate => vec![Float; 4],
        NodeTag::LookAt => vec![Float; 9],
        NodeTag::Transform | NodeTag::ConcatTransform => vec![Float; 16],
        NodeTag::CoordinateSystem | NodeTag::CoordSysTransform | NodeTag::Include => vec![Str],
        NodeTag::Block => Vec::new(),
    }
}

/// Keyword lookup the statement parser classifies against
///
/// Maps each recognized keyword to its [`StatementSig`]. The grammar is
/// configuration: callers may start from [`KeywordTable::pbrt`] and rename,
/// add or remove entries before handing the table to a parser.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    entries: HashMap<String, StatementSig>,
}

impl KeywordTable {
    /// Table with no recognized keywords.
    pub fn empty() -> Self {
        KeywordTable::default()
    }

    /// The default PBRT-style grammar.
    pub fn pbrt() -> Self {
        PBRT_TABLE.clone()
    }

    /// Adds or replaces a keyword entry.
    pub fn insert(&mut self, keyword: impl Into<String>, sig: StatementSig) {
        self.entries.insert(keyword.into(), sig);
    }

    /// Removes a keyword entry.
    pub fn remove(&mut self, keyword: &str) {
        self.entries.remove(keyword);
    }

    /// Looks a keyword up.
    pub fn get(&self, keyword: &str) -> Option<&StatementSig> {
        self.entries.get(keyword)
    }

    /// Number of recognized keywords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no keywords are recognized.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

lazy_static! {
    static ref PBRT_TABLE: KeywordTable = {
        let mut table = KeywordTable::empty();
        table.insert("Reflectance", StatementSig::emit(NodeTag::Reflectance));
        table.insert("Emission", StatementSig::emit(NodeTag::Emission));
        table.insert("Translate", StatementSig::emit(NodeTag::Translate));
        table.insert("Scale", StatementSig::emit(NodeTag::Scale));
        table.insert("Rotate", StatementSig::emit(NodeTag::Rotate));
        table.insert("LookAt", StatementSig::emit(NodeTag::LookAt));
        table.insert("CoordinateSystem", StatementSig::emit(NodeTag::CoordinateSystem));
        table.insert("CoordSysTransform", StatementSig::emit(NodeTag::CoordSysTransform));
        table.insert("Transform", StatementSig::emit(NodeTag::Transform));
        table.insert("ConcatTransform", StatementSig::emit(NodeTag::ConcatTransform));
        table.insert("Include", StatementSig::emit(NodeTag::Include));
        table.insert("AttributeBegin", StatementSig::begin_block());
        table.insert("AttributeEnd", StatementSig::end_block());
        table
    };
}
