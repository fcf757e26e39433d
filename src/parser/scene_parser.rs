use std::path::Path;

use glam::{DMat4, DVec3};

use super::keyword_table::{ArgKind, KeywordTable, StatementKind, StatementSig};
use crate::ast::{Node, NodeTag, SourceLocation, Stmt};
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenStream};
use crate::param::{Param, ParamKind, ParamValue};

/// One coerced argument token
#[derive(Debug, Clone, PartialEq)]
enum ArgValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

/// Result of a parse run
///
/// Either a complete node sequence (`error` is `None`), or everything
/// parsed up to the failure point plus the structured error. Nodes emitted
/// before a failure are kept, never rolled back.
#[derive(Debug)]
pub struct ParseOutput {
    /// Top-level nodes in source order
    pub nodes: Vec<Node>,
    /// The error that stopped the parse, if any
    pub error: Option<Error>,
}

impl ParseOutput {
    /// True when the whole source parsed.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Converts to a `Result`, discarding partial nodes on failure.
    pub fn into_result(self) -> Result<Vec<Node>> {
        match self.error {
            None => Ok(self.nodes),
            Some(err) => Err(err),
        }
    }
}

/// Statement parser over a token stream
///
/// Classifies each token against a [`KeywordTable`], consumes that
/// keyword's arguments, and emits AST nodes into the top-level sequence or
/// the innermost open block. Statements are parsed strictly in source
/// order; the parser exclusively owns its stream.
///
/// ```
/// use pbrt_parser::{NodeTag, SceneParser};
///
/// let output = SceneParser::from_str("LookAt 0 0 0  0 0 1  0 1 0").parse();
/// assert!(output.is_complete());
/// assert_eq!(output.nodes[0].tag(), NodeTag::LookAt);
/// ```
#[derive(Debug)]
pub struct SceneParser {
    stream: TokenStream,
    table: KeywordTable,
}

impl SceneParser {
    /// Parser over an existing stream, using the default PBRT grammar.
    pub fn new(stream: TokenStream) -> Self {
        Self::with_table(stream, KeywordTable::pbrt())
    }

    /// Parser with a caller-supplied keyword table.
    pub fn with_table(stream: TokenStream, table: KeywordTable) -> Self {
        SceneParser { stream, table }
    }

    /// Opens a scene file with the default grammar.
    ///
    /// Fails with [`Error::SourceUnavailable`] if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(TokenStream::from_path(path)?))
    }

    /// Parses an in-memory buffer with the default grammar.
    pub fn from_str(text: &str) -> Self {
        Self::new(TokenStream::from_str(text))
    }

    /// Runs the parse to completion or first failure.
    pub fn parse(mut self) -> ParseOutput {
        let mut root: Vec<Node> = Vec::new();
        // Open block scopes, innermost last. Each entry owns the keyword
        // token that opened it and the children emitted so far.
        let mut open_blocks: Vec<(Token, Vec<Node>)> = Vec::new();

        while let Some(keyword) = self.stream.advance() {
            let sig = match self.table.get(&keyword.text) {
                Some(sig) => sig.clone(),
                None => {
                    return ParseOutput {
                        nodes: root,
                        error: Some(Error::UnknownStatement {
                            keyword: keyword.text.clone(),
                            line: keyword.line,
                            column: keyword.column,
                        }),
                    };
                }
            };

            match sig.kind() {
                StatementKind::BeginBlock => {
                    open_blocks.push((keyword, Vec::new()));
                }
                StatementKind::EndBlock => match open_blocks.pop() {
                    Some((opener, children)) => {
                        let node = Node::new(self.location_of(&opener), Stmt::Block { children });
                        push_node(&mut root, &mut open_blocks, node);
                    }
                    None => {
                        return ParseOutput {
                            nodes: root,
                            error: Some(Error::UnbalancedBlock {
                                keyword: keyword.text.clone(),
                                line: keyword.line,
                                column: keyword.column,
                            }),
                        };
                    }
                },
                StatementKind::Emit(tag) => {
                    let args = match self.read_arguments(&keyword, &sig) {
                        Ok(args) => args,
                        Err(err) => {
                            return ParseOutput {
                                nodes: root,
                                error: Some(err),
                            };
                        }
                    };
                    let node = self.build_node(tag, &keyword, args);
                    tracing::debug!("parsed {} at line {}", keyword.text, keyword.line);
                    push_node(&mut root, &mut open_blocks, node);
                }
            }
        }

        // A block left open at end of source never completed; its children
        // go down with it.
        if let Some((opener, _)) = open_blocks.first() {
            return ParseOutput {
                nodes: root,
                error: Some(Error::UnbalancedBlock {
                    keyword: opener.text.clone(),
                    line: opener.line,
                    column: opener.column,
                }),
            };
        }

        ParseOutput {
            nodes: root,
            error: None,
        }
    }

    /// Consumes and coerces one token per declared argument kind.
    fn read_arguments(&mut self, keyword: &Token, sig: &StatementSig) -> Result<Vec<ArgValue>> {
        let mut args = Vec::with_capacity(sig.arity());
        for &kind in sig.args() {
            let token = self
                .stream
                .advance()
                .ok_or_else(|| Error::TruncatedStatement {
                    keyword: keyword.text.clone(),
                    line: keyword.line,
                    column: keyword.column,
                })?;
            args.push(coerce(kind, &token)?);
        }
        Ok(args)
    }

    /// Constructs the node for a completed statement.
    ///
    /// Argument kinds are guaranteed by `read_arguments` against the tag's
    /// canonical signature.
    fn build_node(&self, tag: NodeTag, keyword: &Token, args: Vec<ArgValue>) -> Node {
        let location = self.location_of(keyword);
        let stmt = match tag {
            NodeTag::Reflectance => Stmt::Reflectance {
                param: rgb_param("reflectance", &args),
            },
            NodeTag::Emission => Stmt::Emission {
                param: rgb_param("emission", &args),
            },
            NodeTag::Translate => Stmt::Translate {
                delta: vec3(&float_args(&args)),
            },
            NodeTag::Scale => Stmt::Scale {
                factor: vec3(&float_args(&args)),
            },
            NodeTag::Rotate => {
                let v = float_args(&args);
                Stmt::Rotate {
                    angle: v[0],
                    axis: vec3(&v[1..]),
                }
            }
            NodeTag::LookAt => {
                let v = float_args(&args);
                Stmt::LookAt {
                    eye: vec3(&v[0..3]),
                    look: vec3(&v[3..6]),
                    up: vec3(&v[6..9]),
                }
            }
            NodeTag::CoordinateSystem => Stmt::CoordinateSystem {
                name: str_arg(&args),
            },
            NodeTag::CoordSysTransform => Stmt::CoordSysTransform {
                name: str_arg(&args),
            },
            NodeTag::Transform => Stmt::Transform {
                matrix: mat4(&float_args(&args)),
            },
            NodeTag::ConcatTransform => Stmt::ConcatTransform {
                matrix: mat4(&float_args(&args)),
            },
            NodeTag::Include => Stmt::Include {
                path: str_arg(&args),
            },
            NodeTag::Block => Stmt::Block {
                children: Vec::new(),
            },
        };
        Node::new(location, stmt)
    }

    fn location_of(&self, token: &Token) -> SourceLocation {
        SourceLocation {
            file_path: self.stream.path().to_path_buf(),
            line: token.line,
            start_char: token.column,
        }
    }
}

/// Appends a finished node to the innermost open block, or to the
/// top-level sequence when no block is open.
fn push_node(root: &mut Vec<Node>, open_blocks: &mut [(Token, Vec<Node>)], node: Node) {
    match open_blocks.last_mut() {
        Some((_, children)) => children.push(node),
        None => root.push(node),
    }
}

/// Coerces one token to its declared kind.
fn coerce(kind: ArgKind, token: &Token) -> Result<ArgValue> {
    let malformed = || Error::MalformedArgument {
        expected: kind.name().to_string(),
        actual: token.text.clone(),
        line: token.line,
        column: token.column,
    };
    match kind {
        ArgKind::Int => token
            .text
            .parse::<i64>()
            .map(ArgValue::Int)
            .map_err(|_| malformed()),
        ArgKind::Float => token
            .text
            .parse::<f64>()
            .map(ArgValue::Float)
            .map_err(|_| malformed()),
        ArgKind::Bool => match token.text.as_str() {
            "true" => Ok(ArgValue::Bool(true)),
            "false" => Ok(ArgValue::Bool(false)),
            _ => Err(malformed()),
        },
        ArgKind::Str => token
            .unquote()
            .map(|s| ArgValue::Str(s.to_string()))
            .ok_or_else(malformed),
    }
}

/// Builds the rgb parameter carried by the declaration statements.
fn rgb_param(name: &str, args: &[ArgValue]) -> Param {
    let param = Param::new(name, ParamKind::Rgb, ParamValue::FloatList(float_args(args)));
    debug_assert!(kind_agrees(param.kind, &param.value));
    param
}

/// True when a declared parameter kind and a runtime value variant agree.
fn kind_agrees(kind: ParamKind, value: &ParamValue) -> bool {
    match kind {
        ParamKind::Integer => matches!(value, ParamValue::Int(_) | ParamValue::IntList(_)),
        ParamKind::Float | ParamKind::Blackbody => {
            matches!(value, ParamValue::Float(_) | ParamValue::FloatList(_))
        }
        ParamKind::Point2
        | ParamKind::Point3
        | ParamKind::Vector3
        | ParamKind::Normal3
        | ParamKind::Spectrum
        | ParamKind::Rgb => matches!(value, ParamValue::FloatList(_)),
        ParamKind::Bool => matches!(value, ParamValue::Bool(_)),
        ParamKind::String => matches!(value, ParamValue::Str(_) | ParamValue::StrList(_)),
    }
}

fn float_args(args: &[ArgValue]) -> Vec<f64> {
    args.iter()
        .filter_map(|a| match a {
            ArgValue::Float(f) => Some(*f),
            ArgValue::Int(i) => Some(*i as f64),
            ArgValue::Bool(_) | ArgValue::Str(_) => None,
        })
        .collect()
}

fn str_arg(args: &[ArgValue]) -> String {
    args.iter()
        .find_map(|a| match a {
            ArgValue::Str(s) => Some(s.clone()),
            _ => None,
        })
        .unwrap_or_default()
}

fn vec3(v: &[f64]) -> DVec3 {
    DVec3::new(v[0], v[1], v[2])
}

fn mat4(v: &[f64]) -> DMat4 {
    let mut cols = [0.0f64; 16];
    cols.copy_from_slice(v);
    DMat4::from_cols_array(&cols)
}
