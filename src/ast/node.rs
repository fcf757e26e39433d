use std::path::PathBuf;

use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

use super::visitor::Visitor;
use crate::param::Param;

/// Position of a statement in its source file
///
/// Attached to every node at construction and immutable afterwards. Used
/// only for diagnostics, never for node identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Path of the source file (synthetic for in-memory buffers)
    pub file_path: PathBuf,
    /// Line of the statement keyword (1-indexed)
    pub line: usize,
    /// Column of the statement keyword (1-indexed)
    pub start_char: usize,
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file_path.display(), self.line, self.start_char)
    }
}

/// Discriminant identifying a statement node's concrete form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeTag {
    /// Surface reflectance declaration
    Reflectance,
    /// Light emission declaration
    Emission,
    /// Translation transform
    Translate,
    /// Scaling transform
    Scale,
    /// Axis-angle rotation transform
    Rotate,
    /// Camera look-at placement
    LookAt,
    /// Named coordinate system definition
    CoordinateSystem,
    /// Switch to a named coordinate system
    CoordSysTransform,
    /// Replace the current transform with a matrix
    Transform,
    /// Multiply the current transform by a matrix
    ConcatTransform,
    /// Include another scene file
    Include,
    /// Scoped group of child statements
    Block,
}

/// Payload of one recognized statement form
///
/// Closed set: every recognized statement is one of these variants, and
/// consumers match exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// Surface reflectance, carried as an rgb parameter
    Reflectance {
        /// The declared reflectance parameter
        param: Param,
    },
    /// Light emission, carried as an rgb parameter
    Emission {
        /// The declared emission parameter
        param: Param,
    },
    /// Translate by a delta vector
    Translate {
        /// Translation delta
        delta: DVec3,
    },
    /// Scale per axis
    Scale {
        /// Per-axis scale factors
        factor: DVec3,
    },
    /// Rotate around an axis
    Rotate {
        /// Rotation angle in degrees
        angle: f64,
        /// Rotation axis
        axis: DVec3,
    },
    /// Place the camera
    LookAt {
        /// Camera position
        eye: DVec3,
        /// Point the camera looks at
        look: DVec3,
        /// Up direction
        up: DVec3,
    },
    /// Name the current coordinate system
    CoordinateSystem {
        /// Name under which the system is stored
        name: String,
    },
    /// Restore a named coordinate system
    CoordSysTransform {
        /// Name of the system to restore
        name: String,
    },
    /// Replace the current transform
    Transform {
        /// Column-major 4x4 matrix
        matrix: DMat4,
    },
    /// Concatenate onto the current transform
    ConcatTransform {
        /// Column-major 4x4 matrix
        matrix: DMat4,
    },
    /// Pull in another scene file
    Include {
        /// Path of the included file, as written in the source
        path: String,
    },
    /// Lexically scoped group of statements
    Block {
        /// Child nodes in source order, exclusively owned
        children: Vec<Node>,
    },
}

impl Stmt {
    /// Tag of this statement's concrete form.
    pub fn tag(&self) -> NodeTag {
        match self {
            Stmt::Reflectance { .. } => NodeTag::Reflectance,
            Stmt::Emission { .. } => NodeTag::Emission,
            Stmt::Translate { .. } => NodeTag::Translate,
            Stmt::Scale { .. } => NodeTag::Scale,
            Stmt::Rotate { .. } => NodeTag::Rotate,
            Stmt::LookAt { .. } => NodeTag::LookAt,
            Stmt::CoordinateSystem { .. } => NodeTag::CoordinateSystem,
            Stmt::CoordSysTransform { .. } => NodeTag::CoordSysTransform,
            Stmt::Transform { .. } => NodeTag::Transform,
            Stmt::ConcatTransform { .. } => NodeTag::ConcatTransform,
            Stmt::Include { .. } => NodeTag::Include,
            Stmt::Block { .. } => NodeTag::Block,
        }
    }
}

/// One recognized scene statement with its source position
///
/// Immutable after construction. A `Block` node's child list is the only
/// structure that grows, and only while its subtree is being parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Where the statement appears in the source
    pub location: SourceLocation,
    /// The statement payload
    pub stmt: Stmt,
}

impl Node {
    /// Creates a node at the given source position
    pub fn new(location: SourceLocation, stmt: Stmt) -> Self {
        Node { location, stmt }
    }

    /// Tag of this node's concrete form.
    pub fn tag(&self) -> NodeTag {
        self.stmt.tag()
    }

    /// Source position of this node.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// Dispatches to the visitor operation matching this node's form.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match &self.stmt {
            Stmt::Reflectance { param } => visitor.visit_reflectance(self, param),
            Stmt::Emission { param } => visitor.visit_emission(self, param),
            Stmt::Translate { delta } => visitor.visit_translate(self, *delta),
            Stmt::Scale { factor } => visitor.visit_scale(self, *factor),
            Stmt::Rotate { angle, axis } => visitor.visit_rotate(self, *angle, *axis),
            Stmt::LookAt { eye, look, up } => visitor.visit_look_at(self, *eye, *look, *up),
            Stmt::CoordinateSystem { name } => visitor.visit_coordinate_system(self, name),
            Stmt::CoordSysTransform { name } => visitor.visit_coord_sys_transform(self, name),
            Stmt::Transform { matrix } => visitor.visit_transform(self, matrix),
            Stmt::ConcatTransform { matrix } => visitor.visit_concat_transform(self, matrix),
            Stmt::Include { path } => visitor.visit_include(self, path),
            Stmt::Block { children } => visitor.visit_block(self, children),
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.stmt {
            Stmt::Reflectance { param } => write!(f, "ReflectanceDecl({})", param),
            Stmt::Emission { param } => write!(f, "EmissionDecl({})", param),
            Stmt::Translate { delta } => write!(f, "TranslateStmt(delta = {})", delta),
            Stmt::Scale { factor } => write!(f, "ScaleStmt(factor = {})", factor),
            Stmt::Rotate { angle, axis } => {
                write!(f, "RotateStmt(angle = {}, axis = {})", angle, axis)
            }
            Stmt::LookAt { eye, look, up } => {
                write!(f, "LookAtStmt(eye = {}, look = {}, up = {})", eye, look, up)
            }
            Stmt::CoordinateSystem { name } => write!(f, "CoordinateSystemStmt(\"{}\")", name),
            Stmt::CoordSysTransform { name } => write!(f, "CoordSysTransformStmt(\"{}\")", name),
            Stmt::Transform { matrix } => {
                write!(f, "TransformStmt({:?})", matrix.to_cols_array())
            }
            Stmt::ConcatTransform { matrix } => {
                write!(f, "ConcatTransformStmt({:?})", matrix.to_cols_array())
            }
            Stmt::Include { path } => write!(f, "IncludeStmt(\"{}\")", path),
            Stmt::Block { children } => write!(f, "Block({} children)", children.len()),
        }
    }
}
