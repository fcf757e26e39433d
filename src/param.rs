//! Statement parameter model
//!
//! A single closed vocabulary for statement argument values, shared by the
//! parser and every downstream consumer. Pure data: construction and
//! equality only. Kind/value agreement is the statement parser's job, not
//! this module's.

use serde::{Deserialize, Serialize};

/// A statement argument value
///
/// Sequence variants are homogeneous by construction; a list never mixes
/// element kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    /// Integer scalar
    Int(i64),
    /// Floating-point scalar
    Float(f64),
    /// Boolean scalar
    Bool(bool),
    /// String scalar
    Str(String),
    /// Homogeneous integer sequence
    IntList(Vec<i64>),
    /// Homogeneous float sequence
    FloatList(Vec<f64>),
    /// Homogeneous string sequence
    StrList(Vec<String>),
}

impl ParamValue {
    /// Human-readable name of the runtime variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Int(_) => "int",
            ParamValue::Float(_) => "float",
            ParamValue::Bool(_) => "bool",
            ParamValue::Str(_) => "string",
            ParamValue::IntList(_) => "int list",
            ParamValue::FloatList(_) => "float list",
            ParamValue::StrList(_) => "string list",
        }
    }
}

/// Declared kind tag of a statement parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKind {
    /// Integer scalar
    Integer,
    /// Float scalar
    Float,
    /// 2D point (two floats)
    Point2,
    /// 3D point (three floats)
    Point3,
    /// 3D vector (three floats)
    Vector3,
    /// 3D surface normal (three floats)
    Normal3,
    /// Sampled spectrum (wavelength/value float pairs)
    Spectrum,
    /// RGB triple (three floats)
    Rgb,
    /// Blackbody emitter (temperature in kelvin)
    Blackbody,
    /// Boolean scalar
    Bool,
    /// String scalar
    String,
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            ParamKind::Integer => "integer",
            ParamKind::Float => "float",
            ParamKind::Point2 => "point2",
            ParamKind::Point3 => "point3",
            ParamKind::Vector3 => "vector3",
            ParamKind::Normal3 => "normal3",
            ParamKind::Spectrum => "spectrum",
            ParamKind::Rgb => "rgb",
            ParamKind::Blackbody => "blackbody",
            ParamKind::Bool => "bool",
            ParamKind::String => "string",
        };
        write!(f, "{}", name)
    }
}

/// A named, kind-tagged statement parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name
    pub name: String,
    /// Declared kind tag
    pub kind: ParamKind,
    /// Parameter value
    pub value: ParamValue,
}

impl Param {
    /// Creates a new parameter binding
    pub fn new(name: impl Into<String>, kind: ParamKind, value: ParamValue) -> Self {
        Param {
            name: name.into(),
            kind,
            value,
        }
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{} {}\" = {:?}", self.kind, self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_equality() {
        let a = Param::new("reflectance", ParamKind::Rgb, ParamValue::FloatList(vec![0.5, 0.5, 0.5]));
        let b = Param::new("reflectance", ParamKind::Rgb, ParamValue::FloatList(vec![0.5, 0.5, 0.5]));
        assert_eq!(a, b);

        let c = Param::new("reflectance", ParamKind::Spectrum, ParamValue::FloatList(vec![0.5, 0.5, 0.5]));
        assert_ne!(a, c);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ParamValue::Int(3).type_name(), "int");
        assert_eq!(ParamValue::StrList(vec![]).type_name(), "string list");
    }

    #[test]
    fn test_display() {
        let p = Param::new("L", ParamKind::Blackbody, ParamValue::Float(6500.0));
        assert_eq!(p.to_string(), "\"blackbody L\" = Float(6500.0)");
    }
}
