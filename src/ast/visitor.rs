use glam::{DMat4, DVec3};

use super::node::Node;
use crate::param::Param;

/// Traversal protocol over parsed scene statements
///
/// One operation per concrete node form; [`Node::accept`] invokes exactly
/// the operation matching the node's own variant, so the dispatch table is
/// total over the closed statement set at compile time. Every operation
/// defaults to a no-op except [`visit_block`](Visitor::visit_block), which
/// walks its children — a visitor that cares about one statement form
/// overrides one method and still sees nodes inside blocks.
///
/// ```
/// use pbrt_parser::{SceneParser, Visitor, Node};
/// use glam::DVec3;
///
/// #[derive(Default)]
/// struct EyeCollector(Vec<DVec3>);
///
/// impl Visitor for EyeCollector {
///     fn visit_look_at(&mut self, _node: &Node, eye: DVec3, _look: DVec3, _up: DVec3) {
///         self.0.push(eye);
///     }
/// }
///
/// let output = SceneParser::from_str("LookAt 1 2 3 0 0 0 0 1 0").parse();
/// let mut collector = EyeCollector::default();
/// for node in &output.nodes {
///     node.accept(&mut collector);
/// }
/// assert_eq!(collector.0, [DVec3::new(1.0, 2.0, 3.0)]);
/// ```
#[allow(unused_variables)]
pub trait Visitor {
    /// Called for each reflectance declaration.
    fn visit_reflectance(&mut self, node: &Node, param: &Param) {}

    /// Called for each emission declaration.
    fn visit_emission(&mut self, node: &Node, param: &Param) {}

    /// Called for each translate statement.
    fn visit_translate(&mut self, node: &Node, delta: DVec3) {}

    /// Called for each scale statement.
    fn visit_scale(&mut self, node: &Node, factor: DVec3) {}

    /// Called for each rotate statement.
    fn visit_rotate(&mut self, node: &Node, angle: f64, axis: DVec3) {}

    /// Called for each look-at statement.
    fn visit_look_at(&mut self, node: &Node, eye: DVec3, look: DVec3, up: DVec3) {}

    /// Called for each coordinate-system definition.
    fn visit_coordinate_system(&mut self, node: &Node, name: &str) {}

    /// Called for each coordinate-system restore.
    fn visit_coord_sys_transform(&mut self, node: &Node, name: &str) {}

    /// Called for each transform statement.
    fn visit_transform(&mut self, node: &Node, matrix: &DMat4) {}

    /// Called for each concat-transform statement.
    fn visit_concat_transform(&mut self, node: &Node, matrix: &DMat4) {}

    /// Called for each include directive.
    fn visit_include(&mut self, node: &Node, path: &str) {}

    /// Called for each block; walks the children unless overridden.
    fn visit_block(&mut self, node: &Node, children: &[Node]) {
        for child in children {
            child.accept(self);
        }
    }
}
