//! Integration tests for the visitor protocol

use glam::{DMat4, DVec3};
use pbrt_parser::{Node, NodeTag, Param, SceneParser, Visitor};

/// Collects the eye position of every look-at statement it sees.
#[derive(Default)]
struct EyeCollector {
    eyes: Vec<DVec3>,
}

impl Visitor for EyeCollector {
    fn visit_look_at(&mut self, _node: &Node, eye: DVec3, _look: DVec3, _up: DVec3) {
        self.eyes.push(eye);
    }
}

#[test]
fn test_collect_eyes_in_source_order() {
    let output = SceneParser::from_str(
        "LookAt 1 2 3 0 0 0 0 1 0\nTranslate 9 9 9\nLookAt 4 5 6 0 0 0 0 1 0",
    )
    .parse();
    assert!(output.is_complete());

    let mut collector = EyeCollector::default();
    for node in &output.nodes {
        node.accept(&mut collector);
    }

    assert_eq!(
        collector.eyes,
        [DVec3::new(1.0, 2.0, 3.0), DVec3::new(4.0, 5.0, 6.0)]
    );
}

#[test]
fn test_default_block_walk_reaches_nested_statements() {
    let output = SceneParser::from_str(
        "LookAt 1 1 1 0 0 0 0 1 0 AttributeBegin LookAt 2 2 2 0 0 0 0 1 0 AttributeEnd",
    )
    .parse();
    assert!(output.is_complete());

    let mut collector = EyeCollector::default();
    for node in &output.nodes {
        node.accept(&mut collector);
    }

    assert_eq!(collector.eyes, [DVec3::splat(1.0), DVec3::splat(2.0)]);
}

/// Counts every node it visits, grouped by tag.
#[derive(Default)]
struct TagCounter {
    tags: Vec<NodeTag>,
}

impl Visitor for TagCounter {
    fn visit_reflectance(&mut self, node: &Node, _param: &Param) {
        self.tags.push(node.tag());
    }

    fn visit_translate(&mut self, node: &Node, _delta: DVec3) {
        self.tags.push(node.tag());
    }

    fn visit_transform(&mut self, node: &Node, _matrix: &DMat4) {
        self.tags.push(node.tag());
    }

    fn visit_block(&mut self, node: &Node, children: &[Node]) {
        self.tags.push(node.tag());
        for child in children {
            child.accept(self);
        }
    }
}

#[test]
fn test_overridden_block_visit_still_controls_recursion() {
    let output = SceneParser::from_str(
        "AttributeBegin Translate 0 0 1 Reflectance .1 .2 .3 AttributeEnd Transform 1 0 0 0 0 1 0 0 0 0 1 0 0 0 0 1",
    )
    .parse();
    assert!(output.is_complete());

    let mut counter = TagCounter::default();
    for node in &output.nodes {
        node.accept(&mut counter);
    }

    assert_eq!(
        counter.tags,
        [
            NodeTag::Block,
            NodeTag::Translate,
            NodeTag::Reflectance,
            NodeTag::Transform,
        ]
    );
}
