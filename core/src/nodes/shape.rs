use crate::macros::node_variant;
use crate::node::{Node, NodeCore};
use crate::node_fields::SFNode;

node_variant! {
    /// Pairs a geometry node with the appearance it is drawn with.
    pub struct ShapeNode => "Shape", visit_shape;
}

impl ShapeNode {
    pub fn new() -> Self {
        let mut core = NodeCore::new();
        core.add_exposed_field("appearance", SFNode::null());
        core.add_exposed_field("geometry", SFNode::null());
        Self { core }
    }

    pub fn with_geometry(geometry: impl Node) -> Self {
        let mut shape = Self::new();
        shape.core.add_exposed_field("geometry", SFNode::new(geometry));
        shape
    }
}
