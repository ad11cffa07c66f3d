use graph3d_fields::{SFRotation, SFVec3f};

use crate::macros::node_variant;
use crate::node::NodeCore;
use crate::node_fields::MFNode;

node_variant! {
    pub struct GroupNode => "Group", visit_group;
}

impl GroupNode {
    pub fn new() -> Self {
        Self::with_children(MFNode::default())
    }

    pub fn with_children(children: MFNode) -> Self {
        let mut core = NodeCore::new();
        core.add_event_in("addChildren", MFNode::default());
        core.add_event_in("removeChildren", MFNode::default());
        core.add_exposed_field("children", children);
        core.add_field("bboxCenter", SFVec3f::new(0.0, 0.0, 0.0));
        core.add_field("bboxSize", SFVec3f::new(-1.0, -1.0, -1.0));
        Self { core }
    }
}

node_variant! {
    /// Grouping node that places its children in a new coordinate system.
    pub struct TransformNode => "Transform", visit_transform;
}

impl TransformNode {
    pub fn new() -> Self {
        Self::with_children(MFNode::default())
    }

    pub fn with_children(children: MFNode) -> Self {
        let mut core = NodeCore::new();
        core.add_event_in("addChildren", MFNode::default());
        core.add_event_in("removeChildren", MFNode::default());
        core.add_exposed_field("center", SFVec3f::new(0.0, 0.0, 0.0));
        core.add_exposed_field("children", children);
        core.add_exposed_field("rotation", SFRotation::default());
        core.add_exposed_field("scale", SFVec3f::new(1.0, 1.0, 1.0));
        core.add_exposed_field("scaleOrientation", SFRotation::default());
        core.add_exposed_field("translation", SFVec3f::new(0.0, 0.0, 0.0));
        core.add_field("bboxCenter", SFVec3f::new(0.0, 0.0, 0.0));
        core.add_field("bboxSize", SFVec3f::new(-1.0, -1.0, -1.0));
        Self { core }
    }
}
