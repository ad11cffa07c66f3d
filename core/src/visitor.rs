use crate::node::Node;
use crate::node_fields::children;
use crate::nodes::{
    AppearanceNode, BoxNode, ConeNode, CylinderNode, GroupNode, MaterialNode, ShapeNode,
    SphereNode, TimeSensorNode, TransformNode, WorldInfoNode,
};

/// One entry point per node kind; [`Node::accept`] calls the matching one.
/// Kinds declared elsewhere dispatch to [`NodeVisitor::visit_other`].
///
/// Every method defaults to doing nothing, so a visitor only overrides the
/// kinds it cares about. Visiting does not descend into children on its
/// own: call [`walk`] from a method to continue into a node's children.
pub trait NodeVisitor {
    fn visit_appearance(&mut self, _node: &AppearanceNode) {}

    fn visit_box(&mut self, _node: &BoxNode) {}

    fn visit_cone(&mut self, _node: &ConeNode) {}

    fn visit_cylinder(&mut self, _node: &CylinderNode) {}

    fn visit_group(&mut self, _node: &GroupNode) {}

    fn visit_material(&mut self, _node: &MaterialNode) {}

    fn visit_shape(&mut self, _node: &ShapeNode) {}

    fn visit_sphere(&mut self, _node: &SphereNode) {}

    fn visit_time_sensor(&mut self, _node: &TimeSensorNode) {}

    fn visit_transform(&mut self, _node: &TransformNode) {}

    fn visit_world_info(&mut self, _node: &WorldInfoNode) {}

    /// Entry point for kinds defined outside this crate, which have no
    /// method of their own.
    fn visit_other(&mut self, _node: &dyn Node) {}
}

/// Visits every child of `node` (the nodes held in its `SFNode` and
/// `MFNode` exposed fields), in declaration order.
pub fn walk(node: &dyn Node, visitor: &mut dyn NodeVisitor) {
    for child in children(node) {
        child.accept(visitor);
    }
}

static_assertions::assert_obj_safe!(NodeVisitor);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node_fields::{MFNode, SFNode};
    use crate::NodeExt;
    use pretty_assertions::assert_eq;

    /// Records the kind of every node reached, descending through groups.
    #[derive(Default)]
    struct KindLog {
        kinds: Vec<&'static str>,
    }

    impl NodeVisitor for KindLog {
        fn visit_box(&mut self, node: &BoxNode) {
            self.kinds.push(node.type_name());
        }

        fn visit_sphere(&mut self, node: &SphereNode) {
            self.kinds.push(node.type_name());
        }

        fn visit_group(&mut self, node: &GroupNode) {
            self.kinds.push(node.type_name());
            walk(node, self);
        }

        fn visit_shape(&mut self, node: &ShapeNode) {
            self.kinds.push(node.type_name());
            walk(node, self);
        }
    }

    fn shape_with(geometry: impl Node) -> ShapeNode {
        let mut shape = ShapeNode::new();
        if let Ok(slot) = shape.exposed_field_as_mut::<SFNode>("geometry") {
            *slot = SFNode::new(geometry);
        }
        shape
    }

    #[test]
    fn test_accept_dispatches_by_kind() {
        let mut log = KindLog::default();
        BoxNode::new().accept(&mut log);
        SphereNode::new().accept(&mut log);
        // No override for Cone: default is a no-op.
        ConeNode::new().accept(&mut log);

        assert_eq!(log.kinds, ["Box", "Sphere"]);
    }

    #[test]
    fn test_walk_descends_in_declaration_order() {
        let mut inner = GroupNode::new();
        if let Ok(children) = inner.exposed_field_as_mut::<MFNode>("children") {
            children.push(shape_with(SphereNode::new()));
        }

        let mut root = GroupNode::new();
        if let Ok(children) = root.exposed_field_as_mut::<MFNode>("children") {
            children.push(shape_with(BoxNode::new()));
            children.push(inner);
        }

        let mut log = KindLog::default();
        root.accept(&mut log);

        assert_eq!(
            log.kinds,
            ["Group", "Shape", "Box", "Group", "Shape", "Sphere"]
        );
    }

    #[test]
    fn test_walk_skips_empty_slots() {
        let mut log = KindLog::default();
        ShapeNode::new().accept(&mut log);
        assert_eq!(log.kinds, ["Shape"]);
    }
}
