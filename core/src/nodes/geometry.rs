use graph3d_fields::{SFBool, SFFloat, SFVec3f};

use crate::macros::node_variant;
use crate::node::NodeCore;

node_variant! {
    /// Axis-aligned box centred at the origin.
    pub struct BoxNode => "Box", visit_box;
}

impl BoxNode {
    pub fn new() -> Self {
        let mut core = NodeCore::new();
        core.add_field("size", SFVec3f::new(2.0, 2.0, 2.0));
        Self { core }
    }
}

node_variant! {
    pub struct ConeNode => "Cone", visit_cone;
}

impl ConeNode {
    pub fn new() -> Self {
        let mut core = NodeCore::new();
        core.add_field("bottomRadius", SFFloat::new(1.0));
        core.add_field("height", SFFloat::new(2.0));
        core.add_field("side", SFBool::new(true));
        core.add_field("bottom", SFBool::new(true));
        Self { core }
    }
}

node_variant! {
    pub struct CylinderNode => "Cylinder", visit_cylinder;
}

impl CylinderNode {
    pub fn new() -> Self {
        let mut core = NodeCore::new();
        core.add_field("bottom", SFBool::new(true));
        core.add_field("height", SFFloat::new(2.0));
        core.add_field("radius", SFFloat::new(1.0));
        core.add_field("side", SFBool::new(true));
        core.add_field("top", SFBool::new(true));
        Self { core }
    }
}

node_variant! {
    pub struct SphereNode => "Sphere", visit_sphere;
}

impl SphereNode {
    pub fn new() -> Self {
        let mut core = NodeCore::new();
        core.add_field("radius", SFFloat::new(1.0));
        Self { core }
    }

    pub fn with_radius(radius: f32) -> Self {
        let mut sphere = Self::new();
        sphere.core.add_field("radius", SFFloat::new(radius));
        sphere
    }
}
