use graph3d_fields::{SFColor, SFFloat};

use crate::macros::node_variant;
use crate::node::NodeCore;
use crate::node_fields::SFNode;

node_variant! {
    pub struct AppearanceNode => "Appearance", visit_appearance;
}

impl AppearanceNode {
    pub fn new() -> Self {
        let mut core = NodeCore::new();
        core.add_exposed_field("material", SFNode::null());
        core.add_exposed_field("texture", SFNode::null());
        core.add_exposed_field("textureTransform", SFNode::null());
        Self { core }
    }

    pub fn with_material(material: MaterialNode) -> Self {
        let mut appearance = Self::new();
        appearance
            .core
            .add_exposed_field("material", SFNode::new(material));
        appearance
    }
}

node_variant! {
    /// Surface material properties used for lighting.
    pub struct MaterialNode => "Material", visit_material;
}

impl MaterialNode {
    pub fn new() -> Self {
        let mut core = NodeCore::new();
        core.add_exposed_field("ambientIntensity", SFFloat::new(0.2));
        core.add_exposed_field("diffuseColor", SFColor::new(0.8, 0.8, 0.8));
        core.add_exposed_field("emissiveColor", SFColor::new(0.0, 0.0, 0.0));
        core.add_exposed_field("shininess", SFFloat::new(0.2));
        core.add_exposed_field("specularColor", SFColor::new(0.0, 0.0, 0.0));
        core.add_exposed_field("transparency", SFFloat::new(0.0));
        Self { core }
    }
}
