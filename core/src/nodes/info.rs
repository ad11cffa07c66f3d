use graph3d_fields::{MFString, SFString};

use crate::macros::node_variant;
use crate::node::NodeCore;

node_variant! {
    /// Title and free-form information about the world.
    pub struct WorldInfoNode => "WorldInfo", visit_world_info;
}

impl WorldInfoNode {
    pub fn new() -> Self {
        let mut core = NodeCore::new();
        core.add_field("info", MFString::default());
        core.add_field("title", SFString::default());
        Self { core }
    }
}
