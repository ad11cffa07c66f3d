use graph3d_fields::{SFBool, SFFloat, SFTime};

use crate::macros::node_variant;
use crate::node::NodeCore;

node_variant! {
    /// Clock that generates time events while enabled.
    pub struct TimeSensorNode => "TimeSensor", visit_time_sensor;
}

impl TimeSensorNode {
    pub fn new() -> Self {
        let mut core = NodeCore::new();
        core.add_exposed_field("cycleInterval", SFTime::new(1.0));
        core.add_exposed_field("enabled", SFBool::new(true));
        core.add_exposed_field("loop", SFBool::new(false));
        core.add_exposed_field("startTime", SFTime::new(0.0));
        core.add_exposed_field("stopTime", SFTime::new(0.0));
        core.add_event_out("cycleTime", SFTime::default());
        core.add_event_out("fraction_changed", SFFloat::default());
        core.add_event_out("isActive", SFBool::default());
        core.add_event_out("time", SFTime::default());
        Self { core }
    }
}
