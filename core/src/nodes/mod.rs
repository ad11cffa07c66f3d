//! Built-in VRML97 node kinds.
//!
//! Each kind declares the interface VRML97 gives it, with the standard
//! default values. Plain `field`s go through `add_field`, which shares the
//! exposed-field registry.

mod appearance;
mod geometry;
mod grouping;
mod info;
mod sensors;
mod shape;

pub use appearance::{AppearanceNode, MaterialNode};
pub use geometry::{BoxNode, ConeNode, CylinderNode, SphereNode};
pub use grouping::{GroupNode, TransformNode};
pub use info::WorldInfoNode;
pub use sensors::TimeSensorNode;
pub use shape::ShapeNode;
