//! Vector-like single-valued fields. Components are written space separated.

use core::fmt;

use crate::impl_field;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SFVec2f {
    pub x: f32,
    pub y: f32,
}

impl SFVec2f {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for SFVec2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

impl_field!(SFVec2f => SFVec2f);

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SFVec3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl SFVec3f {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for SFVec3f {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for SFVec3f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

impl_field!(SFVec3f => SFVec3f);

/// RGB color, each component in `0.0..=1.0`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SFColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl SFColor {
    pub fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for SFColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.red, self.green, self.blue)
    }
}

impl_field!(SFColor => SFColor);

/// Rotation of `angle` radians around the `(x, y, z)` axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SFRotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub angle: f32,
}

impl SFRotation {
    pub fn new(x: f32, y: f32, z: f32, angle: f32) -> Self {
        Self { x, y, z, angle }
    }
}

// VRML97 default: no rotation around +Z.
impl Default for SFRotation {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }
}

impl fmt::Display for SFRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.z, self.angle)
    }
}

impl_field!(SFRotation => SFRotation);
