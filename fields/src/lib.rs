//! Field values for the Graph3D scene object model.
//!
//! A [`Field`] is the value held in a named slot of a scene node. Nodes
//! only rely on two capabilities: cloning a field into an independent copy
//! and rendering its current value as text. Everything else (the concrete
//! representation, mutation) belongs to the field type itself.
//!
//! # Example
//!
//! ```
//! use graph3d_fields::{Field, FieldType, SFVec3f};
//!
//! let size = SFVec3f::new(2.0, 2.0, 2.0);
//! let copy = size.clone_field();
//!
//! assert_eq!(copy.field_type(), FieldType::SFVec3f);
//! assert_eq!(copy.to_string(), "2 2 2");
//! assert_eq!(copy.downcast_ref::<SFVec3f>(), Some(&size));
//! ```

#![no_std]
extern crate alloc;

// Symbols the exported macros refer to, so they work from any crate.
#[doc(hidden)]
pub mod shim {
    pub use alloc::boxed::Box;
    pub use core::any::Any;
}

mod macros;

pub mod field;
pub mod multi;
pub mod scalar;
pub mod vector;

pub use field::{Field, FieldType};
pub use multi::{MFFloat, MFInt32, MFString, MFVec3f};
pub use scalar::{SFBool, SFFloat, SFInt32, SFString, SFTime};
pub use vector::{SFColor, SFRotation, SFVec2f, SFVec3f};
