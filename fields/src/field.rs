use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

/// A value slot held by a scene node.
///
/// Implementors must be able to produce an independent deep copy of
/// themselves and render their current value through [`fmt::Display`].
/// The `as_any` pair exists so callers that know the concrete type can get
/// back to it through `downcast_ref`/`downcast_mut` on `dyn Field`.
///
/// Most implementations come from the [`impl_field!`](crate::impl_field) macro.
pub trait Field: Any + fmt::Debug + fmt::Display + 'static {
    /// The VRML type of the value held.
    fn field_type(&self) -> FieldType;

    /// Deep copy of this field. The copy never aliases `self`.
    fn clone_field(&self) -> Box<dyn Field>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl dyn Field {
    /// Returns `true` if the field is of type `T`.
    pub fn is<T: Field>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Field>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Field>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

impl Clone for Box<dyn Field> {
    fn clone(&self) -> Self {
        self.clone_field()
    }
}

static_assertions::assert_obj_safe!(Field);

/// VRML97 field types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldType {
    SFBool,
    SFInt32,
    SFFloat,
    SFTime,
    SFString,
    SFVec2f,
    SFVec3f,
    SFColor,
    SFRotation,
    SFNode,
    MFFloat,
    MFInt32,
    MFString,
    MFVec3f,
    MFNode,
}

impl FieldType {
    /// Name as spelled in VRML source.
    pub fn name(self) -> &'static str {
        match self {
            FieldType::SFBool => "SFBool",
            FieldType::SFInt32 => "SFInt32",
            FieldType::SFFloat => "SFFloat",
            FieldType::SFTime => "SFTime",
            FieldType::SFString => "SFString",
            FieldType::SFVec2f => "SFVec2f",
            FieldType::SFVec3f => "SFVec3f",
            FieldType::SFColor => "SFColor",
            FieldType::SFRotation => "SFRotation",
            FieldType::SFNode => "SFNode",
            FieldType::MFFloat => "MFFloat",
            FieldType::MFInt32 => "MFInt32",
            FieldType::MFString => "MFString",
            FieldType::MFVec3f => "MFVec3f",
            FieldType::MFNode => "MFNode",
        }
    }

    /// Multi-valued (`MF*`) types hold a list of values.
    pub fn is_multi(self) -> bool {
        matches!(
            self,
            FieldType::MFFloat
                | FieldType::MFInt32
                | FieldType::MFString
                | FieldType::MFVec3f
                | FieldType::MFNode
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MFString, SFBool, SFFloat};
    use alloc::string::ToString;

    #[test]
    fn test_downcast_matches_concrete_type() {
        let field: Box<dyn Field> = Box::new(SFFloat::new(0.5));
        assert!(field.is::<SFFloat>());
        assert!(!field.is::<SFBool>());
        assert_eq!(field.downcast_ref::<SFFloat>().map(|f| f.value()), Some(0.5));
        assert!(field.downcast_ref::<SFBool>().is_none());
    }

    #[test]
    fn test_boxed_clone_is_independent() {
        let mut original: Box<dyn Field> = Box::new(SFBool::new(true));
        let copy = original.clone();

        if let Some(flag) = original.downcast_mut::<SFBool>() {
            flag.set_value(false);
        }

        assert_eq!(original.to_string(), "FALSE");
        assert_eq!(copy.to_string(), "TRUE");
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::SFRotation.to_string(), "SFRotation");
        assert_eq!(FieldType::MFNode.name(), "MFNode");
        assert!(FieldType::MFString.is_multi());
        assert!(!FieldType::SFString.is_multi());
        assert_eq!(MFString::default().field_type(), FieldType::MFString);
    }
}
