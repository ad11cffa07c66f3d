//! Boilerplate for [`Field`](crate::Field) implementations.

/// Implements [`Field`](crate::Field) for a type that is `Clone`, `Debug`
/// and `Display`.
///
/// # Example
///
/// ```
/// use core::fmt;
/// use graph3d_fields::{impl_field, Field, FieldType};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Weight(f32);
///
/// impl fmt::Display for Weight {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
///
/// impl_field!(Weight => SFFloat);
///
/// assert_eq!(Weight(1.5).field_type(), FieldType::SFFloat);
/// assert_eq!(Weight(1.5).clone_field().to_string(), "1.5");
/// ```
#[macro_export]
macro_rules! impl_field {
    ($ty:ty => $kind:ident) => {
        impl $crate::Field for $ty {
            fn field_type(&self) -> $crate::FieldType {
                $crate::FieldType::$kind
            }

            fn clone_field(&self) -> $crate::shim::Box<dyn $crate::Field> {
                $crate::shim::Box::new(::core::clone::Clone::clone(self))
            }

            fn as_any(&self) -> &dyn $crate::shim::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn $crate::shim::Any {
                self
            }
        }
    };
}
