//! Multi-valued (`MF*`) fields.
//!
//! The text form lists the values between brackets, comma separated:
//! `[ 1, 2, 3 ]`. An empty list is written `[ ]`.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::impl_field;
use crate::scalar::write_quoted;
use crate::vector::SFVec3f;

/// Writes `items` in the bracketed list form shared by every `MF*` field.
pub fn write_list<I, F>(f: &mut fmt::Formatter<'_>, items: I, mut write_item: F) -> fmt::Result
where
    I: IntoIterator,
    F: FnMut(&mut fmt::Formatter<'_>, I::Item) -> fmt::Result,
{
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() {
        return f.write_str("[ ]");
    }
    f.write_str("[ ")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_item(f, item)?;
    }
    f.write_str(" ]")
}

macro_rules! multi_field {
    ($(#[$meta:meta])* $name:ident($item:ty)) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name(Vec<$item>);

        impl $name {
            pub fn new(values: impl IntoIterator<Item = $item>) -> Self {
                Self(values.into_iter().collect())
            }

            pub fn values(&self) -> &[$item] {
                &self.0
            }

            pub fn values_mut(&mut self) -> &mut Vec<$item> {
                &mut self.0
            }

            pub fn push(&mut self, value: $item) {
                self.0.push(value);
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl FromIterator<$item> for $name {
            fn from_iter<T: IntoIterator<Item = $item>>(iter: T) -> Self {
                Self::new(iter)
            }
        }

        impl_field!($name => $name);
    };
}

multi_field!(MFFloat(f32));
multi_field!(MFInt32(i32));
multi_field!(MFString(String));
multi_field!(MFVec3f(SFVec3f));

impl fmt::Display for MFFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.0, |f, v| write!(f, "{v}"))
    }
}

impl fmt::Display for MFInt32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.0, |f, v| write!(f, "{v}"))
    }
}

impl fmt::Display for MFString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.0, |f, v| write_quoted(f, v))
    }
}

impl fmt::Display for MFVec3f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.0, |f, v| write!(f, "{v}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;
    use alloc::string::ToString;
    use alloc::vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_list() {
        assert_eq!(MFFloat::default().to_string(), "[ ]");
        assert_eq!(MFString::new(vec![]).to_string(), "[ ]");
    }

    #[test]
    fn test_list_text_forms() {
        assert_eq!(MFFloat::new([0.5, 1.0]).to_string(), "[ 0.5, 1 ]");
        assert_eq!(MFInt32::new([3]).to_string(), "[ 3 ]");
        assert_eq!(
            MFString::new(["title".to_string(), "a \"b\"".to_string()]).to_string(),
            r#"[ "title", "a \"b\"" ]"#
        );
        assert_eq!(
            MFVec3f::new([SFVec3f::new(0.0, 1.0, 0.0), SFVec3f::new(1.0, 1.0, 1.0)]).to_string(),
            "[ 0 1 0, 1 1 1 ]"
        );
    }

    #[test]
    fn test_clone_copies_the_list() {
        let mut original: MFInt32 = (1..=3).collect();
        let copy = original.clone_field();
        original.push(4);
        original.values_mut()[0] = 10;

        assert_eq!(original.values(), &[10, 2, 3, 4]);
        assert_eq!(copy.downcast_ref::<MFInt32>().map(MFInt32::values), Some(&[1, 2, 3][..]));
        assert_eq!(copy.field_type(), crate::FieldType::MFInt32);
    }
}
