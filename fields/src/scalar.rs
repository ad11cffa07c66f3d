//! Single-valued scalar fields.

use alloc::string::String;
use core::fmt;

use crate::impl_field;

/// `SFBool`, written `TRUE`/`FALSE`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SFBool(bool);

impl SFBool {
    pub fn new(value: bool) -> Self {
        Self(value)
    }

    pub fn value(&self) -> bool {
        self.0
    }

    pub fn set_value(&mut self, value: bool) {
        self.0 = value;
    }
}

impl fmt::Display for SFBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "TRUE" } else { "FALSE" })
    }
}

impl_field!(SFBool => SFBool);

/// `SFInt32`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SFInt32(i32);

impl SFInt32 {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn set_value(&mut self, value: i32) {
        self.0 = value;
    }
}

impl fmt::Display for SFInt32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl_field!(SFInt32 => SFInt32);

/// `SFFloat`, single precision as in VRML97.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SFFloat(f32);

impl SFFloat {
    pub fn new(value: f32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn set_value(&mut self, value: f32) {
        self.0 = value;
    }
}

impl fmt::Display for SFFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl_field!(SFFloat => SFFloat);

/// `SFTime`: seconds since 1970-01-01 00:00:00 GMT, double precision.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SFTime(f64);

impl SFTime {
    pub fn new(seconds: f64) -> Self {
        Self(seconds)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn set_value(&mut self, seconds: f64) {
        self.0 = seconds;
    }
}

impl fmt::Display for SFTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl_field!(SFTime => SFTime);

/// `SFString`. The text form is quoted, with `"` and `\` escaped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SFString(String);

impl SFString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.0 = value.into();
    }
}

impl fmt::Display for SFString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted(f, &self.0)
    }
}

impl_field!(SFString => SFString);

pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            c => fmt::Write::write_char(f, c)?,
        }
    }
    f.write_str("\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bool_text_form() {
        assert_eq!(SFBool::new(true).to_string(), "TRUE");
        assert_eq!(SFBool::default().to_string(), "FALSE");
    }

    #[test]
    fn test_numbers_use_shortest_form() {
        assert_eq!(SFFloat::new(2.0).to_string(), "2");
        assert_eq!(SFFloat::new(0.8).to_string(), "0.8");
        assert_eq!(SFInt32::new(-7).to_string(), "-7");
        assert_eq!(SFTime::new(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_string_is_quoted_and_escaped() {
        let s = SFString::new(r#"say "hi" \o/"#);
        assert_eq!(s.to_string(), r#""say \"hi\" \\o/""#);
        assert_eq!(SFString::default().to_string(), r#""""#);
    }

    #[test]
    fn test_set_value_does_not_touch_clone() {
        let mut original = SFString::new("first");
        let copy = original.clone_field();
        original.set_value("second");

        assert_eq!(original.value(), "second");
        assert_eq!(copy.downcast_ref::<SFString>().map(SFString::value), Some("first"));
    }
}
