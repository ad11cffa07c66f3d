//! Name-keyed, insertion-ordered storage for a node's field slots.

use std::fmt;

use graph3d_fields::Field;
use hashbrown::HashMap;
use tracing::{debug, trace};

use crate::error::NodeError;

/// The three kinds of slots a node declares.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldCategory {
    ExposedField,
    EventIn,
    EventOut,
}

impl FieldCategory {
    /// Error reported when `name` is absent from a registry of this category.
    pub fn missing(self, name: &str, node_type: &'static str) -> NodeError {
        let name = name.to_owned();
        match self {
            FieldCategory::ExposedField => NodeError::MissingExposedField { name, node_type },
            FieldCategory::EventIn => NodeError::MissingEventIn { name, node_type },
            FieldCategory::EventOut => NodeError::MissingEventOut { name, node_type },
        }
    }
}

impl fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldCategory::ExposedField => "exposedField",
            FieldCategory::EventIn => "eventIn",
            FieldCategory::EventOut => "eventOut",
        })
    }
}

/// Field slots of one category.
///
/// Entries live in a vector so iteration follows insertion order; `index`
/// maps each name to its position for constant-time lookup. Registering an
/// existing name replaces the field in place and keeps its position.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    category: FieldCategory,
    entries: Vec<(String, Box<dyn Field>)>,
    index: HashMap<String, usize>,
}

impl FieldRegistry {
    pub fn new(category: FieldCategory) -> Self {
        Self {
            category,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn category(&self) -> FieldCategory {
        self.category
    }

    /// Inserts `field` under `name`, returning the field it replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        field: Box<dyn Field>,
    ) -> Option<Box<dyn Field>> {
        let name = name.into();
        if let Some(&slot) = self.index.get(&name) {
            debug!(category = %self.category, field = %name, "overwriting registered field");
            return Some(std::mem::replace(&mut self.entries[slot].1, field));
        }
        trace!(category = %self.category, field = %name, ty = %field.field_type(), "registering field");
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, field));
        None
    }

    pub fn get(&self, name: &str) -> Option<&dyn Field> {
        let &slot = self.index.get(name)?;
        Some(self.entries[slot].1.as_ref())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut dyn Field> {
        let &slot = self.index.get(name)?;
        Some(self.entries[slot].1.as_mut())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<'a> IntoIterator for &'a FieldRegistry {
    type Item = (&'a str, &'a dyn Field);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Read-only iterator over a registry's `(name, field)` pairs.
#[derive(Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, Box<dyn Field>)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a dyn Field);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, field)| (name.as_str(), field.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Read-only view of a node's exposed fields, as returned by
/// [`Node::all_fields`](crate::Node::all_fields).
///
/// The view borrows the node, so the registry cannot change while it is
/// alive. Use [`Fields::to_vec`] for an owned snapshot.
#[derive(Clone, Copy)]
pub struct Fields<'a> {
    registry: &'a FieldRegistry,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(registry: &'a FieldRegistry) -> Self {
        Self { registry }
    }

    pub fn get(&self, name: &str) -> Option<&'a dyn Field> {
        self.registry.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn iter(&self) -> Iter<'a> {
        self.registry.iter()
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &'a str> + 'a {
        self.registry.names()
    }

    /// Owned copy of every `(name, field)` pair, fields deep-cloned.
    pub fn to_vec(&self) -> Vec<(String, Box<dyn Field>)> {
        self.iter()
            .map(|(name, field)| (name.to_owned(), field.clone_field()))
            .collect()
    }
}

impl<'a> IntoIterator for Fields<'a> {
    type Item = (&'a str, &'a dyn Field);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Fields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph3d_fields::{SFBool, SFFloat, SFVec3f};
    use pretty_assertions::assert_eq;

    fn registry() -> FieldRegistry {
        let mut reg = FieldRegistry::new(FieldCategory::ExposedField);
        reg.register("size", Box::new(SFVec3f::new(2.0, 2.0, 2.0)));
        reg.register("solid", Box::new(SFBool::new(true)));
        reg.register("creaseAngle", Box::new(SFFloat::new(0.0)));
        reg
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let reg = registry();
        let names: Vec<_> = reg.names().collect();
        assert_eq!(names, ["size", "solid", "creaseAngle"]);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut reg = registry();
        let previous = reg.register("solid", Box::new(SFBool::new(false)));

        assert_eq!(previous.map(|f| f.to_string()), Some("TRUE".to_string()));
        assert_eq!(reg.len(), 3);
        let entries: Vec<_> = reg
            .iter()
            .map(|(name, field)| format!("{name}={field}"))
            .collect();
        assert_eq!(entries, ["size=2 2 2", "solid=FALSE", "creaseAngle=0"]);
    }

    #[test]
    fn test_lookup() {
        let mut reg = registry();
        assert!(reg.contains("size"));
        assert!(reg.get("color").is_none());
        assert!(reg.get_mut("color").is_none());

        if let Some(radius) = reg
            .get_mut("creaseAngle")
            .and_then(|f| f.downcast_mut::<SFFloat>())
        {
            radius.set_value(0.5);
        }
        assert_eq!(
            reg.get("creaseAngle")
                .and_then(|f| f.downcast_ref::<SFFloat>())
                .map(SFFloat::value),
            Some(0.5)
        );
    }

    #[test]
    fn test_clone_is_deep() {
        let original = registry();
        let mut copy = original.clone();
        if let Some(size) = copy.get_mut("size").and_then(|f| f.downcast_mut::<SFVec3f>()) {
            size.x = 10.0;
        }

        assert_eq!(original.get("size").map(|f| f.to_string()), Some("2 2 2".into()));
        assert_eq!(copy.get("size").map(|f| f.to_string()), Some("10 2 2".into()));
        assert_eq!(copy.category(), FieldCategory::ExposedField);
    }

    #[test]
    fn test_missing_maps_to_category_error() {
        assert_eq!(
            FieldCategory::EventOut.missing("time", "Box").to_string(),
            "'time' event out field doesn't exist in node of Box type"
        );
    }

    #[test]
    fn test_fields_view_snapshot() {
        let reg = registry();
        let view = Fields::new(&reg);
        let snapshot = view.to_vec();

        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].0, "size");
        assert_eq!(format!("{view:?}"), "{\"size\": SFVec3f { x: 2.0, y: 2.0, z: 2.0 }, \"solid\": SFBool(true), \"creaseAngle\": SFFloat(0.0)}");
    }
}
