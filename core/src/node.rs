//! The [`Node`] trait shared by every scene node kind, and the per-node
//! state ([`NodeCore`]) it is built on.

use std::any::type_name;
use std::fmt;

use graph3d_fields::Field;
use tracing::debug;

use crate::error::{NodeError, NodeResult};
use crate::registry::{FieldCategory, FieldRegistry, Fields};
use crate::visitor::NodeVisitor;

/// Handle of a node inside a [`SceneGraph`](crate::SceneGraph).
///
/// Nodes store their parent as a `NodeId`, never as an owning pointer, so
/// parent and child never keep each other alive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// State common to all node kinds: the optional `DEF` name, the parent
/// back-reference and the three field registries.
///
/// A node kind's constructor declares its interface through the `add_*`
/// methods. The registries are read-only to everyone else; field values
/// change through the fields' own API.
#[derive(Debug)]
pub struct NodeCore {
    name: Option<String>,
    parent: Option<NodeId>,
    exposed_fields: FieldRegistry,
    event_ins: FieldRegistry,
    event_outs: FieldRegistry,
}

impl NodeCore {
    pub fn new() -> Self {
        Self {
            name: None,
            parent: None,
            exposed_fields: FieldRegistry::new(FieldCategory::ExposedField),
            event_ins: FieldRegistry::new(FieldCategory::EventIn),
            event_outs: FieldRegistry::new(FieldCategory::EventOut),
        }
    }

    /// Declares a plain `field`.
    ///
    /// Plain fields share the exposed-field registry, so they are reachable
    /// through both [`Node::field`] and [`Node::exposed_field`].
    pub fn add_field(&mut self, name: impl Into<String>, field: impl Field) {
        self.exposed_fields.register(name, Box::new(field));
    }

    pub fn add_exposed_field(&mut self, name: impl Into<String>, field: impl Field) {
        self.exposed_fields.register(name, Box::new(field));
    }

    pub fn add_event_in(&mut self, name: impl Into<String>, field: impl Field) {
        self.event_ins.register(name, Box::new(field));
    }

    pub fn add_event_out(&mut self, name: impl Into<String>, field: impl Field) {
        self.event_outs.register(name, Box::new(field));
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    pub fn exposed_fields(&self) -> &FieldRegistry {
        &self.exposed_fields
    }

    pub fn event_ins(&self) -> &FieldRegistry {
        &self.event_ins
    }

    pub fn event_outs(&self) -> &FieldRegistry {
        &self.event_outs
    }

    pub fn registry(&self, category: FieldCategory) -> &FieldRegistry {
        match category {
            FieldCategory::ExposedField => &self.exposed_fields,
            FieldCategory::EventIn => &self.event_ins,
            FieldCategory::EventOut => &self.event_outs,
        }
    }

    fn registry_mut(&mut self, category: FieldCategory) -> &mut FieldRegistry {
        match category {
            FieldCategory::ExposedField => &mut self.exposed_fields,
            FieldCategory::EventIn => &mut self.event_ins,
            FieldCategory::EventOut => &mut self.event_outs,
        }
    }

    /// Replaces `target`'s registries with deep copies of ours and copies
    /// the name. `target`'s parent is cleared.
    fn copy_detached_into(&self, target: &mut NodeCore) {
        target.exposed_fields = self.exposed_fields.clone();
        target.event_ins = self.event_ins.clone();
        target.event_outs = self.event_outs.clone();
        target.name = self.name.clone();
        target.parent = None;
    }
}

impl Default for NodeCore {
    fn default() -> Self {
        Self::new()
    }
}

/// A scene node.
///
/// Node kinds implement the five required methods; everything else is
/// provided. [`NodeCore`] holds the state those methods work on.
pub trait Node: fmt::Debug + 'static {
    /// Kind name as written in VRML source, e.g. `"Transform"`.
    fn type_name(&self) -> &'static str;

    fn core(&self) -> &NodeCore;

    fn core_mut(&mut self) -> &mut NodeCore;

    /// A new instance of the same kind, with its default interface.
    fn create_blank(&self) -> Box<dyn Node>;

    /// Calls the `visitor` method for this node's kind.
    fn accept(&self, visitor: &mut dyn NodeVisitor);

    fn name(&self) -> Option<&str> {
        self.core().name()
    }

    fn set_name(&mut self, name: Option<String>) {
        self.core_mut().set_name(name);
    }

    fn parent(&self) -> Option<NodeId> {
        self.core().parent()
    }

    fn set_parent(&mut self, parent: Option<NodeId>) {
        self.core_mut().set_parent(parent);
    }

    fn exposed_field(&self, name: &str) -> NodeResult<&dyn Field> {
        lookup(self.core(), FieldCategory::ExposedField, name, self.type_name())
    }

    /// Same registry as [`Node::exposed_field`]; only the error wording
    /// differs.
    fn field(&self, name: &str) -> NodeResult<&dyn Field> {
        self.core()
            .exposed_fields()
            .get(name)
            .ok_or_else(|| NodeError::MissingField {
                name: name.to_owned(),
                node_type: self.type_name(),
            })
    }

    fn event_in(&self, name: &str) -> NodeResult<&dyn Field> {
        lookup(self.core(), FieldCategory::EventIn, name, self.type_name())
    }

    fn event_out(&self, name: &str) -> NodeResult<&dyn Field> {
        lookup(self.core(), FieldCategory::EventOut, name, self.type_name())
    }

    fn exposed_field_mut(&mut self, name: &str) -> NodeResult<&mut dyn Field> {
        let node_type = self.type_name();
        lookup_mut(self.core_mut(), FieldCategory::ExposedField, name, node_type)
    }

    fn event_in_mut(&mut self, name: &str) -> NodeResult<&mut dyn Field> {
        let node_type = self.type_name();
        lookup_mut(self.core_mut(), FieldCategory::EventIn, name, node_type)
    }

    fn event_out_mut(&mut self, name: &str) -> NodeResult<&mut dyn Field> {
        let node_type = self.type_name();
        lookup_mut(self.core_mut(), FieldCategory::EventOut, name, node_type)
    }

    /// Read-only view of the exposed fields (event-ins and event-outs are
    /// not included).
    fn all_fields(&self) -> Fields<'_> {
        Fields::new(self.core().exposed_fields())
    }

    /// Deep copy of this node: same kind, same name, every field cloned.
    /// The copy has no parent.
    fn clone_node(&self) -> Box<dyn Node> {
        let mut clone = self.create_blank();
        self.core().copy_detached_into(clone.core_mut());
        debug!(
            node = self.type_name(),
            exposed = self.core().exposed_fields().len(),
            event_ins = self.core().event_ins().len(),
            event_outs = self.core().event_outs().len(),
            "cloned node"
        );
        clone
    }
}

fn lookup<'a>(
    core: &'a NodeCore,
    category: FieldCategory,
    name: &str,
    node_type: &'static str,
) -> NodeResult<&'a dyn Field> {
    core.registry(category)
        .get(name)
        .ok_or_else(|| category.missing(name, node_type))
}

fn lookup_mut<'a>(
    core: &'a mut NodeCore,
    category: FieldCategory,
    name: &str,
    node_type: &'static str,
) -> NodeResult<&'a mut dyn Field> {
    core.registry_mut(category)
        .get_mut(name)
        .ok_or_else(|| category.missing(name, node_type))
}

/// Typed field access, available on every [`Node`] including `dyn Node`.
pub trait NodeExt: Node {
    /// The exposed field `name`, downcast to `T`.
    fn exposed_field_as<T: Field>(&self, name: &str) -> NodeResult<&T> {
        let field = self.exposed_field(name)?;
        field
            .downcast_ref::<T>()
            .ok_or_else(|| mismatch::<T>(name, self.type_name(), field))
    }

    fn exposed_field_as_mut<T: Field>(&mut self, name: &str) -> NodeResult<&mut T> {
        let node_type = self.type_name();
        let field = self.exposed_field_mut(name)?;
        let found = field.field_type();
        field
            .downcast_mut::<T>()
            .ok_or_else(|| NodeError::FieldTypeMismatch {
                name: name.to_owned(),
                node_type,
                expected: short_type_name::<T>(),
                found,
            })
    }
}

impl<N: Node + ?Sized> NodeExt for N {}

fn mismatch<T: Field>(name: &str, node_type: &'static str, field: &dyn Field) -> NodeError {
    NodeError::FieldTypeMismatch {
        name: name.to_owned(),
        node_type,
        expected: short_type_name::<T>(),
        found: field.field_type(),
    }
}

fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

impl Clone for Box<dyn Node> {
    fn clone(&self) -> Self {
        self.clone_node()
    }
}

static_assertions::assert_obj_safe!(Node);

/// Writes the diagnostic text form of `node`:
///
/// ```text
/// <Kind>: {
/// <name>: <value>, \r\n<name>: <value>
/// }
/// ```
///
/// Event-ins come first, then event-outs, then exposed fields, each group in
/// declaration order.
pub fn write_node(node: &dyn Node, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}: {{", node.type_name())?;
    let core = node.core();
    let fields = core
        .event_ins()
        .iter()
        .chain(core.event_outs().iter())
        .chain(core.exposed_fields().iter());
    let mut any = false;
    for (name, field) in fields {
        if any {
            f.write_str(", \r\n")?;
        }
        write!(f, "{name}: {field}")?;
        any = true;
    }
    if any {
        f.write_str("\n")?;
    }
    f.write_str("}")
}

/// The text form of `node` as an owned string.
pub fn node_to_string(node: &dyn Node) -> String {
    node.to_string()
}

impl fmt::Display for dyn Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(self, f)
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
