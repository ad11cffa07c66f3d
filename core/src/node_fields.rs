//! Fields whose values are nodes: `SFNode` and `MFNode`.
//!
//! These own their child nodes. Cloning them clones the children through
//! [`Node::clone_node`], so a cloned subtree shares nothing with the source.

use std::fmt;

use graph3d_fields::impl_field;
use graph3d_fields::multi::write_list;

use crate::node::Node;

/// A single optional child node. Written `NULL` when empty.
#[derive(Clone, Debug, Default)]
pub struct SFNode(Option<Box<dyn Node>>);

impl SFNode {
    pub fn new(node: impl Node) -> Self {
        Self(Some(Box::new(node)))
    }

    pub fn null() -> Self {
        Self(None)
    }

    pub fn node(&self) -> Option<&dyn Node> {
        self.0.as_deref()
    }

    pub fn node_mut(&mut self) -> Option<&mut dyn Node> {
        self.0.as_deref_mut()
    }

    pub fn set_node(&mut self, node: Option<Box<dyn Node>>) -> Option<Box<dyn Node>> {
        std::mem::replace(&mut self.0, node)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Box<dyn Node>> for SFNode {
    fn from(node: Box<dyn Node>) -> Self {
        Self(Some(node))
    }
}

impl fmt::Display for SFNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            Some(node) => fmt::Display::fmt(node, f),
            None => f.write_str("NULL"),
        }
    }
}

impl_field!(SFNode => SFNode);

/// An ordered list of child nodes.
#[derive(Clone, Debug, Default)]
pub struct MFNode(Vec<Box<dyn Node>>);

impl MFNode {
    pub fn new(nodes: impl IntoIterator<Item = Box<dyn Node>>) -> Self {
        Self(nodes.into_iter().collect())
    }

    pub fn push(&mut self, node: impl Node) {
        self.0.push(Box::new(node));
    }

    pub fn push_boxed(&mut self, node: Box<dyn Node>) {
        self.0.push(node);
    }

    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Node>> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&dyn Node> {
        self.0.get(index).map(|node| &**node)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut dyn Node> {
        self.0.get_mut(index).map(|node| &mut **node)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &dyn Node> + '_ {
        self.0.iter().map(|node| &**node)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Box<dyn Node>> for MFNode {
    fn from_iter<T: IntoIterator<Item = Box<dyn Node>>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for MFNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter(), |f, node| fmt::Display::fmt(node, f))
    }
}

impl_field!(MFNode => MFNode);

/// Child nodes held in `node`'s exposed `SFNode`/`MFNode` fields, in
/// field declaration order.
pub fn children(node: &dyn Node) -> Vec<&dyn Node> {
    let mut out = Vec::new();
    for (_, field) in node.core().exposed_fields() {
        if let Some(single) = field.downcast_ref::<SFNode>() {
            out.extend(single.node());
        } else if let Some(many) = field.downcast_ref::<MFNode>() {
            out.extend(many.iter());
        }
    }
    out
}
