//! Arena that owns assembled nodes and records their parent links.
//!
//! Nodes never own their parent: a node's parent is a [`NodeId`] into the
//! graph that holds it, assigned here by whoever assembles the tree.

use hashbrown::HashSet;
use tracing::trace;

use crate::error::{NodeError, NodeResult};
use crate::node::{Node, NodeId};

#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Box<dyn Node>>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `node` and returns its handle. The node starts
    /// detached whatever its previous parent was.
    ///
    /// Ids are `u32`, so a graph holds at most `u32::MAX + 1` nodes; past
    /// that, insertion fails with [`NodeError::GraphFull`].
    pub fn insert(&mut self, mut node: Box<dyn Node>) -> NodeResult<NodeId> {
        let id = id_for_index(self.nodes.len())?;
        node.set_parent(None);
        trace!(%id, node = node.type_name(), "inserted node");
        self.nodes.push(node);
        Ok(id)
    }

    pub fn add(&mut self, node: impl Node) -> NodeResult<NodeId> {
        self.insert(Box::new(node))
    }

    pub fn get(&self, id: NodeId) -> NodeResult<&dyn Node> {
        self.nodes
            .get(id.index())
            .map(|node| &**node)
            .ok_or(NodeError::UnknownNode(id))
    }

    pub fn get_mut(&mut self, id: NodeId) -> NodeResult<&mut dyn Node> {
        self.nodes
            .get_mut(id.index())
            .map(|node| &mut **node)
            .ok_or(NodeError::UnknownNode(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Makes `parent` the parent of `child`, replacing any previous parent.
    ///
    /// Fails if either id is unknown, if `child` is `parent` itself or one
    /// of its ancestors, or if `parent`'s own ancestry already loops (parents
    /// can be set directly through [`Node::set_parent`]).
    pub fn attach(&mut self, child: NodeId, parent: NodeId) -> NodeResult<()> {
        self.get(child)?;
        self.get(parent)?;
        if self.reaches(parent, child)? {
            return Err(NodeError::CyclicParent { child, parent });
        }
        self.get_mut(child)?.set_parent(Some(parent));
        trace!(%child, %parent, "attached node");
        Ok(())
    }

    /// Clears `child`'s parent, returning the previous one.
    pub fn detach(&mut self, child: NodeId) -> NodeResult<Option<NodeId>> {
        let node = self.get_mut(child)?;
        let previous = node.parent();
        node.set_parent(None);
        if let Some(parent) = previous {
            trace!(%child, %parent, "detached node");
        }
        Ok(previous)
    }

    pub fn parent_of(&self, id: NodeId) -> NodeResult<Option<NodeId>> {
        Ok(self.get(id)?.parent())
    }

    /// Parent, grandparent, ... of `id`, nearest first. Stops before
    /// repeating a node if the parent links loop.
    pub fn ancestors(&self, id: NodeId) -> NodeResult<Ancestors<'_>> {
        let next = self.parent_of(id)?;
        let mut seen = HashSet::new();
        seen.insert(id);
        Ok(Ancestors {
            graph: self,
            next,
            seen,
        })
    }

    /// Whether following parent links from `from` (inclusive) hits
    /// `target` or goes round a loop.
    fn reaches(&self, from: NodeId, target: NodeId) -> NodeResult<bool> {
        let mut seen = HashSet::new();
        let mut current = Some(from);
        while let Some(id) = current {
            if id == target || !seen.insert(id) {
                return Ok(true);
            }
            current = self.parent_of(id)?;
        }
        Ok(false)
    }

    /// Nodes whose parent is `id`, in insertion order.
    pub fn children_of(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.iter()
            .filter(move |(_, node)| node.parent() == Some(id))
            .map(|(child, _)| child)
    }

    /// Nodes without a parent, in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter()
            .filter(|(_, node)| node.parent().is_none())
            .map(|(id, _)| id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &dyn Node)> + '_ {
        // `insert` keeps every index within `u32`.
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId::new(index as u32), &**node))
    }

    /// First node whose `DEF` name is `name`.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.iter()
            .find(|(_, node)| node.name() == Some(name))
            .map(|(id, _)| id)
    }

    /// Inserts a deep copy of node `id`. The copy starts detached.
    pub fn duplicate(&mut self, id: NodeId) -> NodeResult<NodeId> {
        let copy = self.get(id)?.clone_node();
        self.insert(copy)
    }
}

fn id_for_index(index: usize) -> NodeResult<NodeId> {
    u32::try_from(index)
        .map(NodeId::new)
        .map_err(|_| NodeError::GraphFull)
}

/// Iterator returned by [`SceneGraph::ancestors`].
pub struct Ancestors<'a> {
    graph: &'a SceneGraph,
    next: Option<NodeId>,
    seen: HashSet<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next.take()?;
        if !self.seen.insert(current) {
            return None;
        }
        self.next = self.graph.parent_of(current).ok().flatten();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{BoxNode, GroupNode, ShapeNode, TransformNode};
    use pretty_assertions::assert_eq;

    /// root(Group) -> xf(Transform) -> shape(Shape)
    fn chain() -> (SceneGraph, NodeId, NodeId, NodeId) {
        let mut graph = SceneGraph::new();
        let root = graph.add(GroupNode::new()).unwrap();
        let xf = graph.add(TransformNode::new()).unwrap();
        let shape = graph.add(ShapeNode::with_geometry(BoxNode::new())).unwrap();
        graph.attach(xf, root).unwrap();
        graph.attach(shape, xf).unwrap();
        (graph, root, xf, shape)
    }

    #[test]
    fn test_attach_sets_parent() {
        let (graph, root, xf, shape) = chain();
        assert_eq!(graph.parent_of(root).unwrap(), None);
        assert_eq!(graph.parent_of(xf).unwrap(), Some(root));
        assert_eq!(graph.get(shape).unwrap().parent(), Some(xf));
        assert_eq!(graph.ancestors(shape).unwrap().collect::<Vec<_>>(), [xf, root]);
        assert_eq!(graph.children_of(root).collect::<Vec<_>>(), [xf]);
        assert_eq!(graph.roots().collect::<Vec<_>>(), [root]);
    }

    #[test]
    fn test_attach_rejects_cycles() {
        let (mut graph, root, _, shape) = chain();
        assert_eq!(
            graph.attach(root, shape),
            Err(NodeError::CyclicParent {
                child: root,
                parent: shape
            })
        );
        assert_eq!(
            graph.attach(shape, shape),
            Err(NodeError::CyclicParent {
                child: shape,
                parent: shape
            })
        );
        assert_eq!(graph.parent_of(root).unwrap(), None);
    }

    #[test]
    fn test_unknown_ids() {
        let (mut graph, root, _, _) = chain();
        let stray = NodeId::new(42);
        assert_eq!(graph.attach(stray, root), Err(NodeError::UnknownNode(stray)));
        assert_eq!(graph.attach(root, stray), Err(NodeError::UnknownNode(stray)));
        assert!(graph.get(stray).is_err());
        assert_eq!(
            graph.detach(stray).unwrap_err().to_string(),
            "node #42 is not part of this scene graph"
        );
    }

    #[test]
    fn test_detach_and_reattach() {
        let (mut graph, root, xf, shape) = chain();
        assert_eq!(graph.detach(shape).unwrap(), Some(xf));
        assert_eq!(graph.detach(shape).unwrap(), None);
        graph.attach(shape, root).unwrap();
        assert_eq!(graph.children_of(root).collect::<Vec<_>>(), [xf, shape]);
    }

    #[test]
    fn test_duplicate_is_detached_copy() {
        let (mut graph, _, xf, shape) = chain();
        graph.get_mut(shape).unwrap().set_name(Some("Crate".into()));

        let copy = graph.duplicate(shape).unwrap();
        assert_ne!(copy, shape);
        assert_eq!(graph.parent_of(copy).unwrap(), None);
        assert_eq!(graph.parent_of(shape).unwrap(), Some(xf));
        assert_eq!(graph.get(copy).unwrap().name(), Some("Crate"));
        assert_eq!(graph.find("Crate"), Some(shape));
        assert_eq!(
            graph.get(copy).unwrap().to_string(),
            graph.get(shape).unwrap().to_string()
        );
    }

    #[test]
    fn test_insert_clears_foreign_parent() {
        let mut node = BoxNode::new();
        node.set_parent(Some(NodeId::new(7)));

        let mut graph = SceneGraph::new();
        let id = graph.add(node).unwrap();
        assert_eq!(graph.parent_of(id).unwrap(), None);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_parent_loop_set_directly_is_rejected() {
        let (mut graph, root, xf, shape) = chain();
        graph.get_mut(root).unwrap().set_parent(Some(shape));

        assert_eq!(graph.ancestors(shape).unwrap().collect::<Vec<_>>(), [xf, root]);
        let stray = graph.add(BoxNode::new()).unwrap();
        assert_eq!(
            graph.attach(stray, xf),
            Err(NodeError::CyclicParent {
                child: stray,
                parent: xf
            })
        );
        assert_eq!(graph.parent_of(stray).unwrap(), None);
    }

    #[test]
    fn test_self_parent_set_directly_is_rejected() {
        let (mut graph, root, _, _) = chain();
        graph.get_mut(root).unwrap().set_parent(Some(root));
        let stray = graph.add(BoxNode::new()).unwrap();

        assert_eq!(graph.ancestors(root).unwrap().count(), 0);
        assert!(matches!(
            graph.attach(stray, root),
            Err(NodeError::CyclicParent { .. })
        ));
    }

    #[test]
    fn test_ids_beyond_u32_are_refused() {
        assert_eq!(id_for_index(7), Ok(NodeId::new(7)));
        assert_eq!(id_for_index(u32::MAX as usize), Ok(NodeId::new(u32::MAX)));
        if let Some(past) = (u32::MAX as usize).checked_add(1) {
            assert_eq!(id_for_index(past), Err(NodeError::GraphFull));
        }
        assert_eq!(
            NodeError::GraphFull.to_string(),
            "scene graph cannot hold more than 4294967296 nodes"
        );
    }
}
