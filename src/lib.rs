//! Graph3D - node and field object model for VRML-style scene descriptions
//!
//! # Overview
//!
//! A scene is a tree of nodes. Every node kind declares a fixed interface of
//! named slots in three categories:
//!
//! - exposed fields, readable and settable through the node
//! - event-ins, inputs that other nodes can trigger
//! - event-outs, values the node emits
//!
//! Each slot holds a [`Field`] value. Nodes are handled as `dyn Node`: the
//! same lookup, cloning, text form and visitor dispatch work for every kind.
//!
//! # Quick Start
//!
//! ```
//! use graph3d::{MFNode, Node, NodeExt, SceneGraph};
//! use graph3d::fields::SFVec3f;
//! use graph3d::nodes::{BoxNode, ShapeNode, TransformNode};
//!
//! // Declare a transformed box
//! let mut transform = TransformNode::new();
//! transform.set_name(Some("Crate".into()));
//! transform.exposed_field_as_mut::<SFVec3f>("translation").unwrap().y = 1.5;
//! transform
//!     .exposed_field_as_mut::<MFNode>("children")
//!     .unwrap()
//!     .push(ShapeNode::with_geometry(BoxNode::new()));
//!
//! // Copies are deep and keep the node kind
//! let copy = transform.clone_node();
//! assert_eq!(copy.type_name(), "Transform");
//! assert_eq!(copy.exposed_field("translation").unwrap().to_string(), "0 1.5 0");
//!
//! // Parents are assigned by whoever owns the tree
//! let mut scene = SceneGraph::new();
//! let root = scene.add(transform).unwrap();
//! let second = scene.insert(copy).unwrap();
//! scene.attach(second, root).unwrap();
//! assert_eq!(scene.parent_of(second).unwrap(), Some(root));
//! ```
//!
//! # Errors
//!
//! Asking a node for a slot its kind does not declare fails with a
//! [`NodeError`] naming both the slot and the kind:
//!
//! ```
//! use graph3d::{Node, nodes::BoxNode};
//!
//! let err = BoxNode::new().exposed_field("color").unwrap_err();
//! assert_eq!(err.to_string(), "'color' exposed field doesn't exist in node of Box type");
//! ```

// Field values
pub use graph3d_fields::{self as fields, Field, FieldType};

// Node model
pub use graph3d_core::{
    Ancestors, FieldCategory, FieldRegistry, Fields, MFNode, Node, NodeCore, NodeError, NodeExt,
    NodeId, NodeResult, NodeVisitor, SFNode, SceneGraph, children, node_to_string, nodes, walk,
    write_node,
};
