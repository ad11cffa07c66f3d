//! Node object model for VRML-style scene descriptions.
//!
//! Every node kind implements [`Node`] on top of a [`NodeCore`], which holds
//! three name-keyed registries of [`Field`](graph3d_fields::Field) slots:
//! exposed fields, event-ins and event-outs. On top of that the trait
//! provides field lookup with descriptive errors, deep cloning that keeps
//! the node kind, a diagnostic text form and visitor dispatch.
//!
//! # Example
//!
//! ```
//! use graph3d_core::{Node, NodeExt, nodes::BoxNode};
//! use graph3d_fields::SFVec3f;
//!
//! let mut node = BoxNode::new();
//! node.exposed_field_as_mut::<SFVec3f>("size").unwrap().x = 4.0;
//!
//! let copy = node.clone_node();
//! assert_eq!(copy.type_name(), "Box");
//! assert_eq!(copy.to_string(), "Box: {\nsize: 4 2 2\n}");
//!
//! let err = node.exposed_field("color").unwrap_err();
//! assert_eq!(err.to_string(), "'color' exposed field doesn't exist in node of Box type");
//! ```

mod macros;

pub mod error;
pub mod node;
pub mod node_fields;
pub mod nodes;
pub mod registry;
pub mod scene;
pub mod visitor;

pub use error::{NodeError, NodeResult};
pub use node::{Node, NodeCore, NodeExt, NodeId, node_to_string, write_node};
pub use node_fields::{MFNode, SFNode, children};
pub use registry::{FieldCategory, FieldRegistry, Fields};
pub use scene::{Ancestors, SceneGraph};
pub use visitor::{NodeVisitor, walk};
