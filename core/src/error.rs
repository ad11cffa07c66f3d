//! Errors raised by node field lookups and scene graph assembly.
//!
//! Lookup errors are usage errors: callers are expected to check field
//! names against the node kind's declared interface before asking for them.
//! They are never recovered inside this crate and carry enough context
//! (field name and node kind) to diagnose which variant lacks the field.

use graph3d_fields::FieldType;
use thiserror::Error;

use crate::node::NodeId;
use crate::registry::FieldCategory;

pub type NodeResult<T> = Result<T, NodeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("'{name}' exposed field doesn't exist in node of {node_type} type")]
    MissingExposedField {
        name: String,
        node_type: &'static str,
    },

    /// Raised by plain `field` lookups, which read the exposed-field
    /// registry.
    #[error("'{name}' field doesn't exist in node of {node_type} type")]
    MissingField {
        name: String,
        node_type: &'static str,
    },

    #[error("'{name}' event in field doesn't exist in node of {node_type} type")]
    MissingEventIn {
        name: String,
        node_type: &'static str,
    },

    #[error("'{name}' event out field doesn't exist in node of {node_type} type")]
    MissingEventOut {
        name: String,
        node_type: &'static str,
    },

    /// A typed lookup found the slot but it holds another field type.
    #[error("'{name}' field of {node_type} node is {found}, not {expected}")]
    FieldTypeMismatch {
        name: String,
        node_type: &'static str,
        expected: &'static str,
        found: FieldType,
    },

    #[error("node {0} is not part of this scene graph")]
    UnknownNode(NodeId),

    #[error("attaching node {child} under {parent} would make it its own ancestor")]
    CyclicParent { child: NodeId, parent: NodeId },

    #[error("scene graph cannot hold more than {max} nodes", max = u32::MAX as u64 + 1)]
    GraphFull,
}

impl NodeError {
    /// Name of the field the failed lookup asked for, if any.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            NodeError::MissingExposedField { name, .. }
            | NodeError::MissingField { name, .. }
            | NodeError::MissingEventIn { name, .. }
            | NodeError::MissingEventOut { name, .. }
            | NodeError::FieldTypeMismatch { name, .. } => Some(name),
            NodeError::UnknownNode(_) | NodeError::CyclicParent { .. } | NodeError::GraphFull => {
                None
            }
        }
    }

    /// Registry a failed lookup searched. Plain `field` lookups report
    /// [`FieldCategory::ExposedField`].
    pub fn category(&self) -> Option<FieldCategory> {
        match self {
            NodeError::MissingExposedField { .. } | NodeError::MissingField { .. } => {
                Some(FieldCategory::ExposedField)
            }
            NodeError::MissingEventIn { .. } => Some(FieldCategory::EventIn),
            NodeError::MissingEventOut { .. } => Some(FieldCategory::EventOut),
            NodeError::FieldTypeMismatch { .. }
            | NodeError::UnknownNode(_)
            | NodeError::CyclicParent { .. }
            | NodeError::GraphFull => None,
        }
    }
}
