//! Boilerplate shared by the built-in node kinds.

/// Declares a node kind backed by a [`NodeCore`](crate::NodeCore).
///
/// Generates the struct, its [`Node`](crate::Node) implementation (kind
/// name, core accessors, `create_blank` through `new()`, visitor dispatch),
/// `Default` and `Display`. The kind's own `new()` declares its interface.
///
/// ```ignore
/// node_variant! {
///     /// The `Box` geometry.
///     pub struct BoxNode => "Box", visit_box;
/// }
///
/// impl BoxNode {
///     pub fn new() -> Self {
///         let mut core = NodeCore::new();
///         core.add_field("size", SFVec3f::new(2.0, 2.0, 2.0));
///         Self { core }
///     }
/// }
/// ```
macro_rules! node_variant {
    ($(#[$meta:meta])* $vis:vis struct $node:ident => $kind:literal, $visit:ident;) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis struct $node {
            core: $crate::NodeCore,
        }

        impl $crate::Node for $node {
            fn type_name(&self) -> &'static str {
                $kind
            }

            fn core(&self) -> &$crate::NodeCore {
                &self.core
            }

            fn core_mut(&mut self) -> &mut $crate::NodeCore {
                &mut self.core
            }

            fn create_blank(&self) -> ::std::boxed::Box<dyn $crate::Node> {
                ::std::boxed::Box::new(<$node>::new())
            }

            fn accept(&self, visitor: &mut dyn $crate::NodeVisitor) {
                visitor.$visit(self)
            }
        }

        impl ::std::default::Default for $node {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::std::fmt::Display for $node {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::write_node(self, f)
            }
        }
    };
}

pub(crate) use node_variant;
