//! Sitemark HTML tree
//!
//! A minimal HTML node model (leaf or parent) and its string renderer,
//! plus the mapping from inline spans to leaf nodes.
//!
//! ```text
//! Vec<Span> → spans_to_nodes() → Vec<Node> → Node::parent(..) → render() → String
//! ```
//!
//! Parents are validated lazily: a parent without a tag or children can be
//! built freely and only fails when it is rendered.

pub mod convert;
pub mod node;

pub use convert::{span_to_node, spans_to_nodes};
pub use node::{Attributes, Leaf, Node, Parent};

/// HTML node error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    /// A leaf was constructed without content.
    #[error("Leaf node must have a value")]
    MissingValue,

    /// A parent was rendered without a tag.
    #[error("Parent node must have a tag")]
    MissingTag,

    /// A parent was rendered without children.
    #[error("Parent node <{tag}> has no children")]
    EmptyChildren { tag: String },
}
