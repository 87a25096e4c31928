//! Error type for tree composition and mutation.
//!
//! Every fallible operation in this crate reports its failure synchronously
//! through [`Error`] and leaves the target node untouched. Rendering and
//! searching never fail on a well-formed tree; the composition engine
//! rejects illegal shapes at attach time, so a malformed tree cannot be
//! built in the first place.

use thiserror::Error;

use crate::node::NodeKind;
use crate::tag::Tag;

/// Failures reported by the composition engine and the scope stack.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An integer index was outside the child sequence of the target node.
    #[error("child index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        /// The requested child position.
        index: usize,
        /// The length of the child sequence at the time of the access.
        len: usize,
    },

    /// A key access named an attribute that is not present on the element.
    #[error("attribute `{0}` does not exist on this element")]
    AttributeNotFound(String),

    /// Replication (`*` or [`repeat`](crate::node::Node::repeat)) was asked
    /// for zero copies.
    #[error("replication count must be at least 1")]
    ZeroRepeat,

    /// A child was attached to a void element, which never renders children.
    #[error("void element <{0}> cannot contain children")]
    VoidChildren(Tag),

    /// An attribute was attached to a node variant that cannot carry one.
    #[error("{0} nodes cannot carry attributes")]
    AttributesNotAllowed(NodeKind),

    /// An operation on the scope stack required an open scope and none was.
    #[error("no element scope is currently open")]
    NoOpenScope,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
