//! Markup tree model and core algorithms for the weaver HTML builder.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tree Model** — owned [`Node`] variants ([`Element`], [`Text`],
//!   [`Comment`], [`Container`]) with single-parent ownership enforced by
//!   move semantics
//! - **Composition Engine** — shape-classified argument lists for
//!   constructors and `add`, index-based child access, key-based attribute
//!   access, and the `+`/`*` operators
//! - **Scope Stack** — explicit, thread-confined stack of open elements for
//!   the scoped-construction idiom, with pop-on-exit guaranteed by RAII
//! - **Serializer** — pretty and compact rendering with per-tag
//!   void-element rules, conditional comments, and escaping
//! - **Matcher** — structural pattern and substring search in document
//!   order
//! - **Tag Table** — the static tag metadata lookup (canonical name,
//!   void flag)
//!
//! # Not Implemented Here
//!
//! - Per-tag factory functions and named attribute constructors
//!   (`weaver-html`)
//! - Keyword-to-attribute-name normalization (`weaver-html`)
//! - Table shorthand and the document template (`weaver-html`)

/// Argument classification shared by constructors and `add`.
pub mod args;
/// Attribute model and merge rules.
pub mod attr;
/// Error type for composition and mutation.
pub mod error;
/// Node variants and the tree data model.
pub mod node;
/// The `+` and `*` operators.
pub mod ops;
/// Structural and substring search.
pub mod query;
/// Pretty and compact serialization.
pub mod render;
/// The scope stack for implicit parenting.
pub mod scope;
/// Static tag metadata table.
pub mod tag;

// Re-exports for convenience
pub use args::{Arg, IntoArgs};
pub use attr::{AttrValue, Attribute};
pub use error::{Error, Result};
pub use node::{AsNodeRef, Comment, Container, Element, Node, NodeKind, NodeRef, Text};
pub use query::{Find, Query, find};
pub use render::{Render, RenderOptions, render};
pub use scope::{ScopeGuard, ScopeStack, attach, nest, scope, scope_depth, take_roots};
pub use tag::Tag;
