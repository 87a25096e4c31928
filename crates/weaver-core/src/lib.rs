//! Core API for the weaver HTML builder.
//!
//! # Scope
//!
//! This crate re-exports the full public surface — the tree model and
//! algorithms from `weaver-dom` and the HTML-facing constructors from
//! `weaver-html` — plus a [`prelude`] for glob imports in application code.
//!
//! ```
//! use weaver_core::prelude::*;
//!
//! let page = div((h1(("Title",)), p(("Paragraph",)), class_("container")));
//! assert_eq!(
//!     "<div class=\"container\"><h1>Title</h1><p>Paragraph</p></div>",
//!     page.display(false)
//! );
//! ```

pub use weaver_dom as dom;
pub use weaver_html as html;

/// The names application code uses most: node types, the render and find
/// traits, the scope functions, tag factories, and attribute constructors.
pub mod prelude {
    pub use weaver_dom::{
        Arg, AttrValue, Attribute, Comment, Container, Element, Error, Find, IntoArgs, Node,
        NodeKind, NodeRef, Query, Render, RenderOptions, Result, ScopeGuard, ScopeStack, Tag,
        Text, attach, nest, scope,
    };
    pub use weaver_html::attrs::*;
    pub use weaver_html::tags::*;
    pub use weaver_html::{Document, HeaderScope, table_from};
}
