//! Tree serialization.
//!
//! [§ 13.3 Serializing HTML fragments](https://html.spec.whatwg.org/multipage/parsing.html#serialising-html-fragments)
//!
//! Walks a tree depth-first and produces its textual markup, in either an
//! indented multi-line form or a single-line compact form. The two forms
//! share one algorithm; pretty mode only decides whether a node is preceded
//! by a newline and indentation.
//!
//! Layout rules, pretty mode:
//! - every node opens on its own line, indented one unit deeper than its
//!   parent;
//! - an element's closing tag sits at the element's own indent level;
//! - void elements emit no closing tag and never render children;
//! - containers render their children at the container's depth with no
//!   wrapping syntax of their own.

use std::fmt;

use crate::node::{AsNodeRef, Comment, Container, Element, Node, NodeRef, Text};

/// Escapes markup-significant characters in text content.
fn escape_text_into(content: &str, out: &mut String) {
    for ch in content.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
}

/// Escapes quote and ampersand characters in attribute values.
pub(crate) fn escape_attr_into(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
}

/// Options controlling serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Indented multi-line output when `true`; single-line output when
    /// `false`.
    pub pretty: bool,
    /// The indentation unit applied once per depth level in pretty mode.
    pub indent: String,
    /// The line separator used in pretty mode.
    pub newline: String,
}

impl RenderOptions {
    /// Indented multi-line output with the default two-space unit.
    #[must_use]
    pub fn pretty() -> Self {
        Self::default()
    }

    /// Single-line output with no inserted whitespace.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            newline: "\n".to_string(),
        }
    }
}

/// Serializes a tree into its textual markup.
#[must_use]
pub fn render(node: NodeRef<'_>, options: &RenderOptions) -> String {
    let mut serializer = Serializer {
        out: String::new(),
        options,
    };
    serializer.write_node(node, 0);
    serializer.out
}

/// Serialization entry points shared by every node type.
pub trait Render: AsNodeRef {
    /// Serializes this node with the given options.
    fn render(&self, options: &RenderOptions) -> String {
        render(self.as_node_ref(), options)
    }

    /// Serializes this node, pretty or compact, with default separators.
    fn display(&self, pretty: bool) -> String {
        let options = if pretty {
            RenderOptions::pretty()
        } else {
            RenderOptions::compact()
        };
        self.render(&options)
    }
}

impl<T: AsNodeRef + ?Sized> Render for T {}

struct Serializer<'a> {
    out: String,
    options: &'a RenderOptions,
}

impl Serializer<'_> {
    /// Starts a node at `depth`: newline plus indentation in pretty mode,
    /// unless the node is the very first thing emitted.
    fn open_line(&mut self, depth: usize) {
        if self.options.pretty && !self.out.is_empty() {
            self.out.push_str(&self.options.newline);
            for _ in 0..depth {
                self.out.push_str(&self.options.indent);
            }
        }
    }

    /// Newline plus indentation before a closing delimiter.
    fn close_line(&mut self, depth: usize) {
        if self.options.pretty {
            self.out.push_str(&self.options.newline);
            for _ in 0..depth {
                self.out.push_str(&self.options.indent);
            }
        }
    }

    fn write_node(&mut self, node: NodeRef<'_>, depth: usize) {
        match node {
            NodeRef::Element(element) => self.write_element(element, depth),
            NodeRef::Text(text) => self.write_text(text, depth),
            NodeRef::Comment(comment) => self.write_comment(comment, depth),
            NodeRef::Container(container) => self.write_container(container, depth),
        }
    }

    fn write_element(&mut self, element: &Element, depth: usize) {
        self.open_line(depth);
        self.out.push('<');
        self.out.push_str(&element.tag().to_string());
        for attribute in element.attributes() {
            self.out.push(' ');
            self.out.push_str(&attribute.to_string());
        }
        self.out.push('>');

        // Void elements have no end tag and never render children.
        if element.tag().is_void() {
            return;
        }

        for child in element.children() {
            self.write_node(child.into(), depth + 1);
        }
        self.close_line(depth);
        self.out.push_str("</");
        self.out.push_str(&element.tag().to_string());
        self.out.push('>');
    }

    fn write_text(&mut self, text: &Text, depth: usize) {
        self.open_line(depth);
        escape_text_into(text.content(), &mut self.out);
    }

    fn write_comment(&mut self, comment: &Comment, depth: usize) {
        self.open_line(depth);
        match comment.condition() {
            Some(condition) => {
                self.out.push_str("<!--[if ");
                self.out.push_str(condition);
                self.out.push_str("]>");
            }
            None => self.out.push_str("<!--"),
        }

        for child in comment.children() {
            self.write_node(child.into(), depth + 1);
        }
        // An empty comment closes inline even in pretty mode.
        if !comment.is_empty() {
            self.close_line(depth);
        }
        match comment.condition() {
            Some(_) => self.out.push_str("<![endif]-->"),
            None => self.out.push_str("-->"),
        }
    }

    fn write_container(&mut self, container: &Container, depth: usize) {
        for child in container.children() {
            self.write_node(child.into(), depth);
        }
    }
}

macro_rules! impl_display_via_render {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                /// Pretty-renders with default separators.
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&render(self.as_node_ref(), &RenderOptions::default()))
                }
            }
        )+
    };
}

impl_display_via_render!(Node, Element, Text, Comment, Container, NodeRef<'_>);
