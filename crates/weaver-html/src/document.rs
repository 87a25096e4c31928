//! Prepared document template.
//!
//! [`Document`] pairs a doctype declaration with an `<html>` element whose
//! `<head>` starts out carrying a UTF-8 charset declaration and a title.
//! Content added to the document lands in the `<body>`, and the head and
//! body stay directly accessible for metadata edits.

use serde::Serialize;

use weaver_dom::{
    Attribute, Container, Element, IntoArgs, Node, NodeRef, Query, Render, RenderOptions, Tag,
    find,
};

/// The placeholder title of a freshly created document.
const DEFAULT_TITLE: &str = "Title of the page";

/// A complete HTML document: doctype, head, and body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    doctype: Element,
    html: Element,
}

impl Document {
    /// Creates a document with a UTF-8 charset declaration and a
    /// placeholder title.
    #[must_use]
    pub fn new() -> Self {
        let head = Element::with(
            Tag::Head,
            (
                Element::with(Tag::Meta, (Attribute::new("charset", "utf-8"),)),
                Element::with(Tag::Title, (DEFAULT_TITLE,)),
            ),
        );
        let body = Element::new(Tag::Body);
        Self {
            doctype: Element::new(Tag::Doctype),
            html: Element::with(Tag::Html, (head, body)),
        }
    }

    /// Creates a document and adds `args` to its body, classifying exactly
    /// as [`Element::add`] does: nodes become body children, attributes
    /// become body attributes.
    #[must_use]
    pub fn with(args: impl IntoArgs) -> Self {
        let mut document = Self::new();
        let _ = document.add(args);
        document
    }

    /// The `<head>` element.
    #[must_use]
    pub fn head(&self) -> &Element {
        self.part(0)
    }

    /// Mutable counterpart of [`Document::head`].
    pub fn head_mut(&mut self) -> &mut Element {
        self.part_mut(0)
    }

    /// The `<body>` element.
    #[must_use]
    pub fn body(&self) -> &Element {
        self.part(1)
    }

    /// Mutable counterpart of [`Document::body`].
    pub fn body_mut(&mut self) -> &mut Element {
        self.part_mut(1)
    }

    /// Adds content to the body.
    pub fn add(&mut self, args: impl IntoArgs) -> &mut Self {
        // Cannot fail: the body is not a void element.
        let _ = self.body_mut().add(args);
        self
    }

    /// Replaces the text of the `<title>` element in the head.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        let head = self.head_mut();
        for index in 0..head.len() {
            let Some(element) = head.get_mut(index).and_then(Node::as_element_mut) else {
                continue;
            };
            if *element.tag() == Tag::Title {
                while !element.is_empty() {
                    let _ = element.remove_child(0);
                }
                let _ = element.add((title,));
                return;
            }
        }
    }

    /// Serializes the document: the doctype declaration followed by the
    /// `<html>` tree, with no wrapping syntax — the document behaves like a
    /// container of its two parts.
    #[must_use]
    pub fn render(&self, options: &RenderOptions) -> String {
        let mut out = Render::render(&self.doctype, options);
        if options.pretty {
            out.push_str(&options.newline);
        }
        out.push_str(&Render::render(&self.html, options));
        out
    }

    /// Serializes the document, pretty or compact, with default separators.
    #[must_use]
    pub fn display(&self, pretty: bool) -> String {
        let options = if pretty {
            RenderOptions::pretty()
        } else {
            RenderOptions::compact()
        };
        self.render(&options)
    }

    /// Searches both parts of the document in document order.
    pub fn find(&self, query: impl Into<Query>) -> Vec<NodeRef<'_>> {
        let query = query.into();
        let mut matches = find(NodeRef::Element(&self.doctype), &query);
        matches.extend(find(NodeRef::Element(&self.html), &query));
        matches
    }

    /// Converts the document into a plain container of its two parts.
    #[must_use]
    pub fn into_container(self) -> Container {
        Container::from_nodes(vec![self.doctype.into(), self.html.into()])
    }

    fn part(&self, index: usize) -> &Element {
        match self.html.get(index).and_then(Node::as_element) {
            Some(element) => element,
            None => unreachable!("document html keeps head and body children"),
        }
    }

    fn part_mut(&mut self, index: usize) -> &mut Element {
        match self.html.get_mut(index).and_then(Node::as_element_mut) {
            Some(element) => element,
            None => unreachable!("document html keeps head and body children"),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Document {
    /// Pretty-renders with default separators.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}
