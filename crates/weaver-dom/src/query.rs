//! Structural tree search.
//!
//! A [`Query`] is either a *pattern* — a partially populated node of the
//! same variant family — or a *substring* probe against text content. The
//! search walks the tree depth-first, pre-order, starting at (and
//! including) the root, and returns matches in document order. A search
//! never fails; no match is an empty result.
//!
//! Pattern semantics are deliberately partial on the matched node and exact
//! on its content constraint:
//! - an element pattern requires the same tag;
//! - every attribute on the pattern must be present on the candidate with
//!   an equal value — extra attributes on the candidate are fine;
//! - a pattern with children pins the candidate's entire child sequence to
//!   structural equality, while a childless pattern matches any children.
//!
//! This lets a caller search by tag alone, by tag plus attribute, or by
//! exact content.

use crate::node::{AsNodeRef, Comment, Container, Element, Node, NodeRef, Text};

/// A search query: a structural pattern or a text substring.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Matches nodes structurally, per the module rules.
    Pattern(Node),
    /// Matches every text node whose content contains the needle.
    Substring(String),
}

impl From<&str> for Query {
    fn from(needle: &str) -> Self {
        Self::Substring(needle.to_string())
    }
}

impl From<String> for Query {
    fn from(needle: String) -> Self {
        Self::Substring(needle)
    }
}

impl From<Node> for Query {
    fn from(pattern: Node) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<Element> for Query {
    fn from(pattern: Element) -> Self {
        Self::Pattern(Node::Element(pattern))
    }
}

impl From<Text> for Query {
    fn from(pattern: Text) -> Self {
        Self::Pattern(Node::Text(pattern))
    }
}

impl From<Comment> for Query {
    fn from(pattern: Comment) -> Self {
        Self::Pattern(Node::Comment(pattern))
    }
}

impl From<Container> for Query {
    fn from(pattern: Container) -> Self {
        Self::Pattern(Node::Container(pattern))
    }
}

/// Searches the tree rooted at `root` (inclusive) and returns all matches
/// in document order.
#[must_use]
pub fn find<'a>(root: NodeRef<'a>, query: &Query) -> Vec<NodeRef<'a>> {
    let mut matches = Vec::new();
    collect(root, query, &mut matches);
    matches
}

/// Search entry point shared by every node type.
pub trait Find: AsNodeRef {
    /// Searches this node's subtree (inclusive) and returns all matches in
    /// document order.
    fn find(&self, query: impl Into<Query>) -> Vec<NodeRef<'_>> {
        find(self.as_node_ref(), &query.into())
    }
}

impl<T: AsNodeRef + ?Sized> Find for T {}

fn collect<'a>(node: NodeRef<'a>, query: &Query, matches: &mut Vec<NodeRef<'a>>) {
    if is_match(node, query) {
        matches.push(node);
    }
    for child in node.children() {
        collect(child.into(), query, matches);
    }
}

fn is_match(candidate: NodeRef<'_>, query: &Query) -> bool {
    match query {
        Query::Substring(needle) => candidate
            .as_text()
            .is_some_and(|text| text.content().contains(needle.as_str())),
        Query::Pattern(pattern) => matches_pattern(candidate, pattern),
    }
}

fn matches_pattern(candidate: NodeRef<'_>, pattern: &Node) -> bool {
    match (candidate, pattern) {
        (NodeRef::Element(candidate), Node::Element(pattern)) => {
            candidate.tag() == pattern.tag()
                && pattern
                    .attributes()
                    .iter()
                    .all(|wanted| candidate.attr(wanted.name()) == Some(wanted.value()))
                && children_match(candidate.children(), pattern.children())
        }
        // A text pattern matches on equal content; substring probing is the
        // `Query::Substring` form.
        (NodeRef::Text(candidate), Node::Text(pattern)) => {
            candidate.content() == pattern.content()
        }
        (NodeRef::Comment(candidate), Node::Comment(pattern)) => {
            pattern
                .condition()
                .is_none_or(|condition| candidate.condition() == Some(condition))
                && children_match(candidate.children(), pattern.children())
        }
        (NodeRef::Container(candidate), Node::Container(pattern)) => {
            children_match(candidate.children(), pattern.children())
        }
        _ => false,
    }
}

/// A childless pattern places no constraint; otherwise the candidate's
/// children must be structurally equal, in full.
fn children_match(candidate: &[Node], pattern: &[Node]) -> bool {
    pattern.is_empty() || candidate == pattern
}
