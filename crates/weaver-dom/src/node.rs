//! The markup tree data model.
//!
//! [§ 4 Nodes](https://dom.spec.whatwg.org/#nodes)
//!
//! "The DOM represents a document as a tree. A tree is a finite hierarchical
//! tree structure."
//!
//! Unlike a browser DOM, this tree is built to be *emitted*, not parsed or
//! laid out, so it stores owned values instead of arena indices: a child is
//! a [`Node`] owned by exactly one parent `Vec`, and Rust move semantics
//! enforce the single-parent invariant that a browser DOM has to maintain by
//! hand. Replication (`*`) deep-copies via `Clone`, so no two parents ever
//! share a subtree.

use serde::Serialize;
use strum_macros::Display;

use crate::args::{Arg, IntoArgs};
use crate::attr::{AttrValue, Attribute};
use crate::error::{Error, Result};
use crate::tag::Tag;

/// The variant of a node, used in error reports and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    /// A tagged element.
    Element,
    /// A text leaf.
    Text,
    /// A comment.
    Comment,
    /// A transparent grouping of siblings.
    Container,
}

/// A node in the markup tree.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Node is an abstract interface that is used by all nodes in a tree."
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    /// "Element nodes are simply known as elements."
    Element(Element),
    /// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    /// "Text nodes are known as text."
    Text(Text),
    /// [§ 4.7 Interface Comment](https://dom.spec.whatwg.org/#interface-comment)
    /// "Comment nodes are known as comments."
    Comment(Comment),
    /// A transparent grouping of siblings with no tag identity. Produced by
    /// explicit construction and by the `+` and `*` operators.
    Container(Container),
}

impl Node {
    /// The variant of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Element(_) => NodeKind::Element,
            Self::Text(_) => NodeKind::Text,
            Self::Comment(_) => NodeKind::Comment,
            Self::Container(_) => NodeKind::Container,
        }
    }

    /// Returns the element data if this node is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Mutable counterpart of [`Node::as_element`].
    pub const fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the text data if this node is a text leaf.
    #[must_use]
    pub const fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Mutable counterpart of [`Node::as_text`].
    pub const fn as_text_mut(&mut self) -> Option<&mut Text> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the comment data if this node is a comment.
    #[must_use]
    pub const fn as_comment(&self) -> Option<&Comment> {
        match self {
            Self::Comment(comment) => Some(comment),
            _ => None,
        }
    }

    /// Returns the container data if this node is a container.
    #[must_use]
    pub const fn as_container(&self) -> Option<&Container> {
        match self {
            Self::Container(container) => Some(container),
            _ => None,
        }
    }

    /// The node's children, or an empty slice for text leaves.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Element(element) => element.children(),
            Self::Text(_) => &[],
            Self::Comment(comment) => comment.children(),
            Self::Container(container) => container.children(),
        }
    }

    /// Returns a container holding `count` independent deep copies of this
    /// node. Mutating one copy never affects the others.
    ///
    /// This is the non-panicking form of the `*` operator.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroRepeat`] when `count` is zero.
    pub fn repeat(&self, count: usize) -> Result<Container> {
        if count == 0 {
            return Err(Error::ZeroRepeat);
        }
        Ok(Container::from_nodes(
            (0..count).map(|_| self.clone()).collect(),
        ))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Comment> for Node {
    fn from(comment: Comment) -> Self {
        Self::Comment(comment)
    }
}

impl From<Container> for Node {
    fn from(container: Container) -> Self {
        Self::Container(container)
    }
}

/// A borrowed view of any node variant.
///
/// The serializer and the matcher work on `NodeRef` so a search or a render
/// can start from a bare `&Element` (or any other variant) without first
/// moving it into a [`Node`].
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    /// A borrowed element.
    Element(&'a Element),
    /// A borrowed text leaf.
    Text(&'a Text),
    /// A borrowed comment.
    Comment(&'a Comment),
    /// A borrowed container.
    Container(&'a Container),
}

impl<'a> NodeRef<'a> {
    /// The variant of the referenced node.
    #[must_use]
    pub const fn kind(self) -> NodeKind {
        match self {
            Self::Element(_) => NodeKind::Element,
            Self::Text(_) => NodeKind::Text,
            Self::Comment(_) => NodeKind::Comment,
            Self::Container(_) => NodeKind::Container,
        }
    }

    /// The referenced element, if this is an element view.
    #[must_use]
    pub const fn as_element(self) -> Option<&'a Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The referenced text leaf, if this is a text view.
    #[must_use]
    pub const fn as_text(self) -> Option<&'a Text> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The referenced node's children, or an empty slice for text leaves.
    #[must_use]
    pub fn children(self) -> &'a [Node] {
        match self {
            Self::Element(element) => element.children(),
            Self::Text(_) => &[],
            Self::Comment(comment) => comment.children(),
            Self::Container(container) => container.children(),
        }
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::Element(element) => Self::Element(element),
            Node::Text(text) => Self::Text(text),
            Node::Comment(comment) => Self::Comment(comment),
            Node::Container(container) => Self::Container(container),
        }
    }
}

/// Borrowed-view conversion shared by every node type.
///
/// This is the seam the [`Render`](crate::render::Render) and
/// [`Find`](crate::query::Find) traits hang off: implementing `AsNodeRef`
/// gives a type both for free.
pub trait AsNodeRef {
    /// A borrowed view of this node.
    fn as_node_ref(&self) -> NodeRef<'_>;
}

impl AsNodeRef for Node {
    fn as_node_ref(&self) -> NodeRef<'_> {
        self.into()
    }
}

impl AsNodeRef for Element {
    fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::Element(self)
    }
}

impl AsNodeRef for Text {
    fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::Text(self)
    }
}

impl AsNodeRef for Comment {
    fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::Comment(self)
    }
}

impl AsNodeRef for Container {
    fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::Container(self)
    }
}

impl AsNodeRef for NodeRef<'_> {
    fn as_node_ref(&self) -> NodeRef<'_> {
        *self
    }
}

/// Replaces the child at `index`, returning the old child.
fn replace_at(children: &mut [Node], index: usize, node: Node) -> Result<Node> {
    let len = children.len();
    children
        .get_mut(index)
        .map(|slot| std::mem::replace(slot, node))
        .ok_or(Error::IndexOutOfBounds { index, len })
}

/// Removes the child at `index`, shifting subsequent indices down.
fn remove_at(children: &mut Vec<Node>, index: usize) -> Result<Node> {
    if index >= children.len() {
        return Err(Error::IndexOutOfBounds {
            index,
            len: children.len(),
        });
    }
    Ok(children.remove(index))
}

/// A tagged element with an ordered attribute collection and an ordered
/// child sequence.
///
/// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
///
/// "Elements have an associated namespace, namespace prefix, local name ...
/// an element has an associated attribute list." Only the local name (the
/// [`Tag`]) and the attribute list matter to a text emitter.
///
/// The attribute list never contains two entries with the same name:
/// re-adding an attribute through [`Element::add`] merges into the existing
/// entry, while [`Element::set_attr`] overwrites it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    tag: Tag,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an empty element.
    pub fn new(tag: impl Into<Tag>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element and classifies `args` into children and
    /// attributes, exactly as [`Element::add`] would.
    ///
    /// # Errors
    ///
    /// [`Error::VoidChildren`] when `args` contains a child and `tag` is a
    /// void element.
    pub fn try_with(tag: impl Into<Tag>, args: impl IntoArgs) -> Result<Self> {
        let mut element = Self::new(tag);
        let _ = element.add(args)?;
        Ok(element)
    }

    /// Panicking form of [`Element::try_with`], used by the per-tag factory
    /// functions where an illegal composition is a programming error.
    ///
    /// # Panics
    ///
    /// Panics when `args` contains a child and `tag` is a void element.
    #[must_use]
    pub fn with(tag: impl Into<Tag>, args: impl IntoArgs) -> Self {
        match Self::try_with(tag, args) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }

    /// The element's tag.
    #[must_use]
    pub const fn tag(&self) -> &Tag {
        &self.tag
    }

    /// The attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// The children in document order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the element has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Classifies each argument by shape and attaches it: nodes (and
    /// strings/numbers, wrapped as [`Text`]) append to the child sequence,
    /// attributes merge into the attribute collection by name.
    ///
    /// A failed call leaves the element untouched.
    ///
    /// # Errors
    ///
    /// [`Error::VoidChildren`] when `args` contains a child and this is a
    /// void element.
    pub fn add(&mut self, args: impl IntoArgs) -> Result<&mut Self> {
        let args = args.into_args();
        if self.tag.is_void() && args.iter().any(|arg| matches!(arg, Arg::Child(_))) {
            return Err(Error::VoidChildren(self.tag.clone()));
        }
        for arg in args {
            match arg {
                Arg::Child(node) => self.children.push(node),
                Arg::Attr(attribute) => self.merge_attr(attribute),
            }
        }
        Ok(self)
    }

    /// The child at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Mutable counterpart of [`Element::get`].
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.children.get_mut(index)
    }

    /// Replaces the child at `index` in place, returning the old child.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] when `index` is outside the child
    /// sequence.
    pub fn set_child(&mut self, index: usize, node: impl Into<Node>) -> Result<Node> {
        replace_at(&mut self.children, index, node.into())
    }

    /// Removes and returns the child at `index`, shifting subsequent
    /// indices down.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] when `index` is outside the child
    /// sequence.
    pub fn remove_child(&mut self, index: usize) -> Result<Node> {
        remove_at(&mut self.children, index)
    }

    /// The value of the attribute named `name`, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name() == name)
            .map(Attribute::value)
    }

    /// Creates or overwrites the attribute named `name`.
    ///
    /// This is the key-assignment rule: the previous value, if any, is
    /// discarded rather than merged.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        match self
            .attributes
            .iter_mut()
            .find(|attribute| attribute.name() == name)
        {
            Some(existing) => existing.set_value(value),
            None => self.attributes.push(match value.into() {
                AttrValue::Flag => Attribute::flag(name),
                AttrValue::Text(text) => Attribute::new(name, text),
            }),
        }
    }

    /// Merges an attribute into the collection by name: joins with an
    /// existing entry per the [`Attribute::merge`] rule, or appends a new
    /// entry preserving insertion order.
    pub fn merge_attr(&mut self, attribute: Attribute) {
        match self
            .attributes
            .iter_mut()
            .find(|existing| existing.name() == attribute.name())
        {
            Some(existing) => existing.merge(attribute),
            None => self.attributes.push(attribute),
        }
    }

    /// Removes and returns the attribute named `name`. Removing an absent
    /// attribute is a no-op returning `None`.
    pub fn remove_attr(&mut self, name: &str) -> Option<Attribute> {
        let position = self
            .attributes
            .iter()
            .position(|attribute| attribute.name() == name)?;
        Some(self.attributes.remove(position))
    }
}

impl std::ops::Index<usize> for Element {
    type Output = Node;

    /// The child at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of bounds, following `Vec` convention.
    /// [`Element::get`] is the non-panicking form.
    fn index(&self, index: usize) -> &Node {
        match self.children.get(index) {
            Some(node) => node,
            None => panic!(
                "child index {index} out of bounds (len {})",
                self.children.len()
            ),
        }
    }
}

impl std::ops::IndexMut<usize> for Element {
    /// Mutable access to the child at `index`; assigning through it
    /// replaces the child in place.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of bounds, following `Vec` convention.
    fn index_mut(&mut self, index: usize) -> &mut Node {
        let len = self.children.len();
        match self.children.get_mut(index) {
            Some(node) => node,
            None => panic!("child index {index} out of bounds (len {len})"),
        }
    }
}

impl std::ops::Index<&str> for Element {
    type Output = AttrValue;

    /// The value of the attribute named `name`.
    ///
    /// # Panics
    ///
    /// Panics when no such attribute exists, following `HashMap` convention.
    /// [`Element::attr`] is the non-panicking form.
    fn index(&self, name: &str) -> &AttrValue {
        match self.attr(name) {
            Some(value) => value,
            None => panic!("attribute `{name}` does not exist on this element"),
        }
    }
}

/// A leaf node holding a string payload.
///
/// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
///
/// The payload is stored raw; markup-significant characters are escaped by
/// the serializer at emission time, so searching the tree sees exactly the
/// text the caller supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    content: String,
}

impl Text {
    /// Creates a text leaf.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The raw (unescaped) payload.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replaces the payload.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Appends further text onto this leaf. Appending concatenates the
    /// payloads directly rather than nesting a second node.
    pub fn append(&mut self, content: impl Into<Text>) -> &mut Self {
        self.content.push_str(&content.into().content);
        self
    }
}

impl From<&str> for Text {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Text {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

/// A comment node: rendered content wrapped in comment delimiters, with an
/// optional IE-style conditional-compilation directive.
///
/// [§ 4.7 Interface Comment](https://dom.spec.whatwg.org/#interface-comment)
///
/// Without a condition the body renders between `<!--` and `-->`; with one
/// it renders between `<!--[if CONDITION]>` and `<![endif]-->`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    children: Vec<Node>,
    condition: Option<String>,
}

impl Comment {
    /// Creates an empty comment.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            children: Vec::new(),
            condition: None,
        }
    }

    /// Creates a comment from a body of children.
    ///
    /// # Errors
    ///
    /// [`Error::AttributesNotAllowed`] when `args` contains an attribute;
    /// comments carry no attributes.
    pub fn try_with(args: impl IntoArgs) -> Result<Self> {
        let mut comment = Self::new();
        let _ = comment.add(args)?;
        Ok(comment)
    }

    /// Sets the conditional directive, e.g. `"lt IE 9"`.
    pub fn set_condition(&mut self, condition: impl Into<String>) {
        self.condition = Some(condition.into());
    }

    /// Builder form of [`Comment::set_condition`].
    #[must_use]
    pub fn conditional(mut self, condition: impl Into<String>) -> Self {
        self.set_condition(condition);
        self
    }

    /// The conditional directive, if any.
    #[must_use]
    pub fn condition(&self) -> Option<&str> {
        self.condition.as_deref()
    }

    /// The body in document order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The number of body nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the body is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends body nodes. A failed call leaves the comment untouched.
    ///
    /// # Errors
    ///
    /// [`Error::AttributesNotAllowed`] when `args` contains an attribute.
    pub fn add(&mut self, args: impl IntoArgs) -> Result<&mut Self> {
        let args = args.into_args();
        if args.iter().any(|arg| matches!(arg, Arg::Attr(_))) {
            return Err(Error::AttributesNotAllowed(NodeKind::Comment));
        }
        self.children.extend(args.into_iter().filter_map(Arg::into_child));
        Ok(self)
    }

    /// Replaces the body node at `index`, returning the old node.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] when `index` is outside the body.
    pub fn set_child(&mut self, index: usize, node: impl Into<Node>) -> Result<Node> {
        replace_at(&mut self.children, index, node.into())
    }

    /// Removes and returns the body node at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] when `index` is outside the body.
    pub fn remove_child(&mut self, index: usize) -> Result<Node> {
        remove_at(&mut self.children, index)
    }
}

impl Default for Comment {
    fn default() -> Self {
        Self::new()
    }
}

/// An untagged grouping of sibling nodes, transparent at render time.
///
/// A container exists purely to hold siblings: it has no tag, carries no
/// attributes, and contributes no markup of its own. It is the result type
/// of the `+` and `*` operators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    children: Vec<Node>,
}

impl Container {
    /// Creates an empty container.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Creates a container from a sequence of children.
    ///
    /// # Errors
    ///
    /// [`Error::AttributesNotAllowed`] when `args` contains an attribute;
    /// containers carry no attributes.
    pub fn try_with(args: impl IntoArgs) -> Result<Self> {
        let mut container = Self::new();
        let _ = container.add(args)?;
        Ok(container)
    }

    /// Creates a container directly from owned nodes.
    #[must_use]
    pub fn from_nodes(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Dissolves the container into its children.
    #[must_use]
    pub fn into_nodes(self) -> Vec<Node> {
        self.children
    }

    /// The children in document order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the container is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends a single child.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Appends children. A failed call leaves the container untouched.
    ///
    /// # Errors
    ///
    /// [`Error::AttributesNotAllowed`] when `args` contains an attribute.
    pub fn add(&mut self, args: impl IntoArgs) -> Result<&mut Self> {
        let args = args.into_args();
        if args.iter().any(|arg| matches!(arg, Arg::Attr(_))) {
            return Err(Error::AttributesNotAllowed(NodeKind::Container));
        }
        self.children.extend(args.into_iter().filter_map(Arg::into_child));
        Ok(self)
    }

    /// The child at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Mutable counterpart of [`Container::get`].
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.children.get_mut(index)
    }

    /// Replaces the child at `index`, returning the old child.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] when `index` is outside the child
    /// sequence.
    pub fn set_child(&mut self, index: usize, node: impl Into<Node>) -> Result<Node> {
        replace_at(&mut self.children, index, node.into())
    }

    /// Removes and returns the child at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] when `index` is outside the child
    /// sequence.
    pub fn remove_child(&mut self, index: usize) -> Result<Node> {
        remove_at(&mut self.children, index)
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for Container {
    type Output = Node;

    /// The child at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of bounds, following `Vec` convention.
    fn index(&self, index: usize) -> &Node {
        match self.children.get(index) {
            Some(node) => node,
            None => panic!(
                "child index {index} out of bounds (len {})",
                self.children.len()
            ),
        }
    }
}

impl std::ops::IndexMut<usize> for Container {
    /// Mutable access to the child at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of bounds, following `Vec` convention.
    fn index_mut(&mut self, index: usize) -> &mut Node {
        let len = self.children.len();
        match self.children.get_mut(index) {
            Some(node) => node,
            None => panic!("child index {index} out of bounds (len {len})"),
        }
    }
}
