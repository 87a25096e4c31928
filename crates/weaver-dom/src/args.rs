//! Argument classification for constructors and `add`.
//!
//! The composition protocol accepts heterogeneous argument lists — child
//! nodes, attributes, bare strings and numbers — and classifies each one by
//! shape. In the Rust rendition the classification happens in the type
//! system: anything convertible to [`Arg`] is a legal argument, and tuples
//! of such values form the argument lists that constructors and `add` share.
//!
//! ```
//! use weaver_dom::{Attribute, Element, Tag};
//!
//! let card = Element::with(
//!     Tag::Div,
//!     (
//!         Attribute::new("class", "card"),
//!         Element::with(Tag::H2, ("Tycho",)),
//!         "Station overview",
//!     ),
//! );
//! assert_eq!(2, card.len());
//! ```

use crate::attr::Attribute;
use crate::node::{Comment, Container, Element, Node, Text};

/// A single classified argument: either a child node or an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Appended to the target's child sequence.
    Child(Node),
    /// Merged into the target's attribute collection by name.
    Attr(Attribute),
}

impl Arg {
    /// The child node, if this argument classified as one.
    #[must_use]
    pub fn into_child(self) -> Option<Node> {
        match self {
            Self::Child(node) => Some(node),
            Self::Attr(_) => None,
        }
    }
}

impl From<Node> for Arg {
    fn from(node: Node) -> Self {
        Self::Child(node)
    }
}

impl From<Element> for Arg {
    fn from(element: Element) -> Self {
        Self::Child(Node::Element(element))
    }
}

impl From<Text> for Arg {
    fn from(text: Text) -> Self {
        Self::Child(Node::Text(text))
    }
}

impl From<Comment> for Arg {
    fn from(comment: Comment) -> Self {
        Self::Child(Node::Comment(comment))
    }
}

impl From<Container> for Arg {
    fn from(container: Container) -> Self {
        Self::Child(Node::Container(container))
    }
}

impl From<Attribute> for Arg {
    fn from(attribute: Attribute) -> Self {
        Self::Attr(attribute)
    }
}

impl From<&str> for Arg {
    fn from(content: &str) -> Self {
        Self::Child(Node::Text(Text::new(content)))
    }
}

impl From<String> for Arg {
    fn from(content: String) -> Self {
        Self::Child(Node::Text(Text::new(content)))
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Self::Text(Text::new(content))
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Self::Text(Text::new(content))
    }
}

/// Numbers classify as text nodes, matching the constructor protocol's
/// treatment of scalar arguments.
macro_rules! impl_numeric_args {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Text {
                fn from(value: $ty) -> Self {
                    Self::new(value.to_string())
                }
            }

            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Self::Text(Text::from(value))
                }
            }

            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Self::Child(Node::from(value))
                }
            }
        )+
    };
}

impl_numeric_args!(i32, i64, u32, u64, usize, f32, f64);

/// An argument list for a constructor or an `add` call.
///
/// Implemented by `()` (no arguments), any single value convertible to
/// [`Arg`], tuples of such values up to arity twelve, arrays, and
/// `Vec<Arg>` for lists built at runtime.
pub trait IntoArgs {
    /// Classifies the list into individual arguments, in order.
    fn into_args(self) -> Vec<Arg>;
}

impl IntoArgs for () {
    fn into_args(self) -> Vec<Arg> {
        Vec::new()
    }
}

impl IntoArgs for Vec<Arg> {
    fn into_args(self) -> Vec<Arg> {
        self
    }
}

impl<T: Into<Arg>, const N: usize> IntoArgs for [T; N] {
    fn into_args(self) -> Vec<Arg> {
        self.into_iter().map(Into::into).collect()
    }
}

/// Single values are one-element argument lists.
macro_rules! impl_single_arg {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoArgs for $ty {
                fn into_args(self) -> Vec<Arg> {
                    vec![self.into()]
                }
            }
        )+
    };
}

impl_single_arg!(
    Node, Element, Text, Comment, Container, Attribute, &str, String, i32, i64, u32, u64, usize,
    f32, f64
);

macro_rules! impl_tuple_args {
    ($($name:ident),+) => {
        impl<$($name: Into<Arg>),+> IntoArgs for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_args(self) -> Vec<Arg> {
                let ($($name,)+) = self;
                vec![$($name.into()),+]
            }
        }
    };
}

impl_tuple_args!(A);
impl_tuple_args!(A, B);
impl_tuple_args!(A, B, C);
impl_tuple_args!(A, B, C, D);
impl_tuple_args!(A, B, C, D, E);
impl_tuple_args!(A, B, C, D, E, F);
impl_tuple_args!(A, B, C, D, E, F, G);
impl_tuple_args!(A, B, C, D, E, F, G, H);
impl_tuple_args!(A, B, C, D, E, F, G, H, I);
impl_tuple_args!(A, B, C, D, E, F, G, H, I, J);
impl_tuple_args!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple_args!(A, B, C, D, E, F, G, H, I, J, K, L);

#[cfg(test)]
mod tests {
    use super::{Arg, IntoArgs};
    use crate::attr::Attribute;
    use crate::node::{Element, NodeKind};
    use crate::tag::Tag;

    #[test]
    fn test_classification_by_shape() {
        let args = (Element::new(Tag::P), Attribute::flag("hidden"), "plain", 7).into_args();
        assert_eq!(4, args.len());
        assert!(matches!(&args[0], Arg::Child(node) if node.kind() == NodeKind::Element));
        assert!(matches!(&args[1], Arg::Attr(_)));
        assert!(matches!(&args[2], Arg::Child(node) if node.kind() == NodeKind::Text));
        assert!(matches!(&args[3], Arg::Child(node) if node.kind() == NodeKind::Text));
    }

    #[test]
    fn test_empty_and_array_lists() {
        assert!(().into_args().is_empty());
        assert_eq!(3, ["a", "b", "c"].into_args().len());
    }
}
