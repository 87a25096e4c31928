//! Tests for the composition engine: argument classification, attribute
//! merge vs. overwrite, and index/key access.

use weaver_dom::{Attribute, Element, Error, NodeKind, Tag, Text};

/// Helper to build an element with text content.
fn tagged(tag: Tag, content: &str) -> Element {
    Element::with(tag, (content,))
}

// ========== argument classification ==========

#[test]
fn test_constructor_classifies_by_shape() {
    let div = Element::try_with(
        Tag::Div,
        (
            tagged(Tag::H1, "Title"),
            "loose text",
            42,
            Attribute::new("class", "container"),
        ),
    )
    .unwrap();

    // Three children (element, text, number-as-text), one attribute.
    assert_eq!(3, div.len());
    assert_eq!(1, div.attributes().len());
    assert_eq!(NodeKind::Element, div[0].kind());
    assert_eq!(NodeKind::Text, div[1].kind());
    assert_eq!("42", div[2].as_text().unwrap().content());
    assert_eq!(Some("container"), div["class"].as_str());
}

#[test]
fn test_add_matches_constructor_classification() {
    let mut div = Element::new(Tag::Div);
    let _ = div
        .add((Attribute::new("id", "main"), tagged(Tag::P, "body")))
        .unwrap();

    assert_eq!(1, div.len());
    assert_eq!(Some("main"), div["id"].as_str());
}

#[test]
fn test_void_element_rejects_children() {
    assert_eq!(
        Err(Error::VoidChildren(Tag::Hr)),
        Element::try_with(Tag::Hr, ("text",)).map(|_| ())
    );

    // A failed add leaves the element untouched.
    let mut hr = Element::with(Tag::Hr, (Attribute::new("class", "rule"),));
    let result = hr.add(("text", Attribute::new("id", "x"))).map(|_| ());
    assert_eq!(Err(Error::VoidChildren(Tag::Hr)), result);
    assert_eq!(0, hr.len());
    assert_eq!(None, hr.attr("id"));
}

// ========== attribute merge vs. overwrite ==========

#[test]
fn test_add_merges_same_name() {
    let mut p = Element::with(Tag::P, (Attribute::new("class", "lead"),));
    let _ = p.add((Attribute::new("class", "wide"),)).unwrap();

    // Merged, not duplicated: one entry, space-joined.
    assert_eq!(1, p.attributes().len());
    assert_eq!(Some("lead wide"), p["class"].as_str());
}

#[test]
fn test_set_attr_overwrites() {
    let mut p = Element::with(Tag::P, (Attribute::new("class", "lead"),));
    p.set_attr("class", "narrow");
    assert_eq!(Some("narrow"), p["class"].as_str());
}

#[test]
fn test_attributes_keep_insertion_order() {
    let p = Element::with(
        Tag::P,
        (
            Attribute::new("id", "p1"),
            Attribute::new("class", "lead"),
            Attribute::flag("hidden"),
        ),
    );
    let names: Vec<&str> = p.attributes().iter().map(|a| a.name()).collect();
    assert_eq!(vec!["id", "class", "hidden"], names);
}

#[test]
fn test_remove_attr_policy() {
    let mut p = Element::with(Tag::P, (Attribute::new("id", "p1"),));
    assert!(p.remove_attr("id").is_some());
    // Removing an absent attribute is a documented no-op.
    assert!(p.remove_attr("id").is_none());
}

// ========== index access ==========

#[test]
fn test_set_and_remove_child() {
    let mut div = Element::try_with(
        Tag::Div,
        (tagged(Tag::P, "a"), Element::new(Tag::Br), tagged(Tag::P, "b")),
    )
    .unwrap();

    let old = div.set_child(2, tagged(Tag::Strong, "x")).unwrap();
    assert_eq!(Tag::P, *old.as_element().unwrap().tag());

    let removed = div.remove_child(1).unwrap();
    assert_eq!(Tag::Br, *removed.as_element().unwrap().tag());

    // Final tree: <p>a</p> then <strong>x</strong>.
    assert_eq!(2, div.len());
    assert_eq!(Tag::P, *div[0].as_element().unwrap().tag());
    assert_eq!(Tag::Strong, *div[1].as_element().unwrap().tag());
}

#[test]
fn test_out_of_bounds_reports_without_corruption() {
    let mut div = Element::try_with(Tag::Div, (tagged(Tag::P, "only"),)).unwrap();

    assert_eq!(
        Err(Error::IndexOutOfBounds { index: 3, len: 1 }),
        div.set_child(3, Text::new("x")).map(|_| ())
    );
    assert_eq!(
        Err(Error::IndexOutOfBounds { index: 1, len: 1 }),
        div.remove_child(1).map(|_| ())
    );
    assert_eq!(1, div.len());
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_index_panics_out_of_bounds() {
    let div = Element::new(Tag::Div);
    let _ = &div[0];
}

#[test]
#[should_panic(expected = "does not exist")]
fn test_key_index_panics_when_absent() {
    let div = Element::new(Tag::Div);
    let _ = &div["class"];
}

// ========== other composites ==========

#[test]
fn test_container_rejects_attributes() {
    use weaver_dom::Container;

    let result = Container::try_with((Attribute::new("id", "x"),)).map(|_| ());
    assert_eq!(
        Err(Error::AttributesNotAllowed(NodeKind::Container)),
        result
    );
}

#[test]
fn test_comment_rejects_attributes() {
    use weaver_dom::Comment;

    let result = Comment::try_with((Attribute::new("id", "x"),)).map(|_| ());
    assert_eq!(Err(Error::AttributesNotAllowed(NodeKind::Comment)), result);
}

#[test]
fn test_text_append_concatenates() {
    let mut text = Text::new("one");
    let _ = text.append(" two").append(3);
    assert_eq!("one two3", text.content());
}

#[test]
fn test_repeat_zero_is_invalid() {
    use weaver_dom::Node;

    let node = Node::from(tagged(Tag::P, "x"));
    assert_eq!(Err(Error::ZeroRepeat), node.repeat(0).map(|_| ()));
    assert_eq!(4, node.repeat(4).unwrap().len());
}
