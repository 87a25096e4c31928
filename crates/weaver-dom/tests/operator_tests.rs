//! Tests for the `+` sibling-merge and `*` replication operators.

use weaver_dom::{Container, Element, Node, Render, Tag};

/// Helper to build an element with text content.
fn tagged(tag: Tag, content: &str) -> Element {
    Element::with(tag, (content,))
}

// ========== sibling merge ==========

#[test]
fn test_add_renders_without_wrapping_tag() {
    let pair = tagged(Tag::P, "First") + tagged(Tag::P, "Second");
    assert_eq!("<p>First</p><p>Second</p>", pair.display(false));
    assert_eq!(
        "<p>\n  First\n</p>\n<p>\n  Second\n</p>",
        pair.display(true)
    );
}

#[test]
fn test_add_flattens_instead_of_nesting() {
    let chain = tagged(Tag::Em, "a") + tagged(Tag::Em, "b") + tagged(Tag::Em, "c");
    assert_eq!(3, chain.len());
    assert!(chain.children().iter().all(|n| n.as_element().is_some()));
}

#[test]
fn test_add_absorbs_on_either_side() {
    let tail = Container::try_with((tagged(Tag::P, "b"), tagged(Tag::P, "c"))).unwrap();
    let front_joined = tagged(Tag::P, "a") + tail;
    assert_eq!(
        "<p>a</p><p>b</p><p>c</p>",
        front_joined.display(false)
    );

    let head = Container::try_with((tagged(Tag::P, "a"), tagged(Tag::P, "b"))).unwrap();
    let back_joined = head + tagged(Tag::P, "c");
    assert_eq!("<p>a</p><p>b</p><p>c</p>", back_joined.display(false));
}

#[test]
fn test_add_merges_two_containers() {
    let left = Container::try_with((tagged(Tag::P, "a"),)).unwrap();
    let right = Container::try_with((tagged(Tag::P, "b"),)).unwrap();
    let merged = left + right;
    assert_eq!(2, merged.len());
}

#[test]
fn test_add_mixes_variants() {
    let mixed = tagged(Tag::Em, "emphasized") + Element::new(Tag::Hr);
    assert_eq!("<em>\n  emphasized\n</em>\n<hr>", mixed.display(true));
}

// ========== replication ==========

#[test]
fn test_mul_renders_independent_blocks() {
    let triple = tagged(Tag::P, "Paragraph") * 3;
    assert_eq!(
        "<p>Paragraph</p><p>Paragraph</p><p>Paragraph</p>",
        triple.display(false)
    );
}

#[test]
fn test_mul_deep_copies_do_not_alias() {
    let mut triple = tagged(Tag::P, "Paragraph") * 3;

    // Mutate the first copy's text; the others must be unaffected.
    triple[0]
        .as_element_mut()
        .unwrap()
        .get_mut(0)
        .unwrap()
        .as_text_mut()
        .unwrap()
        .set_content("Changed");

    assert_eq!(
        "<p>Changed</p><p>Paragraph</p><p>Paragraph</p>",
        triple.display(false)
    );
}

#[test]
fn test_mul_copies_are_structurally_equal() {
    let source = Node::from(tagged(Tag::Li, "item"));
    let copies = source.repeat(4).unwrap();
    assert!(copies.children().iter().all(|n| *n == source));
}
