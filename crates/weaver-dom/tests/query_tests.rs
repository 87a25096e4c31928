//! Tests for the matcher: substring probes, structural patterns, partial
//! attribute matching, and document-order results.

use weaver_dom::{Attribute, Container, Element, Find, NodeKind, Tag, Text};

/// A small page used by most tests:
///
/// ```text
/// <div id="page">
///   <h1>Site title</h1>
///   <div class="body">
///     <p class="lead">intro text</p>
///     <p>plain text</p>
///   </div>
/// </div>
/// ```
fn page() -> Element {
    Element::with(
        Tag::Div,
        (
            Attribute::new("id", "page"),
            Element::with(Tag::H1, ("Site title",)),
            Element::with(
                Tag::Div,
                (
                    Attribute::new("class", "body"),
                    Element::with(Tag::P, (Attribute::new("class", "lead"), "intro text")),
                    Element::with(Tag::P, ("plain text",)),
                ),
            ),
        ),
    )
}

// ========== substring queries ==========

#[test]
fn test_substring_finds_text_nodes() {
    let page = page();
    let hits = page.find("text");
    assert_eq!(2, hits.len());
    assert_eq!("intro text", hits[0].as_text().unwrap().content());
    assert_eq!("plain text", hits[1].as_text().unwrap().content());
}

#[test]
fn test_substring_without_hits_is_empty() {
    assert!(page().find("no such needle").is_empty());
}

// ========== structural patterns ==========

#[test]
fn test_tag_only_pattern_includes_root() {
    let page = page();
    let divs = page.find(Element::new(Tag::Div));
    assert_eq!(2, divs.len());
    // Pre-order: the root itself comes first.
    assert_eq!(Some("page"), divs[0].as_element().unwrap()["id"].as_str());
    assert_eq!(Some("body"), divs[1].as_element().unwrap()["class"].as_str());
}

#[test]
fn test_attribute_pattern_is_partial() {
    let page = page();
    // The query names only the class; the candidate's extra text child and
    // the sibling paragraph without the class are handled correctly.
    let leads = page.find(Element::with(Tag::P, (Attribute::new("class", "lead"),)));
    assert_eq!(1, leads.len());

    let wrong_value = page.find(Element::with(Tag::P, (Attribute::new("class", "x"),)));
    assert!(wrong_value.is_empty());
}

#[test]
fn test_children_pattern_requires_full_match() {
    let page = page();

    let exact = page.find(Element::with(Tag::H1, ("Site title",)));
    assert_eq!(1, exact.len());

    // A children constraint pins the entire child sequence.
    let wrong_content = page.find(Element::with(Tag::H1, ("Other title",)));
    assert!(wrong_content.is_empty());
}

#[test]
fn test_text_pattern_matches_equal_content() {
    let page = page();
    assert_eq!(1, page.find(Text::new("plain text")).len());
    // Unlike a substring probe, a text pattern is exact.
    assert!(page.find(Text::new("plain")).is_empty());
}

#[test]
fn test_document_order_is_preorder() {
    let page = page();
    let kinds: Vec<NodeKind> = page
        .find(Element::new(Tag::P))
        .iter()
        .map(|n| n.kind())
        .collect();
    assert_eq!(vec![NodeKind::Element, NodeKind::Element], kinds);

    let texts: Vec<&str> = page
        .find("t")
        .iter()
        .map(|n| n.as_text().unwrap().content())
        .collect();
    // Root-first, children left to right.
    assert_eq!(vec!["Site title", "intro text", "plain text"], texts);
}

// ========== container roots ==========

#[test]
fn test_find_searches_container_children() {
    let group = Element::with(Tag::P, ("a",)) + Element::with(Tag::P, ("b",));
    assert_eq!(2, group.find(Element::new(Tag::P)).len());

    // A childless container pattern matches any container, including the
    // root group itself.
    assert_eq!(1, group.find(Container::new()).len());
}
