//! Tests for the serializer: pretty and compact layout, void elements,
//! attribute syntax, comments, and escaping.

use weaver_dom::{Attribute, Comment, Element, Render, RenderOptions, Tag};

/// Helper to build an element with text content.
fn tagged(tag: Tag, content: &str) -> Element {
    Element::with(tag, (content,))
}

// ========== pretty layout ==========

#[test]
fn test_pretty_basic_structure() {
    assert_eq!("<p>\n</p>", Element::new(Tag::P).to_string());
    assert_eq!("<p>\n  Paragraph\n</p>", tagged(Tag::P, "Paragraph").to_string());
    assert_eq!(
        "<div>\n  <p>\n    Paragraph\n  </p>\n</div>",
        Element::with(Tag::Div, (tagged(Tag::P, "Paragraph"),)).to_string()
    );
}

#[test]
fn test_pretty_page_fragment() {
    let div = Element::with(
        Tag::Div,
        (
            tagged(Tag::H1, "Title"),
            tagged(Tag::P, "Paragraph"),
            Attribute::new("class", "container"),
            Element::new(Tag::Hr),
        ),
    );
    assert_eq!(
        "<div class=\"container\">\n  <h1>\n    Title\n  </h1>\n  <p>\n    Paragraph\n  </p>\n  <hr>\n</div>",
        div.to_string()
    );
}

#[test]
fn test_custom_indent_unit() {
    let div = Element::with(Tag::Div, (tagged(Tag::P, "Paragraph"),));
    let options = RenderOptions {
        indent: " ".to_string(),
        ..RenderOptions::default()
    };
    assert_eq!("<div>\n <p>\n  Paragraph\n </p>\n</div>", div.render(&options));
}

// ========== compact layout ==========

#[test]
fn test_compact_runs_on_one_line() {
    let div = Element::with(Tag::Div, (tagged(Tag::H1, "Header"),));
    assert_eq!("<div><h1>Header</h1></div>", div.display(false));
}

#[test]
fn test_pretty_and_compact_differ_but_are_deterministic() {
    let div = Element::with(Tag::Div, (tagged(Tag::P, "x"),));
    assert_ne!(div.display(true), div.display(false));
    assert_eq!(div.display(true), div.display(true));
    assert_eq!(div.display(false), div.display(false));
}

// ========== void elements ==========

#[test]
fn test_void_elements_never_close() {
    assert_eq!("<br>", Element::new(Tag::Br).to_string());
    assert_eq!("<hr>", Element::new(Tag::Hr).display(false));
    assert_eq!(
        "<img src=\"logo.png\">",
        Element::with(Tag::Img, (Attribute::new("src", "logo.png"),)).display(false)
    );
}

// ========== attribute syntax ==========

#[test]
fn test_attribute_order_and_boolean_form() {
    let input = Element::with(
        Tag::Input,
        (
            Attribute::new("type", "text"),
            Attribute::new("name", "user"),
            Attribute::flag("required"),
        ),
    );
    assert_eq!(
        "<input type=\"text\" name=\"user\" required>",
        input.display(false)
    );
}

// ========== comments ==========

#[test]
fn test_plain_comment() {
    let comment = Comment::try_with((tagged(Tag::P, "Paragraph"),)).unwrap();
    assert_eq!("<!--<p>Paragraph</p>-->", comment.display(false));
    assert_eq!("<!--\n  <p>\n    Paragraph\n  </p>\n-->", comment.display(true));
}

#[test]
fn test_conditional_comment() {
    let comment = Comment::try_with(("This is conditional comment",))
        .unwrap()
        .conditional("IE 8");
    assert_eq!(
        "<!--[if IE 8]>\n  This is conditional comment\n<![endif]-->",
        comment.display(true)
    );

    let compact = Comment::try_with((tagged(Tag::P, "Paragraph"),))
        .unwrap()
        .conditional("lt IE 9");
    assert_eq!(
        "<!--[if lt IE 9]><p>Paragraph</p><![endif]-->",
        compact.display(false)
    );
}

#[test]
fn test_empty_comment_closes_inline() {
    assert_eq!("<!---->", Comment::new().to_string());
}

// ========== escaping ==========

#[test]
fn test_text_escapes_markup_characters() {
    let p = tagged(Tag::P, "1 < 2 & 3 > 2");
    assert_eq!("<p>1 &lt; 2 &amp; 3 &gt; 2</p>", p.display(false));
}

#[test]
fn test_attribute_values_escape_quotes_and_ampersands() {
    let a = Element::with(
        Tag::A,
        (Attribute::new("href", "/q?a=1&b=\"two\""), "link"),
    );
    assert_eq!(
        "<a href=\"/q?a=1&amp;b=&quot;two&quot;\">link</a>",
        a.display(false)
    );
}
