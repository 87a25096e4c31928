//! Per-tag factory functions.
//!
//! One thin factory per entry in the static tag table, each a call to
//! [`Element::with`] with the matching [`Tag`]. Factories accept the same
//! classified argument lists as `add`:
//!
//! ```
//! use weaver_html::attrs::class_;
//! use weaver_html::tags::{div, h1, hr, p};
//! use weaver_dom::Render;
//!
//! let page = div((h1(("Title",)), p(("Paragraph",)), class_("container"), hr(())));
//! assert_eq!(
//!     "<div class=\"container\"><h1>Title</h1><p>Paragraph</p><hr></div>",
//!     page.display(false)
//! );
//! ```
//!
//! Like indexing out of bounds, an illegal composition through a factory is
//! a programming error: passing children to a void-element factory panics.
//! [`Element::try_with`] is the fallible path for argument lists built at
//! runtime.

use weaver_dom::{Comment, Container, Element, IntoArgs, Tag, Text};

macro_rules! tag_factories {
    ($($(#[$doc:meta])* $name:ident => $tag:ident),+ $(,)?) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $name(args: impl IntoArgs) -> Element {
                Element::with(Tag::$tag, args)
            }
        )+
    };
}

tag_factories! {
    // Basic HTML
    /// The document type declaration. Void.
    doctype => Doctype,
    /// Builds an `<html>` root element.
    html => Html,
    /// Builds a `<head>` element.
    head => Head,
    /// Builds a `<title>` element.
    title => Title,
    /// Builds a `<body>` element.
    body => Body,
    /// Builds an `<h1>` heading.
    h1 => H1,
    /// Builds an `<h2>` heading.
    h2 => H2,
    /// Builds an `<h3>` heading.
    h3 => H3,
    /// Builds an `<h4>` heading.
    h4 => H4,
    /// Builds an `<h5>` heading.
    h5 => H5,
    /// Builds an `<h6>` heading.
    h6 => H6,
    /// Builds a `<p>` paragraph.
    p => P,
    /// Builds a `<p>` paragraph. Alias of [`p`].
    paragraph => P,
    /// Builds a `<br>` line break. Void.
    br => Br,
    /// Builds an `<hr>` thematic break. Void.
    hr => Hr,

    // Formatting
    /// Builds an `<acronym>` element (obsolete).
    acronym => Acronym,
    /// Builds an `<abbr>` element.
    abbr => Abbr,
    /// Builds an `<address>` element.
    address => Address,
    /// Builds a `<b>` element.
    b => B,
    /// Builds a `<bdi>` element.
    bdi => Bdi,
    /// Builds a `<bdo>` element.
    bdo => Bdo,
    /// Builds a `<big>` element (obsolete).
    big => Big,
    /// Builds a `<blockquote>` element.
    blockquote => Blockquote,
    /// Builds a `<center>` element (obsolete).
    center => Center,
    /// Builds a `<cite>` element.
    cite => Cite,
    /// Builds a `<code>` element.
    code => Code,
    /// Builds a `<del>` element.
    del => Del,
    /// Builds a `<dfn>` element.
    dfn => Dfn,
    /// Builds an `<em>` element.
    em => Em,
    /// Builds a `<font>` element (obsolete).
    font => Font,
    /// Builds an `<i>` element.
    i => I,
    /// Builds an `<ins>` element.
    ins => Ins,
    /// Builds a `<kbd>` element.
    kbd => Kbd,
    /// Builds a `<mark>` element.
    mark => Mark,
    /// Builds a `<meter>` element.
    meter => Meter,
    /// Builds a `<pre>` element.
    pre => Pre,
    /// Builds a `<progress>` element.
    progress => Progress,
    /// Builds a `<q>` element.
    q => Q,
    /// Builds an `<rp>` element.
    rp => Rp,
    /// Builds an `<rt>` element.
    rt => Rt,
    /// Builds a `<ruby>` element.
    ruby => Ruby,
    /// Builds an `<s>` element.
    s => S,
    /// Builds a `<samp>` element.
    samp => Samp,
    /// Builds a `<small>` element.
    small => Small,
    /// Builds a `<strike>` element (obsolete).
    strike => Strike,
    /// Builds a `<strong>` element.
    strong => Strong,
    /// Builds a `<sub>` element.
    sub => Sub,
    /// Builds a `<sup>` element.
    sup => Sup,
    /// Builds a `<template>` element.
    template => Template,
    /// Builds a `<time>` element.
    time => Time,
    /// Builds a `<tt>` element (obsolete).
    tt => Tt,
    /// Builds a `<u>` element.
    u => U,
    /// Builds a `<var>` element.
    var => Var,
    /// Builds a `<wbr>` line-break opportunity. Void.
    wbr => Wbr,

    // Forms and input
    /// Builds a `<form>` element.
    form => Form,
    /// Builds an `<input>` control. Void.
    input => Input,
    /// Builds a `<textarea>` element.
    textarea => Textarea,
    /// Builds a `<button>` element.
    button => Button,
    /// Builds a `<select>` element.
    select => Select,
    /// Builds an `<optgroup>` element.
    optgroup => Optgroup,
    /// Builds an `<option>` element.
    option => Option,
    /// Builds a `<label>` element.
    label => Label,
    /// Builds a `<fieldset>` element.
    fieldset => Fieldset,
    /// Builds a `<legend>` element.
    legend => Legend,
    /// Builds a `<datalist>` element.
    datalist => Datalist,
    /// Builds an `<output>` element.
    output => Output,

    // Frames
    /// Builds a `<frame>` element (obsolete).
    frame => Frame,
    /// Builds a `<frameset>` element (obsolete).
    frameset => Frameset,
    /// Builds a `<noframes>` element (obsolete).
    noframes => Noframes,
    /// Builds an `<iframe>` element.
    iframe => Iframe,

    // Images
    /// Builds an `<img>` element. Void.
    img => Img,
    /// Builds a `<map>` element.
    map => Map,
    /// Builds an `<area>` element. Void.
    area => Area,
    /// Builds a `<canvas>` element.
    canvas => Canvas,
    /// Builds a `<figcaption>` element.
    figcaption => Figcaption,
    /// Builds a `<figure>` element.
    figure => Figure,
    /// Builds a `<picture>` element.
    picture => Picture,
    /// Builds an `<svg>` container element.
    svg => Svg,

    // Audio / video
    /// Builds an `<audio>` element.
    audio => Audio,
    /// Builds a `<source>` element. Void.
    source => Source,
    /// Builds a `<track>` element. Void.
    track => Track,
    /// Builds a `<video>` element.
    video => Video,

    // Links
    /// Builds an `<a>` hyperlink.
    a => A,
    /// Builds a `<link>` element. Void.
    link => Link,
    /// Builds a `<nav>` element.
    nav => Nav,

    // Lists
    /// Builds a `<menu>` list.
    menu => Menu,
    /// Builds a `<ul>` unordered list.
    ul => Ul,
    /// Builds an `<ol>` ordered list.
    ol => Ol,
    /// Builds an `<li>` list item.
    li => Li,
    /// Builds a `<dir>` element (obsolete).
    dir => Dir,
    /// Builds a `<dl>` description list.
    dl => Dl,
    /// Builds a `<dt>` term.
    dt => Dt,
    /// Builds a `<dd>` description.
    dd => Dd,

    // Tables
    /// Builds a `<caption>` element.
    caption => Caption,
    /// Builds a `<td>` table cell.
    td => Td,
    /// Builds a `<tr>` table row.
    tr => Tr,
    /// Builds a `<th>` header cell.
    th => Th,
    /// Builds a `<tfoot>` group.
    tfoot => Tfoot,
    /// Builds a `<tbody>` group.
    tbody => Tbody,
    /// Builds a `<thead>` group.
    thead => Thead,
    /// Builds a `<col>` element. Void.
    col => Col,
    /// Builds a `<colgroup>` element.
    colgroup => Colgroup,
    /// Builds a `<table>` element. See [`crate::table`] for the
    /// row/column-data shorthand.
    table => Table,

    // Styles and semantics
    /// Builds a `<style>` element.
    style => Style,
    /// Builds a `<div>` element.
    div => Div,
    /// Builds a `<span>` element.
    span => Span,
    /// Builds a `<header>` element.
    header => Header,
    /// Builds an `<hgroup>` element.
    hgroup => Hgroup,
    /// Builds a `<footer>` element.
    footer => Footer,
    /// Builds a `<main>` element.
    main => Main,
    /// Builds a `<section>` element.
    section => Section,
    /// Builds a `<search>` element.
    search => Search,
    /// Builds an `<article>` element.
    article => Article,
    /// Builds an `<aside>` element.
    aside => Aside,
    /// Builds a `<details>` element.
    details => Details,
    /// Builds a `<dialog>` element.
    dialog => Dialog,
    /// Builds a `<summary>` element.
    summary => Summary,
    /// Builds a `<data>` element.
    data => Data,

    // Meta info
    /// Builds a `<meta>` element. Void.
    meta => Meta,
    /// Builds a `<base>` element. Void.
    base => Base,
    /// Builds a `<basefont>` element (obsolete).
    basefont => Basefont,

    // Programming
    /// Builds a `<script>` element.
    script => Script,
    /// Builds a `<noscript>` element.
    noscript => Noscript,
    /// Builds an `<applet>` element (obsolete).
    applet => Applet,
    /// Builds an `<embed>` element. Void.
    embed => Embed,
    /// Builds an `<object>` element.
    object => Object,
    /// Builds a `<param>` element.
    param => Param,
}

/// Builds an element with a tag outside the static table.
#[must_use]
pub fn custom(tag: &str, args: impl IntoArgs) -> Element {
    Element::with(Tag::from(tag), args)
}

/// Builds a text leaf.
pub fn text(content: impl Into<Text>) -> Text {
    content.into()
}

/// Builds an untagged container of siblings.
///
/// # Panics
///
/// Panics when `args` contains an attribute; containers carry no
/// attributes.
#[must_use]
pub fn container(args: impl IntoArgs) -> Container {
    match Container::try_with(args) {
        Ok(container) => container,
        Err(error) => panic!("{error}"),
    }
}

/// Builds a comment wrapping the given body.
///
/// # Panics
///
/// Panics when `args` contains an attribute; comments carry no attributes.
#[must_use]
pub fn comment(args: impl IntoArgs) -> Comment {
    match Comment::try_with(args) {
        Ok(comment) => comment,
        Err(error) => panic!("{error}"),
    }
}

/// Builds a conditional comment: `conditional_comment("lt IE 9", body)`
/// renders `<!--[if lt IE 9]> body <![endif]-->`.
///
/// # Panics
///
/// Panics when `args` contains an attribute; comments carry no attributes.
#[must_use]
pub fn conditional_comment(condition: impl Into<String>, args: impl IntoArgs) -> Comment {
    comment(args).conditional(condition)
}

#[cfg(test)]
mod tests {
    use super::{br, div, h1, p};
    use weaver_dom::{Render, Tag};

    #[test]
    fn test_factories_set_the_tag() {
        assert_eq!(Tag::Div, *div(()).tag());
        assert_eq!(Tag::H1, *h1(()).tag());
    }

    #[test]
    fn test_factories_render() {
        assert_eq!("<p>\n</p>", p(()).to_string());
        assert_eq!("<p>\n  Paragraph\n</p>", p(("Paragraph",)).to_string());
        assert_eq!(
            "<div>\n  <p>\n    Paragraph\n  </p>\n</div>",
            div((p(("Paragraph",)),)).to_string()
        );
    }

    #[test]
    #[should_panic(expected = "cannot contain children")]
    fn test_void_factory_rejects_children() {
        let _ = br(("text",));
    }
}
