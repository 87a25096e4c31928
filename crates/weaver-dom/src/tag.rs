//! Static tag metadata table.
//!
//! [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#elements-2)
//!
//! "Tags are used to delimit the start and end of elements in the markup. ...
//! Void elements only have a start tag; end tags must not be specified for
//! void elements."
//!
//! Every element the serializer can emit is identified by a [`Tag`]. The tag
//! carries the two pieces of metadata the core needs: the canonical rendered
//! name (via `Display`) and whether the element is void/self-closing (via
//! [`Tag::is_void`]). Everything else about a tag — which attributes are
//! legal on it, its content model — is out of scope; weaver is a text
//! emitter, not a validator.

use serde::{Serialize, Serializer};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Identifier of an HTML element type, sorted by category.
///
/// The canonical rendered name is the lowercase variant name (`Tag::H1`
/// renders as `h1`); [`Tag::Doctype`] is the one exception and renders as
/// the full `!DOCTYPE html` declaration. Tags outside the table are carried
/// verbatim by [`Tag::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum Tag {
    // Basic HTML
    /// The document type declaration. Renders as `!DOCTYPE html`.
    #[strum(serialize = "!DOCTYPE html")]
    Doctype,
    /// The root of an HTML document.
    Html,
    /// Container for document metadata.
    Head,
    /// The document title.
    Title,
    /// The document's body.
    Body,
    /// Top-level heading.
    H1,
    /// Second-level heading.
    H2,
    /// Third-level heading.
    H3,
    /// Fourth-level heading.
    H4,
    /// Fifth-level heading.
    H5,
    /// Sixth-level heading.
    H6,
    /// A paragraph.
    P,
    /// A single line break. Void.
    Br,
    /// A thematic change in the content. Void.
    Hr,

    // Formatting
    /// An acronym (obsolete; `abbr` replaces it).
    Acronym,
    /// An abbreviation or acronym.
    Abbr,
    /// Contact information for the author or owner.
    Address,
    /// Bold text.
    B,
    /// Text isolated from surrounding directionality.
    Bdi,
    /// Text with an overridden direction.
    Bdo,
    /// Big text (obsolete).
    Big,
    /// A section quoted from another source.
    Blockquote,
    /// Centered text (obsolete).
    Center,
    /// The title of a work.
    Cite,
    /// A piece of computer code.
    Code,
    /// Text deleted from the document.
    Del,
    /// A term being defined.
    Dfn,
    /// Emphasized text.
    Em,
    /// Font, color, and size for text (obsolete).
    Font,
    /// Text in an alternate voice or mood.
    I,
    /// Text inserted into the document.
    Ins,
    /// Keyboard input.
    Kbd,
    /// Marked or highlighted text.
    Mark,
    /// A scalar measurement within a known range.
    Meter,
    /// Preformatted text.
    Pre,
    /// The progress of a task.
    Progress,
    /// A short quotation.
    Q,
    /// Fallback for browsers without ruby annotation support.
    Rp,
    /// Pronunciation of characters in ruby annotations.
    Rt,
    /// A ruby annotation.
    Ruby,
    /// Text that is no longer correct.
    S,
    /// Sample output from a computer program.
    Samp,
    /// Smaller text.
    Small,
    /// Strikethrough text (obsolete).
    Strike,
    /// Important text.
    Strong,
    /// Subscripted text.
    Sub,
    /// Superscripted text.
    Sup,
    /// Content hidden at page load, for cloning by scripts.
    Template,
    /// A specific time or datetime.
    Time,
    /// Teletype text (obsolete).
    Tt,
    /// Unarticulated text styled differently from normal text.
    U,
    /// A variable.
    Var,
    /// A possible line-break opportunity. Void.
    Wbr,

    // Forms and input
    /// A form for user input.
    Form,
    /// An input control. Void.
    Input,
    /// A multiline input control.
    Textarea,
    /// A clickable button.
    Button,
    /// A drop-down list.
    Select,
    /// A group of related options in a drop-down list.
    Optgroup,
    /// An option in a drop-down list.
    Option,
    /// A label for a form control.
    Label,
    /// A group of related form controls.
    Fieldset,
    /// A caption for a `fieldset`.
    Legend,
    /// Pre-defined options for input controls.
    Datalist,
    /// The result of a calculation.
    Output,

    // Frames
    /// A frame inside a frameset (obsolete).
    Frame,
    /// A set of frames (obsolete).
    Frameset,
    /// Fallback content for frameless user agents (obsolete).
    Noframes,
    /// An inline frame.
    Iframe,

    // Images
    /// An image. Void.
    Img,
    /// A client-side image map.
    Map,
    /// An area inside an image map. Void.
    Area,
    /// A scriptable drawing surface.
    Canvas,
    /// A caption for a `figure`.
    Figcaption,
    /// Self-contained content.
    Figure,
    /// A container for multiple image resources.
    Picture,
    /// A container for SVG graphics.
    Svg,

    // Audio / video
    /// Sound content.
    Audio,
    /// A media resource for `video`, `audio`, or `picture`. Void.
    Source,
    /// A text track for media elements. Void.
    Track,
    /// A video or movie.
    Video,

    // Links
    /// A hyperlink.
    A,
    /// A relationship to an external resource. Void.
    Link,
    /// Navigation links.
    Nav,

    // Lists
    /// An alternative unordered list.
    Menu,
    /// An unordered list.
    Ul,
    /// An ordered list.
    Ol,
    /// A list item.
    Li,
    /// A directory list (obsolete; `ul` replaces it).
    Dir,
    /// A description list.
    Dl,
    /// A term in a description list.
    Dt,
    /// A description of a term in a description list.
    Dd,

    // Tables
    /// A table caption.
    Caption,
    /// A cell in a table.
    Td,
    /// A row in a table.
    Tr,
    /// A header cell in a table.
    Th,
    /// The footer content of a table.
    Tfoot,
    /// The body content of a table.
    Tbody,
    /// The header content of a table.
    Thead,
    /// Column properties within a `colgroup`. Void.
    Col,
    /// A group of columns in a table.
    Colgroup,
    /// A table.
    Table,

    // Styles and semantics
    /// Style information for the document.
    Style,
    /// A generic block-level section.
    Div,
    /// A generic inline section.
    Span,
    /// A header for a document or section.
    Header,
    /// A heading with related content.
    Hgroup,
    /// A footer for a document or section.
    Footer,
    /// The main content of the document.
    Main,
    /// A section of the document.
    Section,
    /// A search section.
    Search,
    /// An article.
    Article,
    /// Content aside from the page content.
    Aside,
    /// Details the user can view or hide.
    Details,
    /// A dialog box or window.
    Dialog,
    /// A visible heading for a `details` element.
    Summary,
    /// A machine-readable translation of content.
    Data,

    // Meta info
    /// Metadata about the document. Void.
    Meta,
    /// The base URL for relative URLs. Void.
    Base,
    /// Default font for the document (obsolete).
    Basefont,

    // Programming
    /// A client-side script.
    Script,
    /// Fallback content for scriptless user agents.
    Noscript,
    /// An embedded applet (obsolete).
    Applet,
    /// A container for an external application. Void.
    Embed,
    /// An embedded object.
    Object,
    /// A parameter for an `object`.
    Param,

    /// A tag outside the static table, rendered verbatim. Never void.
    #[strum(default, to_string = "{0}")]
    Custom(String),
}

impl Tag {
    /// Whether this element is void/self-closing.
    ///
    /// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
    ///
    /// "Void elements only have a start tag; end tags must not be specified
    /// for void elements." A void element also never receives rendered
    /// children; the composition engine rejects them at attach time.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(
            self,
            Self::Doctype
                | Self::Area
                | Self::Base
                | Self::Br
                | Self::Col
                | Self::Embed
                | Self::Hr
                | Self::Img
                | Self::Input
                | Self::Link
                | Self::Meta
                | Self::Source
                | Self::Track
                | Self::Wbr
        )
    }
}

impl FromStr for Tag {
    type Err = strum::ParseError;

    /// Parses a canonical tag name into its [`Tag`], falling back to
    /// [`Tag::Custom`] for names outside the static table.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for variant in Self::iter() {
            if !matches!(variant, Self::Custom(_)) && variant.to_string() == s {
                return Ok(variant);
            }
        }
        Ok(Self::Custom(s.to_string()))
    }
}

impl From<&str> for Tag {
    /// Looks the name up in the static table, falling back to
    /// [`Tag::Custom`] for names outside it.
    fn from(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| Self::Custom(name.to_string()))
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Tag;
    use std::str::FromStr;

    #[test]
    fn test_canonical_names() {
        assert_eq!("div", Tag::Div.to_string());
        assert_eq!("h1", Tag::H1.to_string());
        assert_eq!("!DOCTYPE html", Tag::Doctype.to_string());
        assert_eq!("x-widget", Tag::Custom("x-widget".into()).to_string());
    }

    #[test]
    fn test_parse_round_trip() {
        assert_eq!(Ok(Tag::Table), Tag::from_str("table"));
        // Unknown names fall through to the custom variant.
        assert_eq!(Ok(Tag::Custom("blink".into())), Tag::from_str("blink"));
    }

    #[test]
    fn test_void_flags() {
        assert!(Tag::Br.is_void());
        assert!(Tag::Hr.is_void());
        assert!(Tag::Meta.is_void());
        assert!(!Tag::Div.is_void());
        assert!(!Tag::Custom("hr".into()).is_void());
    }
}
