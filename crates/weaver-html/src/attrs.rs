//! Attribute constructors and keyword normalization.
//!
//! [§ 13.1.2.3 Attributes](https://html.spec.whatwg.org/multipage/syntax.html#attributes-2)
//!
//! Attribute names that collide with Rust keywords or element factories
//! take a trailing underscore (`type_`, `for_`, `class_`, `title_`); the
//! normalization boundary strips the suffix and restores dashes, so the
//! core attribute collection only ever sees canonical names. Normalization
//! happens exactly once, here — [`weaver_dom::Attribute`] stores names
//! verbatim.

use weaver_dom::{Arg, Attribute};

/// Converts a keyword-style attribute name into its canonical form:
/// ASCII-lowercased, reserved-word underscore suffix stripped, and
/// underscores restored to dashes.
///
/// ```
/// use weaver_html::attrs::normalize_attr_name;
///
/// assert_eq!("class", normalize_attr_name("class_"));
/// assert_eq!("data-row", normalize_attr_name("data_row"));
/// assert_eq!("http-equiv", normalize_attr_name("HTTP_EQUIV"));
/// ```
#[must_use]
pub fn normalize_attr_name(keyword: &str) -> String {
    keyword
        .to_ascii_lowercase()
        .trim_matches('_')
        .replace('_', "-")
}

/// Builds a valued attribute from a keyword-style name.
pub fn attr(keyword: &str, value: impl Into<String>) -> Attribute {
    Attribute::new(normalize_attr_name(keyword), value)
}

/// Builds a boolean attribute from a keyword-style name.
#[must_use]
pub fn flag(keyword: &str) -> Attribute {
    Attribute::flag(normalize_attr_name(keyword))
}

/// Builds a `data-*` attribute: `data_("row", 1)` renders `data-row="1"`.
pub fn data_(suffix: &str, value: impl ToString) -> Attribute {
    Attribute::new(
        format!("data-{}", normalize_attr_name(suffix)),
        value.to_string(),
    )
}

/// Builds an `aria-*` attribute: `aria_("label", "Close")` renders
/// `aria-label="Close"`.
pub fn aria_(suffix: &str, value: impl ToString) -> Attribute {
    Attribute::new(
        format!("aria-{}", normalize_attr_name(suffix)),
        value.to_string(),
    )
}

/// An inline CSS style attribute built from property pairs.
///
/// Properties render as `name: value;` pairs concatenated with no
/// separating space, and property keywords are dash-normalized, so
/// `Style::new().property("font_size", "20 px")` renders
/// `style="font-size: 20 px;"`. Adding two style attributes to one element
/// merges them by concatenation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    css: String,
}

impl Style {
    /// Creates an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one `property: value;` pair, dash-normalizing the property
    /// keyword.
    #[must_use]
    pub fn property(mut self, keyword: &str, value: impl ToString) -> Self {
        self.css.push_str(&normalize_attr_name(keyword));
        self.css.push_str(": ");
        self.css.push_str(&value.to_string());
        self.css.push(';');
        self
    }

    /// Appends already-formatted CSS verbatim.
    #[must_use]
    pub fn raw(mut self, css: &str) -> Self {
        self.css.push_str(css);
        self
    }
}

impl From<Style> for Attribute {
    fn from(style: Style) -> Self {
        Self::new("style", style.css)
    }
}

impl From<Style> for Arg {
    fn from(style: Style) -> Self {
        Self::Attr(style.into())
    }
}

/// Valued attribute constructors for the common attribute set.
macro_rules! valued_attrs {
    ($($(#[$doc:meta])* $name:ident => $attr:literal),+ $(,)?) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $name(value: impl Into<String>) -> Attribute {
                Attribute::new($attr, value)
            }
        )+
    };
}

/// Boolean attribute constructors.
macro_rules! boolean_attrs {
    ($($(#[$doc:meta])* $name:ident => $attr:literal),+ $(,)?) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $name() -> Attribute {
                Attribute::flag($attr)
            }
        )+
    };
}

valued_attrs! {
    /// The element's unique identifier.
    id => "id",
    /// The element's class list.
    class_ => "class",
    /// The destination of a hyperlink.
    href => "href",
    /// The address of an embedded resource.
    src => "src",
    /// Alternative text for an image.
    alt => "alt",
    /// The relationship of a linked resource.
    rel => "rel",
    /// The browsing context for a hyperlink or form.
    target => "target",
    /// The character encoding declaration.
    charset => "charset",
    /// The value of a `meta` element.
    content => "content",
    /// The name of a form control or metadata entry.
    name => "name",
    /// The value of a form control.
    value => "value",
    /// The hint shown in an empty input control.
    placeholder => "placeholder",
    /// The URL that processes a form submission.
    action => "action",
    /// The HTTP method of a form submission.
    method => "method",
    /// The type of a control, link, or embedded resource.
    type_ => "type",
    /// The form control a label is bound to.
    for_ => "for",
    /// Advisory information for the element.
    title_ => "title",
    /// The language of the element's content.
    lang => "lang",
    /// The element's ARIA role.
    role => "role",
    /// The width of the element, in pixels.
    width => "width",
    /// The height of the element, in pixels.
    height => "height",
    /// The visible height of a `textarea`, in lines.
    rows => "rows",
    /// The visible width of a `textarea`, in characters.
    cols => "cols",
    /// The number of columns a table cell spans.
    colspan => "colspan",
    /// The number of rows a table cell spans.
    rowspan => "rowspan",
}

boolean_attrs! {
    /// Marks a form control as mandatory.
    required => "required",
    /// Disables a form control.
    disabled => "disabled",
    /// Pre-selects a checkbox or radio button.
    checked => "checked",
    /// Makes a form control read-only.
    readonly => "readonly",
    /// Allows multiple values in a `select` or file input.
    multiple => "multiple",
    /// Pre-selects an `option`.
    selected => "selected",
    /// Focuses the control when the page loads.
    autofocus => "autofocus",
    /// Hides the element from presentation.
    hidden => "hidden",
    /// Defers script execution until the document has parsed.
    defer => "defer",
    /// Executes a script asynchronously.
    async_ => "async",
    /// Loops media playback.
    loop_ => "loop",
    /// Starts media muted.
    muted => "muted",
    /// Shows media playback controls.
    controls => "controls",
}

/// Builds a space-joined `class` attribute from several class names.
pub fn classes<I>(names: I) -> Attribute
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let joined = names
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    Attribute::new("class", joined)
}
