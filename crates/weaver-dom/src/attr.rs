//! Attribute model.
//!
//! [§ 13.1.2.3 Attributes](https://html.spec.whatwg.org/multipage/syntax.html#attributes-2)
//!
//! "Attributes have a name and a value." Boolean attributes are represented
//! by presence alone: "The values 'true' and 'false' are not allowed on
//! boolean attributes. To represent a false value, the attribute has to be
//! omitted altogether."
//!
//! An [`Attribute`] stores an already-canonical name; keyword normalization
//! (separator restoration, reserved-word suffix stripping) happens once at
//! the construction boundary in the HTML-facing crate, never here.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::render::escape_attr_into;

/// The value carried by an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Boolean/presence-only value; renders as the bare attribute name.
    Flag,
    /// Textual value; renders as `name="value"`.
    Text(String),
}

impl AttrValue {
    /// The textual value, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Flag => None,
            Self::Text(value) => Some(value),
        }
    }

    /// Whether this is a presence-only value.
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flag => serializer.serialize_bool(true),
            Self::Text(value) => serializer.serialize_str(value),
        }
    }
}

/// A single named value (or presence flag) attached to an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: AttrValue,
}

impl Attribute {
    /// Creates a valued attribute. `name` must already be canonical
    /// (lowercase, dash-separated).
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttrValue::Text(value.into()),
        }
    }

    /// Creates a boolean/presence-only attribute.
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttrValue::Flag,
        }
    }

    /// The canonical attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute value.
    #[must_use]
    pub const fn value(&self) -> &AttrValue {
        &self.value
    }

    /// Replaces the value outright, the key-assignment rule.
    pub fn set_value(&mut self, value: impl Into<AttrValue>) {
        self.value = value.into();
    }

    /// Merges another same-named attribute into this one, the `add` rule.
    ///
    /// Textual values join with a single space, except `style` values which
    /// concatenate directly (each property pair already carries its own
    /// trailing `;`). Merging a flag into anything keeps the existing value;
    /// merging text into a flag promotes the flag to that text.
    pub fn merge(&mut self, other: Self) {
        match (&mut self.value, other.value) {
            (_, AttrValue::Flag) => {}
            (value @ AttrValue::Flag, text) => *value = text,
            (AttrValue::Text(existing), AttrValue::Text(incoming)) => {
                if self.name != "style" {
                    existing.push(' ');
                }
                existing.push_str(&incoming);
            }
        }
    }
}

impl fmt::Display for Attribute {
    /// Renders the attribute exactly as it appears inside an opening tag:
    /// `name="value"` with the value escaped, or the bare name for a flag.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            AttrValue::Flag => f.write_str(&self.name),
            AttrValue::Text(value) => {
                let mut escaped = String::with_capacity(value.len());
                escape_attr_into(value, &mut escaped);
                write!(f, "{}=\"{escaped}\"", self.name)
            }
        }
    }
}

impl Serialize for Attribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Attribute", 2)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("value", &self.value)?;
        state.end()
    }
}
