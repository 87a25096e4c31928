//! HTML-facing surface over the weaver tree core.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tag Factories** — one thin constructor per entry in the static tag
//!   table (`div`, `h1`, `p`, …), all forwarding to
//!   [`weaver_dom::Element::with`]
//! - **Attribute Constructors** — named builders for the common attribute
//!   set, the `data-*`/`aria-*` families, and the [`attrs::Style`] builder
//! - **Keyword Normalization** — the single boundary where keyword-style
//!   names (`class_`, `data_row`) become canonical attribute names
//! - **Table Shorthand** — `<table>` construction from row/column data
//! - **Document Template** — doctype + `<html>`/`<head>`/`<body>` scaffold
//!
//! # Not Implemented Here
//!
//! - The tree model, serializer, matcher, and scope stack (`weaver-dom`)

/// Attribute constructors and keyword normalization.
pub mod attrs;
/// Prepared document template.
pub mod document;
/// Table construction from row/column data.
pub mod table;
/// Per-tag factory functions.
pub mod tags;

// Re-exports for convenience
pub use document::Document;
pub use table::{HeaderScope, table_from};
