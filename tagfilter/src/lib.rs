#![doc = include_str!("../README.md")]
//!
//! ## API Guide
//!
//! The crate root exposes one function per output context:
//!
//! - [`sanitize_markup`] - filter a markup fragment for a document body
//! - [`validate_color`] - accept or replace a CSS color value
//! - [`neutralize_script`] - rewrite text headed for a script block
//!
//! plus [`sanitize_tag`] for a single tag segment. All of them are total: any
//! input produces a string, and rejection shows up as the sentinels
//! `blocked` and `invalid` rather than as an error.
//!
//! [`Sanitizer`] binds the markup filter to a custom [`Policy`] and can
//! report what it rewrote through [`MarkupReport`]. [`Scanner`] exposes the
//! raw segmentation the markup filter is built on.

use thiserror::Error;

pub mod color;
pub mod context;
pub mod markup;
pub mod policy;
pub mod sanitizer;
pub mod script;

pub use color::{is_color_token, validate_color, INVALID_COLOR};
pub use context::OutputContext;
pub use markup::{scan, MarkupReport, Rewrites, Scanner, Segment, TagOutcome};
pub use policy::{Policy, ALLOWED_TAGS, BLOCKED, DENIED_ATTRIBUTES};
pub use sanitizer::Sanitizer;
pub use script::neutralize_script;

/// Errors from loading configuration. Sanitizing itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid policy: {0}")]
    InvalidPolicy(&'static str),
    #[error("policy parse error: {0}")]
    PolicyParse(#[from] serde_json::Error),
    #[error("unknown output context `{0}`")]
    UnknownContext(String),
}

/// Filters a markup fragment with the built-in allow-list and deny-list.
///
/// Tag names outside [`ALLOWED_TAGS`] are replaced with `blocked`, and every
/// keyword from [`DENIED_ATTRIBUTES`] found inside a tag is replaced with
/// `blocked` too. Text outside tags is copied unchanged.
///
/// # Examples
///
/// ```
/// use tagfilter::sanitize_markup;
///
/// assert_eq!(sanitize_markup("<b>hi</b>"), "<b>hi</b>");
/// assert_eq!(
///     sanitize_markup("<script>alert(1)</script>"),
///     "<blocked>alert(1)<blockedt>"
/// );
/// assert_eq!(
///     sanitize_markup(r#"<img onclick="x()">"#),
///     r#"<img blocked="x()">"#
/// );
/// ```
pub fn sanitize_markup(input: &str) -> String {
    markup::sanitize_markup_with(input, ALLOWED_TAGS, DENIED_ATTRIBUTES).output
}

/// Filters a single tag segment with the built-in lists.
///
/// Input that does not start with `<`, or whose name is never terminated by
/// whitespace or `>`, is returned unchanged.
///
/// ```
/// use tagfilter::sanitize_tag;
///
/// assert_eq!(sanitize_tag("<IFRAME src=x>"), "<blocked src=x>");
/// assert_eq!(sanitize_tag("<script"), "<script");
/// ```
pub fn sanitize_tag(tag: &str) -> String {
    markup::sanitize_tag_with(tag, ALLOWED_TAGS, DENIED_ATTRIBUTES).output
}

/// Returns the version of the tagfilter library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
