//! Shortcode output type.

use std::path::PathBuf;

/// Output from a shortcode expansion.
///
/// The host contract is an HTML fragment plus an ordered list of auxiliary
/// files the fragment depends on. None of the handlers in this crate read
/// files, so their dependency lists are always empty; the field exists so the
/// host can treat every handler uniformly.
///
/// # Example
///
/// ```
/// use quill_shortcodes::ShortcodeOutput;
///
/// let output = ShortcodeOutput::html("<code>x</code>");
/// assert_eq!(output.html, "<code>x</code>");
/// assert!(output.dependencies.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortcodeOutput {
    /// The HTML fragment to splice into the compiled page.
    pub html: String,
    /// Auxiliary files the fragment depends on.
    pub dependencies: Vec<PathBuf>,
}

impl ShortcodeOutput {
    /// Create an output with an empty dependency list.
    #[must_use]
    pub fn html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            dependencies: Vec::new(),
        }
    }
}
