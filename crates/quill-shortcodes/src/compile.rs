//! Markdown compilation capability.
//!
//! Handlers that embed prose delegate to the host's markdown compiler through
//! the [`MarkdownCompile`] trait. [`CmarkCompiler`] is the default
//! pulldown-cmark-backed implementation.

use pulldown_cmark::{Parser, html};

/// Capability for compiling markdown text to HTML.
///
/// The host injects its own compiler through
/// [`ShortcodeContext`](crate::ShortcodeContext); handlers never reach for
/// ambient state.
pub trait MarkdownCompile {
    /// Compile raw markdown to an HTML string.
    fn compile(&self, input: &str) -> String;
}

/// Markdown compiler backed by pulldown-cmark.
///
/// # Example
///
/// ```
/// use quill_shortcodes::{CmarkCompiler, MarkdownCompile};
///
/// let html = CmarkCompiler.compile("**bold**");
/// assert_eq!(html.trim(), "<p><strong>bold</strong></p>");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CmarkCompiler;

impl MarkdownCompile for CmarkCompiler {
    fn compile(&self, input: &str) -> String {
        let parser = Parser::new(input);
        let mut out = String::with_capacity(input.len() * 2);
        html::push_html(&mut out, parser);
        out
    }
}

/// Strip a single wrapping paragraph tag from compiled HTML.
///
/// Compiling a short payload yields `<p>…</p>`; when the fragment is embedded
/// in an inline context the wrapper has to go. Exactly one leading `<p>` and
/// one trailing `</p>` are removed, and only when both are present. Inner
/// paragraph tags are untouched.
///
/// # Example
///
/// ```
/// use quill_shortcodes::strip_paragraph;
///
/// assert_eq!(strip_paragraph("<p>hello</p>\n"), "hello");
/// assert_eq!(strip_paragraph("<div>hello</div>"), "<div>hello</div>");
/// ```
#[must_use]
pub fn strip_paragraph(html: &str) -> &str {
    let trimmed = html.trim();
    match trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
    {
        Some(inner) => inner,
        None => trimmed,
    }
}
