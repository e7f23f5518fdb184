//! `code` and `code-block` shortcodes: literal code fragments.
//!
//! Neither handler compiles markdown; the payload is HTML-escaped and used
//! verbatim so the client-side highlighter sees the raw source.

use std::fmt::Write;

use crate::escape::escape_html;
use crate::{ShortcodeArgs, ShortcodeContext, ShortcodeHandler, ShortcodeOutput};

/// Truthy flag values accepted by `code-block`.
fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_lowercase().as_str(),
        "true" | "1" | "t" | "y" | "yes"
    )
}

/// Open a `<code>` element, with a `language-*` class when `lang` is set.
fn code_open(lang: Option<&str>) -> String {
    match lang {
        Some(lang) if !lang.is_empty() => {
            format!(r#"<code class="language-{}">"#, escape_html(lang))
        }
        _ => "<code>".to_owned(),
    }
}

/// Handler for the `code` shortcode: inline code element.
#[derive(Debug, Default)]
pub struct Code;

impl Code {
    /// Create the handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ShortcodeHandler for Code {
    fn name(&self) -> &'static str {
        "code"
    }

    fn expand(&mut self, args: &ShortcodeArgs, _ctx: &ShortcodeContext) -> ShortcodeOutput {
        ShortcodeOutput::html(format!(
            "{}{}</code>",
            code_open(args.get("lang")),
            escape_html(args.payload.trim())
        ))
    }
}

/// Handler for the `code-block` shortcode: `<pre>`-wrapped code block.
///
/// Optional flags control the attributes the highlighter reads:
///
/// - `lines` (truthy): adds `class="line-numbers"`; `start` then sets
///   `data-start` for the first line number
/// - `hl`: sets `data-line` with the highlighted line range; `offset` then
///   sets `data-line-offset`
///
/// `start` without `lines` and `offset` without `hl` emit nothing.
#[derive(Debug, Default)]
pub struct CodeBlock;

impl CodeBlock {
    /// Create the handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ShortcodeHandler for CodeBlock {
    fn name(&self) -> &'static str {
        "code-block"
    }

    fn expand(&mut self, args: &ShortcodeArgs, _ctx: &ShortcodeContext) -> ShortcodeOutput {
        let mut pre = String::from("<pre");

        if args.get("lines").is_some_and(is_truthy) {
            pre.push_str(r#" class="line-numbers""#);
            if let Some(start) = args.get("start") {
                write!(pre, r#" data-start="{}""#, escape_html(start)).unwrap();
            }
        }

        if let Some(hl) = args.get("hl") {
            write!(pre, r#" data-line="{}""#, escape_html(hl)).unwrap();
            if let Some(offset) = args.get("offset") {
                write!(pre, r#" data-line-offset="{}""#, escape_html(offset)).unwrap();
            }
        }

        ShortcodeOutput::html(format!(
            "{pre}>{}{}</code></pre>",
            code_open(args.get("lang")),
            escape_html(args.payload.trim())
        ))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::CmarkCompiler;
    use crate::ShortcodeContext;

    fn expand<H: ShortcodeHandler>(handler: &mut H, args: &ShortcodeArgs) -> String {
        let compiler = CmarkCompiler;
        let ctx = ShortcodeContext::new(&compiler);
        handler.expand(args, &ctx).html
    }

    #[test]
    fn test_inline_code() {
        let html = expand(&mut Code::new(), &ShortcodeArgs::new("let x = 1;"));
        assert_eq!(html, "<code>let x = 1;</code>");
    }

    #[test]
    fn test_inline_code_with_lang() {
        let args = ShortcodeArgs::new("let x = 1;").with("lang", "rust");
        let html = expand(&mut Code::new(), &args);
        assert_eq!(html, r#"<code class="language-rust">let x = 1;</code>"#);
    }

    #[test]
    fn test_inline_code_escapes() {
        let html = expand(&mut Code::new(), &ShortcodeArgs::new("a < b && c > d"));
        assert_eq!(html, "<code>a &lt; b &amp;&amp; c &gt; d</code>");
    }

    #[test]
    fn test_plain_block() {
        let html = expand(&mut CodeBlock::new(), &ShortcodeArgs::new("print(1)\n"));
        assert_eq!(html, "<pre><code>print(1)</code></pre>");
    }

    #[test]
    fn test_block_with_lang() {
        let args = ShortcodeArgs::new("print(1)").with("lang", "python");
        let html = expand(&mut CodeBlock::new(), &args);
        assert_eq!(
            html,
            r#"<pre><code class="language-python">print(1)</code></pre>"#
        );
    }

    #[test]
    fn test_lines_and_start() {
        let args = ShortcodeArgs::new("x")
            .with("lines", "yes")
            .with("start", "5");
        let html = expand(&mut CodeBlock::new(), &args);
        assert_eq!(
            html,
            r#"<pre class="line-numbers" data-start="5"><code>x</code></pre>"#
        );
    }

    #[test]
    fn test_lines_without_start() {
        let args = ShortcodeArgs::new("x").with("lines", "true");
        let html = expand(&mut CodeBlock::new(), &args);
        assert_eq!(html, r#"<pre class="line-numbers"><code>x</code></pre>"#);
    }

    #[test]
    fn test_start_without_lines_ignored() {
        let args = ShortcodeArgs::new("x").with("start", "5");
        let html = expand(&mut CodeBlock::new(), &args);
        assert_eq!(html, "<pre><code>x</code></pre>");
    }

    #[test]
    fn test_falsy_lines_flag() {
        let args = ShortcodeArgs::new("x").with("lines", "no");
        let html = expand(&mut CodeBlock::new(), &args);
        assert!(!html.contains("line-numbers"));
    }

    #[test]
    fn test_highlight_and_offset() {
        let args = ShortcodeArgs::new("x")
            .with("hl", "2-4")
            .with("offset", "10");
        let html = expand(&mut CodeBlock::new(), &args);
        assert_eq!(
            html,
            r#"<pre data-line="2-4" data-line-offset="10"><code>x</code></pre>"#
        );
    }

    #[test]
    fn test_offset_without_highlight_ignored() {
        let args = ShortcodeArgs::new("x").with("offset", "10");
        let html = expand(&mut CodeBlock::new(), &args);
        assert_eq!(html, "<pre><code>x</code></pre>");
    }

    #[test]
    fn test_block_payload_escaped() {
        let args = ShortcodeArgs::new("<script>alert(1)</script>").with("lang", "html");
        let html = expand(&mut CodeBlock::new(), &args);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
