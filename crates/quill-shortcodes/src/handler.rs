//! Shortcode handler trait and expansion context.

use crate::compile::{MarkdownCompile, strip_paragraph};
use crate::{ShortcodeArgs, ShortcodeOutput};

/// Context provided to shortcode handlers.
///
/// Carries the host-injected markdown compiler. Handlers never perform I/O or
/// touch ambient state; everything they need comes through the context.
///
/// # Example
///
/// ```
/// use quill_shortcodes::{CmarkCompiler, ShortcodeContext};
///
/// let compiler = CmarkCompiler;
/// let ctx = ShortcodeContext::new(&compiler);
/// assert_eq!(ctx.compile_inline("*hi*"), "<em>hi</em>");
/// ```
pub struct ShortcodeContext<'a> {
    /// The host's markdown compiler.
    pub compiler: &'a dyn MarkdownCompile,
}

impl<'a> ShortcodeContext<'a> {
    /// Create a context around the host's markdown compiler.
    #[must_use]
    pub fn new(compiler: &'a dyn MarkdownCompile) -> Self {
        Self { compiler }
    }

    /// Compile markdown and strip the single wrapping paragraph tag.
    ///
    /// This is the shape every prose-embedding handler needs: a short payload
    /// compiles to `<p>…</p>`, and the wrapper has to go before the result is
    /// spliced into the handler's own template.
    #[must_use]
    pub fn compile_inline(&self, text: &str) -> String {
        let compiled = self.compiler.compile(text);
        strip_paragraph(&compiled).to_owned()
    }
}

/// Handler for a named shortcode.
///
/// Each handler is a pure, stateless string transformation, apart from the
/// warning list it may accumulate. Handlers implement `Send` only (not
/// `Sync`): each compilation pass gets its own registry instance.
///
/// # Example
///
/// ```
/// use quill_shortcodes::{ShortcodeArgs, ShortcodeContext, ShortcodeHandler, ShortcodeOutput};
///
/// struct Kbd;
///
/// impl ShortcodeHandler for Kbd {
///     fn name(&self) -> &'static str {
///         "kbd"
///     }
///
///     fn expand(&mut self, args: &ShortcodeArgs, _ctx: &ShortcodeContext) -> ShortcodeOutput {
///         ShortcodeOutput::html(format!("<kbd>{}</kbd>", args.payload))
///     }
/// }
/// ```
pub trait ShortcodeHandler: Send {
    /// Shortcode name (e.g., "alert", "figure").
    ///
    /// This is the key the registry dispatches on.
    fn name(&self) -> &str;

    /// Expand the shortcode into an HTML fragment.
    ///
    /// Invalid parameter values never fail: unrecognized categories fall back
    /// to the handler's documented default, and unparseable numbers simply
    /// omit the corresponding output attribute.
    fn expand(&mut self, args: &ShortcodeArgs, ctx: &ShortcodeContext) -> ShortcodeOutput;

    /// Get warnings generated during expansion.
    ///
    /// Override this method if your handler can produce warnings.
    fn warnings(&self) -> &[String] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::CmarkCompiler;

    struct TestKbd;

    impl ShortcodeHandler for TestKbd {
        fn name(&self) -> &'static str {
            "kbd"
        }

        fn expand(&mut self, args: &ShortcodeArgs, _ctx: &ShortcodeContext) -> ShortcodeOutput {
            ShortcodeOutput::html(format!("<kbd>{}</kbd>", args.payload))
        }
    }

    #[test]
    fn test_handler_expand() {
        let compiler = CmarkCompiler;
        let ctx = ShortcodeContext::new(&compiler);
        let mut kbd = TestKbd;

        let output = kbd.expand(&ShortcodeArgs::new("Ctrl+C"), &ctx);
        assert_eq!(output.html, "<kbd>Ctrl+C</kbd>");
        assert!(output.dependencies.is_empty());
    }

    #[test]
    fn test_default_warnings() {
        let kbd = TestKbd;
        assert!(kbd.warnings().is_empty());
    }

    #[test]
    fn test_compile_inline_strips_wrapper() {
        let compiler = CmarkCompiler;
        let ctx = ShortcodeContext::new(&compiler);
        assert_eq!(ctx.compile_inline("**bold** text"), "<strong>bold</strong> text");
    }
}
