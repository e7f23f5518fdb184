//! Name-based shortcode dispatch.

use crate::handlers::{Alert, Code, CodeBlock, Emph, Figure, Label, Marker, Panel};
use crate::{ShortcodeArgs, ShortcodeContext, ShortcodeHandler, ShortcodeOutput};

/// Error from registry dispatch.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ShortcodeError {
    /// No handler is registered under the requested name.
    #[error("unknown shortcode '{name}'")]
    UnknownShortcode {
        /// The name the host asked for.
        name: String,
    },
}

/// Registry mapping shortcode names to handlers.
///
/// The host's markup pipeline resolves each shortcode by plain name lookup;
/// there is no discovery mechanism. Handler fallbacks (bad category, bad
/// number) are never dispatch errors — the only error is an unknown name.
///
/// # Example
///
/// ```
/// use quill_shortcodes::{CmarkCompiler, ShortcodeArgs, ShortcodeContext, ShortcodeRegistry};
///
/// let compiler = CmarkCompiler;
/// let ctx = ShortcodeContext::new(&compiler);
/// let mut registry = ShortcodeRegistry::defaults();
///
/// let args = ShortcodeArgs::new("done").with("signal", "success");
/// let output = registry.expand("label", &args, &ctx).unwrap();
/// assert_eq!(output.html, r#"<span class="label label-success">done</span>"#);
/// ```
#[derive(Default)]
pub struct ShortcodeRegistry {
    handlers: Vec<Box<dyn ShortcodeHandler>>,
}

impl ShortcodeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-loaded with every handler in this crate.
    ///
    /// Registered names: `alert`, `emph`, `label`, `marker`, `panel`,
    /// `code`, `code-block`, `figure`.
    #[must_use]
    pub fn defaults() -> Self {
        Self::new()
            .with_handler(Alert::new())
            .with_handler(Emph::new())
            .with_handler(Label::new())
            .with_handler(Marker::new())
            .with_handler(Panel::new())
            .with_handler(Code::new())
            .with_handler(CodeBlock::new())
            .with_handler(Figure::new())
    }

    /// Register a handler (builder style).
    #[must_use]
    pub fn with_handler<H: ShortcodeHandler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Register a handler.
    pub fn register<H: ShortcodeHandler + 'static>(&mut self, handler: H) {
        self.handlers.push(Box::new(handler));
    }

    /// Expand a shortcode by name.
    ///
    /// # Errors
    ///
    /// Returns [`ShortcodeError::UnknownShortcode`] when no handler is
    /// registered under `name`.
    pub fn expand(
        &mut self,
        name: &str,
        args: &ShortcodeArgs,
        ctx: &ShortcodeContext,
    ) -> Result<ShortcodeOutput, ShortcodeError> {
        let Some(handler) = self.handlers.iter_mut().find(|h| h.name() == name) else {
            tracing::warn!(name, "no handler registered for shortcode");
            return Err(ShortcodeError::UnknownShortcode {
                name: name.to_owned(),
            });
        };
        Ok(handler.expand(args, ctx))
    }

    /// Names of all registered handlers, in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Get all warnings accumulated by the registered handlers.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.handlers
            .iter()
            .flat_map(|h| h.warnings().iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::CmarkCompiler;

    fn test_ctx(compiler: &CmarkCompiler) -> ShortcodeContext<'_> {
        ShortcodeContext::new(compiler)
    }

    #[test]
    fn test_defaults_registers_all_handlers() {
        let registry = ShortcodeRegistry::defaults();
        assert_eq!(
            registry.names(),
            vec![
                "alert",
                "emph",
                "label",
                "marker",
                "panel",
                "code",
                "code-block",
                "figure"
            ]
        );
    }

    #[test]
    fn test_unknown_shortcode() {
        let compiler = CmarkCompiler;
        let ctx = test_ctx(&compiler);
        let mut registry = ShortcodeRegistry::defaults();

        let result = registry.expand("nope", &ShortcodeArgs::new(""), &ctx);
        assert!(matches!(
            result,
            Err(ShortcodeError::UnknownShortcode { name }) if name == "nope"
        ));
    }

    #[test]
    fn test_dispatch_by_name() {
        let compiler = CmarkCompiler;
        let ctx = test_ctx(&compiler);
        let mut registry = ShortcodeRegistry::defaults();

        let args = ShortcodeArgs::new("text");
        let output = registry.expand("marker", &args, &ctx).unwrap();
        assert_eq!(
            output.html,
            r#"<span class="highlight-short-warning"> text </span>"#
        );
    }

    #[test]
    fn test_warnings_aggregated() {
        let compiler = CmarkCompiler;
        let ctx = test_ctx(&compiler);
        let mut registry = ShortcodeRegistry::defaults();

        let args = ShortcodeArgs::new("x").with("signal", "bogus");
        registry.expand("alert", &args, &ctx).unwrap();
        registry.expand("label", &args, &ctx).unwrap();

        let warnings = registry.warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.contains("bogus")));
    }

    #[test]
    fn test_custom_handler_registration() {
        struct Kbd;

        impl ShortcodeHandler for Kbd {
            fn name(&self) -> &'static str {
                "kbd"
            }

            fn expand(
                &mut self,
                args: &ShortcodeArgs,
                _ctx: &ShortcodeContext,
            ) -> ShortcodeOutput {
                ShortcodeOutput::html(format!("<kbd>{}</kbd>", args.payload))
            }
        }

        let compiler = CmarkCompiler;
        let ctx = test_ctx(&compiler);
        let mut registry = ShortcodeRegistry::new();
        registry.register(Kbd);

        let output = registry.expand("kbd", &ShortcodeArgs::new("Esc"), &ctx).unwrap();
        assert_eq!(output.html, "<kbd>Esc</kbd>");
    }
}
