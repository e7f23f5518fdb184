//! Shortcode handlers for the Quill markup compilation pipeline.
//!
//! A shortcode is a markup directive that the site generator expands into an
//! HTML fragment via a named handler. This crate provides the handler
//! collection (alerts, labels, panels, markers, code fragments, figures) and
//! the [`ShortcodeRegistry`] the host uses to dispatch on shortcode names.
//!
//! # Architecture
//!
//! Every handler is a pure, single-call string transformation:
//!
//! - Input: [`ShortcodeArgs`] (named string parameters plus a text payload)
//! - Output: [`ShortcodeOutput`] (an HTML fragment plus a dependency path
//!   list, empty for all handlers here)
//!
//! Handlers that embed prose run the payload through the host's markdown
//! compiler, injected as the [`MarkdownCompile`] capability on
//! [`ShortcodeContext`]. Code handlers treat the payload as literal text.
//!
//! # Example
//!
//! ```
//! use quill_shortcodes::{CmarkCompiler, ShortcodeArgs, ShortcodeContext, ShortcodeRegistry};
//!
//! let compiler = CmarkCompiler;
//! let ctx = ShortcodeContext::new(&compiler);
//! let mut registry = ShortcodeRegistry::defaults();
//!
//! let args = ShortcodeArgs::new("Check the *docs*.").with("signal", "warning");
//! let output = registry.expand("alert", &args, &ctx).unwrap();
//! assert!(output.html.contains("alert-warning"));
//! assert!(output.dependencies.is_empty());
//! ```

mod args;
mod compile;
mod escape;
mod handler;
pub mod handlers;
mod output;
mod registry;

pub use args::ShortcodeArgs;
pub use compile::{CmarkCompiler, MarkdownCompile, strip_paragraph};
pub use escape::escape_html;
pub use handler::{ShortcodeContext, ShortcodeHandler};
pub use output::ShortcodeOutput;
pub use registry::{ShortcodeError, ShortcodeRegistry};
