//! `alert` shortcode: dismissible alert box.

use crate::{ShortcodeArgs, ShortcodeContext, ShortcodeHandler, ShortcodeOutput};

/// Visual category for the `alert` shortcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlertSignal {
    /// Yellow warning box.
    Warning,
    /// Red danger box.
    Danger,
    /// Blue informational box.
    Info,
    /// Green success box.
    Success,
}

impl AlertSignal {
    /// Parse a raw signal value (case-insensitive).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "warning" => Some(Self::Warning),
            "danger" => Some(Self::Danger),
            "info" => Some(Self::Info),
            "success" => Some(Self::Success),
            _ => None,
        }
    }

    /// CSS class token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

/// Handler for the `alert` shortcode.
///
/// The payload is markdown-compiled and stripped of its paragraph wrapper.
/// An unrecognized `signal` falls back to `info`.
#[derive(Debug, Default)]
pub struct Alert {
    warnings: Vec<String>,
}

impl Alert {
    /// Create the handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShortcodeHandler for Alert {
    fn name(&self) -> &'static str {
        "alert"
    }

    fn expand(&mut self, args: &ShortcodeArgs, ctx: &ShortcodeContext) -> ShortcodeOutput {
        let signal = match args.get("signal") {
            None => AlertSignal::Info,
            Some(raw) => AlertSignal::parse(raw).unwrap_or_else(|| {
                tracing::warn!(signal = raw, "unrecognized alert signal, using 'info'");
                self.warnings
                    .push(format!("alert: unrecognized signal '{raw}', using 'info'"));
                AlertSignal::Info
            }),
        };

        let body = ctx.compile_inline(&args.payload);
        ShortcodeOutput::html(format!(
            r#"<div class="alert alert-dismissible alert-{}">{body}</div>"#,
            signal.as_str()
        ))
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
