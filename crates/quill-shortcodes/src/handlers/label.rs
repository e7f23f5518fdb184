//! `label` shortcode: inline badge.

use crate::{ShortcodeArgs, ShortcodeContext, ShortcodeHandler, ShortcodeOutput};

/// Visual category for the `label` shortcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelSignal {
    /// Neutral grey badge.
    Default,
    /// Theme primary color.
    Primary,
    /// Warning color.
    Warning,
    /// Danger color.
    Danger,
    /// Success color.
    Success,
    /// Informational color.
    Info,
}

impl LabelSignal {
    /// Parse a raw signal value (case-insensitive).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "primary" => Some(Self::Primary),
            "warning" => Some(Self::Warning),
            "danger" => Some(Self::Danger),
            "success" => Some(Self::Success),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    /// CSS class token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Success => "success",
            Self::Info => "info",
        }
    }
}

/// Handler for the `label` shortcode.
///
/// An unrecognized `signal` falls back to `default`.
#[derive(Debug, Default)]
pub struct Label {
    warnings: Vec<String>,
}

impl Label {
    /// Create the handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShortcodeHandler for Label {
    fn name(&self) -> &'static str {
        "label"
    }

    fn expand(&mut self, args: &ShortcodeArgs, ctx: &ShortcodeContext) -> ShortcodeOutput {
        let signal = match args.get("signal") {
            None => LabelSignal::Default,
            Some(raw) => LabelSignal::parse(raw).unwrap_or_else(|| {
                tracing::warn!(signal = raw, "unrecognized label signal, using 'default'");
                self.warnings
                    .push(format!("label: unrecognized signal '{raw}', using 'default'"));
                LabelSignal::Default
            }),
        };

        let body = ctx.compile_inline(&args.payload);
        ShortcodeOutput::html(format!(
            r#"<span class="label label-{}">{body}</span>"#,
            signal.as_str()
        ))
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
