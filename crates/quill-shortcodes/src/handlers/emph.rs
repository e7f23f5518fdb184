//! `emph` shortcode: colored emphasis paragraph.

use crate::{ShortcodeArgs, ShortcodeContext, ShortcodeHandler, ShortcodeOutput};

/// Visual category for the `emph` shortcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EmphSignal {
    /// De-emphasized grey text.
    Muted,
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

impl EmphSignal {
    /// Parse a raw signal value (case-insensitive).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "muted" => Some(Self::Muted),
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
            Self::Muted => "muted",
            Self::Primary => "primary",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Success => "success",
            Self::Info => "info",
        }
    }
}

/// Handler for the `emph` shortcode.
///
/// An unrecognized `signal` falls back to `primary`.
#[derive(Debug, Default)]
pub struct Emph {
    warnings: Vec<String>,
}

impl Emph {
    /// Create the handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShortcodeHandler for Emph {
    fn name(&self) -> &'static str {
        "emph"
    }

    fn expand(&mut self, args: &ShortcodeArgs, ctx: &ShortcodeContext) -> ShortcodeOutput {
        let signal = match args.get("signal") {
            None => EmphSignal::Primary,
            Some(raw) => EmphSignal::parse(raw).unwrap_or_else(|| {
                tracing::warn!(signal = raw, "unrecognized emph signal, using 'primary'");
                self.warnings
                    .push(format!("emph: unrecognized signal '{raw}', using 'primary'"));
                EmphSignal::Primary
            }),
        };

        let body = ctx.compile_inline(&args.payload);
        ShortcodeOutput::html(format!(
            r#"<p class="text-{}">{body}</p>"#,
            signal.as_str()
        ))
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
