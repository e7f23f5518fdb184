//! `marker` shortcode: inline text highlight.

use crate::{ShortcodeArgs, ShortcodeContext, ShortcodeHandler, ShortcodeOutput};

/// Highlight color for the `marker` shortcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkerSignal {
    /// Error highlight.
    Error,
    /// Warning highlight.
    Warning,
    /// Red highlight.
    Red,
    /// Yellow highlight.
    Yellow,
    /// Green highlight.
    Green,
    /// Cyan highlight.
    Cyan,
    /// Blue highlight.
    Blue,
    /// Purple highlight.
    Purple,
}

impl MarkerSignal {
    /// Parse a raw signal value (case-insensitive).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "red" => Some(Self::Red),
            "yellow" => Some(Self::Yellow),
            "green" => Some(Self::Green),
            "cyan" => Some(Self::Cyan),
            "blue" => Some(Self::Blue),
            "purple" => Some(Self::Purple),
            _ => None,
        }
    }

    /// CSS class token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }
}

/// Handler for the `marker` shortcode.
///
/// The payload is used verbatim (trimmed, no markdown compilation). An
/// unrecognized `signal` falls back to `warning`.
#[derive(Debug, Default)]
pub struct Marker {
    warnings: Vec<String>,
}

impl Marker {
    /// Create the handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShortcodeHandler for Marker {
    fn name(&self) -> &'static str {
        "marker"
    }

    fn expand(&mut self, args: &ShortcodeArgs, _ctx: &ShortcodeContext) -> ShortcodeOutput {
        let signal = match args.get("signal") {
            None => MarkerSignal::Warning,
            Some(raw) => MarkerSignal::parse(raw).unwrap_or_else(|| {
                tracing::warn!(signal = raw, "unrecognized marker signal, using 'warning'");
                self.warnings
                    .push(format!("marker: unrecognized signal '{raw}', using 'warning'"));
                MarkerSignal::Warning
            }),
        };

        ShortcodeOutput::html(format!(
            r#"<span class="highlight-short-{}"> {} </span>"#,
            signal.as_str(),
            args.payload.trim()
        ))
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
