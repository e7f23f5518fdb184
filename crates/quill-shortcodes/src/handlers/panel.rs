//! `panel` shortcode: bordered panel with optional heading and footer.

use crate::{ShortcodeArgs, ShortcodeContext, ShortcodeHandler, ShortcodeOutput};

/// Visual category for the `panel` shortcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanelSignal {
    /// Theme primary color.
    Primary,
    /// Warning color.
    Warning,
    /// Danger color.
    Danger,
    /// Informational color.
    Info,
    /// Success color.
    Success,
}

impl PanelSignal {
    /// Parse a raw signal value (case-insensitive).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "primary" => Some(Self::Primary),
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
            Self::Primary => "primary",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

/// Handler for the `panel` shortcode.
///
/// Payload, `header` and `footer` are each markdown-compiled and stripped of
/// their paragraph wrappers. Heading and footer divs are emitted only when
/// the corresponding parameter is present and non-empty. An unrecognized
/// `signal` falls back to `primary`.
#[derive(Debug, Default)]
pub struct Panel {
    warnings: Vec<String>,
}

impl Panel {
    /// Create the handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShortcodeHandler for Panel {
    fn name(&self) -> &'static str {
        "panel"
    }

    fn expand(&mut self, args: &ShortcodeArgs, ctx: &ShortcodeContext) -> ShortcodeOutput {
        let signal = match args.get("signal") {
            None => PanelSignal::Primary,
            Some(raw) => PanelSignal::parse(raw).unwrap_or_else(|| {
                tracing::warn!(signal = raw, "unrecognized panel signal, using 'primary'");
                self.warnings
                    .push(format!("panel: unrecognized signal '{raw}', using 'primary'"));
                PanelSignal::Primary
            }),
        };

        let body = ctx.compile_inline(&args.payload);

        let heading = args
            .get("header")
            .filter(|h| !h.is_empty())
            .map(|h| {
                format!(
                    r#"<div class="panel-heading">{}</div>"#,
                    ctx.compile_inline(h)
                )
            })
            .unwrap_or_default();

        let footer = args
            .get("footer")
            .filter(|f| !f.is_empty())
            .map(|f| {
                format!(
                    r#"<div class="panel-footer">{}</div>"#,
                    ctx.compile_inline(f)
                )
            })
            .unwrap_or_default();

        ShortcodeOutput::html(format!(
            r#"<div class="panel panel-{}">{heading}<div class="panel-body">{body}</div>{footer}</div>"#,
            signal.as_str()
        ))
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
