//! `figure` shortcode: sized, aligned image wrapper.
//!
//! The only handler with derived quantities: width and height parse as
//! number-plus-unit dimensions, and an optional scale factor multiplies both
//! before the inline style is emitted.

use std::fmt;
use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::escape::escape_html;
use crate::{ShortcodeArgs, ShortcodeContext, ShortcodeHandler, ShortcodeOutput};

/// `number` + optional unit suffix. Bare numbers mean pixels.
static DIMENSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*([0-9]+(?:\.[0-9]+)?)\s*(px|pt|em|rem|%|cm|mm|in)?\s*$").unwrap()
});

/// CSS length unit accepted in `width`/`height` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    /// Pixels (the default for bare numbers).
    Px,
    /// Points.
    Pt,
    /// Em units.
    Em,
    /// Root em units.
    Rem,
    /// Percentage of the containing element.
    Percent,
    /// Centimeters.
    Cm,
    /// Millimeters.
    Mm,
    /// Inches.
    In,
}

impl Unit {
    fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "px" => Some(Self::Px),
            "pt" => Some(Self::Pt),
            "em" => Some(Self::Em),
            "rem" => Some(Self::Rem),
            "%" => Some(Self::Percent),
            "cm" => Some(Self::Cm),
            "mm" => Some(Self::Mm),
            "in" => Some(Self::In),
            _ => None,
        }
    }

    /// The CSS suffix for this unit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Pt => "pt",
            Self::Em => "em",
            Self::Rem => "rem",
            Self::Percent => "%",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
        }
    }
}

/// A parsed CSS length: numeric value plus unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimension {
    /// Numeric part of the length.
    pub value: f64,
    /// Unit suffix; [`Unit::Px`] when the input was a bare number.
    pub unit: Unit,
}

impl Dimension {
    /// Parse a dimension string: a decimal number with an optional unit
    /// suffix from the allow-list. Returns `None` for anything else.
    ///
    /// # Example
    ///
    /// ```
    /// use quill_shortcodes::handlers::{Dimension, Unit};
    ///
    /// let dim = Dimension::parse("10pt").unwrap();
    /// assert_eq!(dim.unit, Unit::Pt);
    /// assert_eq!(Dimension::parse("100").unwrap().unit, Unit::Px);
    /// assert!(Dimension::parse("wide").is_none());
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = DIMENSION_RE.captures(raw)?;
        let value: f64 = caps.get(1)?.as_str().parse().ok()?;
        let unit = match caps.get(2) {
            Some(m) => Unit::parse(m.as_str())?,
            None => Unit::Px,
        };
        Some(Self { value, unit })
    }

    /// Multiply the numeric part by `factor`, keeping the unit.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            value: self.value * factor,
            unit: self.unit,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", fmt_number(self.value), self.unit.as_str())
    }
}

/// Render a number without a trailing `.0`.
#[allow(clippy::cast_possible_truncation)]
fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Parse a scale factor: `"50%"` and `"50"` both mean 0.5.
///
/// One optional trailing `%` is stripped, the number is parsed, and the
/// result is divided by 100. Non-numeric input returns `None`.
fn parse_scale(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let percent: f64 = number.parse().ok()?;
    Some(percent / 100.0)
}

/// Image alignment within the page flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Handler for the `figure` shortcode.
///
/// Emits a classed wrapper div around an `<img>`. `width` and `height`
/// parse as [`Dimension`]s; an unparseable value silently omits the
/// corresponding style declaration. `scale` (percentage or bare number)
/// multiplies both dimensions. `alt` defaults to `src`, alignment defaults
/// to `left`, and `css` appends extra classes to the wrapper.
#[derive(Debug, Default)]
pub struct Figure {
    warnings: Vec<String>,
}

impl Figure {
    /// Create the handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShortcodeHandler for Figure {
    fn name(&self) -> &'static str {
        "figure"
    }

    fn expand(&mut self, args: &ShortcodeArgs, _ctx: &ShortcodeContext) -> ShortcodeOutput {
        let src = args.get("src").unwrap_or("");
        let alt = args.get("alt").unwrap_or(src);

        let align = match args.get("align") {
            None => Align::Left,
            Some(raw) => Align::parse(raw).unwrap_or_else(|| {
                tracing::warn!(align = raw, "unrecognized figure alignment, using 'left'");
                self.warnings
                    .push(format!("figure: unrecognized align '{raw}', using 'left'"));
                Align::Left
            }),
        };

        let mut classes = String::from("figure img-responsive");
        if let Some(css) = args.get("css") {
            if !css.is_empty() {
                classes.push(' ');
                classes.push_str(&escape_html(css));
            }
        }
        write!(classes, " align-{}", align.as_str()).unwrap();

        let scale = args.get("scale").and_then(parse_scale);
        let apply_scale = |dim: Option<Dimension>| match (dim, scale) {
            (Some(dim), Some(factor)) => Some(dim.scaled(factor)),
            (dim, _) => dim,
        };
        let width = apply_scale(args.get("width").and_then(Dimension::parse));
        let height = apply_scale(args.get("height").and_then(Dimension::parse));

        let mut img = format!(
            r#"<img alt="{}" src="{}""#,
            escape_html(alt),
            escape_html(src)
        );
        if width.is_some() || height.is_some() {
            let mut style = String::new();
            if let Some(width) = width {
                write!(style, "width: {width};").unwrap();
            }
            if let Some(height) = height {
                if !style.is_empty() {
                    style.push(' ');
                }
                write!(style, "height: {height};").unwrap();
            }
            write!(img, r#" style="{style}""#).unwrap();
        }
        img.push('>');

        ShortcodeOutput::html(format!(r#"<div class="{classes}">{img}</div>"#))
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
