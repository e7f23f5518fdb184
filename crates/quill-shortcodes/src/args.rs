//! Shortcode invocation arguments.
//!
//! Named string parameters plus the raw text payload of a shortcode.

use std::collections::HashMap;

/// Arguments passed to a shortcode handler.
///
/// The host's markup pipeline supplies a mapping of named string parameters
/// and the raw text body of the shortcode. [`parse`](Self::parse) is a
/// convenience for hosts that carry parameters as a single
/// `key="value" key2=value` attribute string.
///
/// # Example
///
/// ```
/// use quill_shortcodes::ShortcodeArgs;
///
/// let args = ShortcodeArgs::parse("body text", r#"signal="warning" start=5"#);
/// assert_eq!(args.payload, "body text");
/// assert_eq!(args.get("signal"), Some("warning"));
/// assert_eq!(args.get("start"), Some("5"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShortcodeArgs {
    /// Named string parameters.
    pub params: HashMap<String, String>,
    /// Raw text payload associated with the invocation.
    pub payload: String,
}

impl ShortcodeArgs {
    /// Create arguments with a payload and no parameters.
    #[must_use]
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            params: HashMap::new(),
            payload: payload.into(),
        }
    }

    /// Add a named parameter (builder style).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Parse an attribute string into arguments.
    ///
    /// Supports `key="value"`, `key='value'` and unquoted `key=value` pairs
    /// separated by whitespace. Anything that is not a key-value pair is
    /// skipped.
    #[must_use]
    pub fn parse(payload: impl Into<String>, attrs: &str) -> Self {
        let mut args = Self::new(payload);
        let mut remaining = attrs.trim_start();

        while !remaining.is_empty() {
            if let Some((key, value, rest)) = parse_key_value(remaining) {
                args.params.insert(key.to_owned(), value.to_owned());
                remaining = rest.trim_start();
            } else {
                let mut chars = remaining.chars();
                chars.next();
                remaining = chars.as_str().trim_start();
            }
        }

        args
    }

    /// Get a parameter value by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Parse a key-value pair from the front of the attribute string.
///
/// Supports: `key="value"`, `key='value'`, `key=value`
fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let eq_pos = s.find('=')?;
    let key = s[..eq_pos].trim();

    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }

    let after_eq = &s[eq_pos + 1..];

    if let Some(stripped) = after_eq.strip_prefix('"') {
        let end_quote = stripped.find('"')?;
        Some((key, &stripped[..end_quote], &stripped[end_quote + 1..]))
    } else if let Some(stripped) = after_eq.strip_prefix('\'') {
        let end_quote = stripped.find('\'')?;
        Some((key, &stripped[..end_quote], &stripped[end_quote + 1..]))
    } else {
        let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
        Some((key, &after_eq[..end], &after_eq[end..]))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_args() {
        let args = ShortcodeArgs::parse("", "");
        assert_eq!(args.payload, "");
        assert!(args.params.is_empty());
    }

    #[test]
    fn test_payload_only() {
        let args = ShortcodeArgs::new("hello world");
        assert_eq!(args.payload, "hello world");
        assert!(args.params.is_empty());
    }

    #[test]
    fn test_builder() {
        let args = ShortcodeArgs::new("body")
            .with("signal", "danger")
            .with("header", "Heads up");
        assert_eq!(args.get("signal"), Some("danger"));
        assert_eq!(args.get("header"), Some("Heads up"));
    }

    #[test]
    fn test_double_quoted_value() {
        let args = ShortcodeArgs::parse("", r#"signal="info""#);
        assert_eq!(args.get("signal"), Some("info"));
    }

    #[test]
    fn test_single_quoted_value() {
        let args = ShortcodeArgs::parse("", "header='Hello World'");
        assert_eq!(args.get("header"), Some("Hello World"));
    }

    #[test]
    fn test_unquoted_value() {
        let args = ShortcodeArgs::parse("", "width=560");
        assert_eq!(args.get("width"), Some("560"));
    }

    #[test]
    fn test_mixed_attributes() {
        let args = ShortcodeArgs::parse("content", r#"signal="warning" width=100 alt='a b'"#);
        assert_eq!(args.payload, "content");
        assert_eq!(args.get("signal"), Some("warning"));
        assert_eq!(args.get("width"), Some("100"));
        assert_eq!(args.get("alt"), Some("a b"));
    }

    #[test]
    fn test_value_with_spaces() {
        let args = ShortcodeArgs::parse("", r#"alt="Hello World""#);
        assert_eq!(args.get("alt"), Some("Hello World"));
    }

    #[test]
    fn test_empty_quoted_value() {
        let args = ShortcodeArgs::parse("", r#"alt="""#);
        assert_eq!(args.get("alt"), Some(""));
    }

    #[test]
    fn test_stray_tokens_skipped() {
        let args = ShortcodeArgs::parse("", "junk signal=info");
        assert_eq!(args.get("signal"), Some("info"));
        assert_eq!(args.params.len(), 1);
    }

    #[test]
    fn test_get_nonexistent() {
        let args = ShortcodeArgs::parse("", "foo=bar");
        assert_eq!(args.get("baz"), None);
    }
}
