//! Tagged-span rendering.
//!
//! The command layer describes output as spans with semantic roles; turning
//! a role into an ANSI style happens here, in one place, against a caller
//! supplied color capability. This keeps formatting policy out of the
//! business logic and lets tests assert on plain text.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

/// Semantic role of a piece of output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Plain,
    /// Section headings ("Found namespaces").
    Heading,
    /// A resolved cluster object name.
    Name,
    /// The matched query fragment inside a displayed value.
    Query,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub role: Role,
}

impl Span {
    pub fn new(text: impl Into<String>, role: Role) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Role::Plain)
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(text, Role::Heading)
    }

    pub fn name(text: impl Into<String>) -> Self {
        Self::new(text, Role::Name)
    }

    pub fn query(text: impl Into<String>) -> Self {
        Self::new(text, Role::Query)
    }
}

/// Split `raw` around the first literal occurrence of `needle`, tagging the
/// occurrence with [`Role::Query`]. Best-effort cosmetics: if the raw value
/// does not contain the needle as typed (canonicalization may have matched
/// where the literal text does not), the value comes back as one plain span.
pub fn highlight(raw: &str, needle: &str) -> Vec<Span> {
    if needle.is_empty() {
        return vec![Span::plain(raw)];
    }
    match raw.find(needle) {
        Some(start) => {
            let end = start + needle.len();
            let mut spans = Vec::with_capacity(3);
            if start > 0 {
                spans.push(Span::plain(&raw[..start]));
            }
            spans.push(Span::query(&raw[start..end]));
            if end < raw.len() {
                spans.push(Span::plain(&raw[end..]));
            }
            spans
        }
        None => vec![Span::plain(raw)],
    }
}

/// Render spans to a single line, with or without ANSI styling.
pub fn render_spans(spans: &[Span], color: bool) -> String {
    let mut out = String::new();
    for span in spans {
        if !color {
            out.push_str(&span.text);
            continue;
        }
        let styled = match span.role {
            Role::Plain => span.text.normal(),
            Role::Heading => span.text.green(),
            Role::Name => span.text.green(),
            Role::Query => span.text.yellow(),
            Role::Info => span.text.dimmed(),
            Role::Warning => span.text.yellow(),
            Role::Error => span.text.red(),
        };
        out.push_str(&styled.to_string());
    }
    out
}

/// Display width of the concatenated span text, ignoring styling.
pub fn span_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.text.width()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_marks_first_occurrence_only() {
        let spans = highlight("web-web-1", "web");
        assert_eq!(
            spans,
            vec![Span::query("web"), Span::plain("-web-1")]
        );
    }

    #[test]
    fn highlight_mid_value() {
        let spans = highlight("jira-1234", "1234");
        assert_eq!(spans, vec![Span::plain("jira-"), Span::query("1234")]);
    }

    #[test]
    fn highlight_without_literal_occurrence_is_plain() {
        // The fuzzy match may have crossed a separator the raw text keeps.
        let spans = highlight("redis-metrics", "redismetric");
        assert_eq!(spans, vec![Span::plain("redis-metrics")]);
    }

    #[test]
    fn render_without_color_is_passthrough() {
        let spans = highlight("jira-1234", "1234");
        assert_eq!(render_spans(&spans, false), "jira-1234");
    }

    #[test]
    fn width_ignores_roles() {
        let spans = highlight("jira-1234", "1234");
        assert_eq!(span_width(&spans), "jira-1234".len());
    }
}
