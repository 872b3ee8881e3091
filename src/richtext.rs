//! Inline styled text fragments.
//!
//! A [`Span`] is the smallest unit of text in a resume paragraph: a run of characters that is
//! either bold or plain.  Paragraph-level attributes (font size, color, spacing) live in
//! [`crate::style::StyleSpec`] and are merged with the span styles by `genpdf` at render time.

use genpdf::style::{Style, StyledString};

/// A slice of text together with inline style attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    text: String,
    bold: bool,
}

impl Span {
    /// Creates a new span with the provided text and no styles applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Returns the raw text contained in this span.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the span should be rendered in bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Convenience shorthand that marks the span as bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn to_style(&self) -> Style {
        let mut style = Style::new();
        if self.bold {
            style.set_bold();
        }
        style
    }

    /// Converts the span into a `genpdf` styled string.
    pub fn to_styled_string(&self) -> StyledString {
        StyledString::new(self.text.clone(), self.to_style())
    }
}

impl From<&Span> for StyledString {
    fn from(span: &Span) -> Self {
        span.to_styled_string()
    }
}

/// Concatenates the text of all spans, dropping style information.
pub fn plain_text<'a, I>(spans: I) -> String
where
    I: IntoIterator<Item = &'a Span>,
{
    spans.into_iter().map(Span::text).collect()
}
