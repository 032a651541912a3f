/// Formatting classification for an inline span.
///
/// `Link` and `Image` are the only kinds that carry a target URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    /// Whether spans of this kind carry a target URL.
    pub fn has_target(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

/// A typed fragment of inline text.
///
/// For links `text` is the label, for images it is the alt text.
/// `target` is `Some` exactly when the kind is `Link` or `Image`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
    pub target: Option<String>,
}

impl Span {
    /// Create a span without a target.
    ///
    /// Panics in debug builds when `kind` requires a target; use
    /// [`Span::link`] or [`Span::image`] for those.
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        debug_assert!(!kind.has_target(), "{kind:?} spans need a target");
        Self {
            text: text.into(),
            kind,
            target: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: label.into(),
            kind: SpanKind::Link,
            target: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: SpanKind::Image,
            target: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}
