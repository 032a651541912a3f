//! Sitemark inline engine
//!
//! Tokenizes a run of Markdown text into typed spans (plain, bold, italic,
//! code, link, image). Resolution is a fixed sequence of passes, each one
//! only touching spans that are still plain:
//!
//! ```text
//! "**"  →  "*"  →  "_"  →  "`"  →  [label](url)  →  ![alt](url)
//! ```
//!
//! # Example
//!
//! ```
//! use sitemark_inline::{text_to_spans, Span, SpanKind};
//!
//! let spans = text_to_spans("a **b** c").unwrap();
//! assert_eq!(spans[1], Span::new("b", SpanKind::Bold));
//! ```

pub mod span;
pub mod splitter;

pub use span::{Span, SpanKind};
pub use splitter::{
    extract_markdown_images, extract_markdown_links, split_nodes_delimiter, split_nodes_image,
    split_nodes_link, text_to_spans,
};

/// Inline tokenizer error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InlineError {
    /// A delimiter opened a span that was never closed.
    #[error("Unbalanced delimiter '{delimiter}' in text: {text:?}")]
    UnbalancedDelimiter { delimiter: String, text: String },

    /// A delimiter pass was asked to produce a kind that needs a URL.
    #[error("Delimiter passes cannot produce {kind:?} spans; they need a target")]
    TargetRequired { kind: SpanKind },
}
