//! Span to leaf conversion.

use crate::node::Node;
use sitemark_inline::{Span, SpanKind};

/// Map one inline span to its leaf node.
///
/// | kind   | leaf                                 |
/// |--------|--------------------------------------|
/// | Plain  | raw text                             |
/// | Bold   | `<b>text</b>`                        |
/// | Italic | `<i>text</i>`                        |
/// | Code   | `<code>text</code>`                  |
/// | Link   | `<a href="target">text</a>`          |
/// | Image  | `<img src="target" alt="text"></img>` |
pub fn span_to_node(span: Span) -> Node {
    let target = span.target.unwrap_or_default();
    match span.kind {
        SpanKind::Plain => Node::text(span.text),
        SpanKind::Bold => Node::leaf("b", span.text),
        SpanKind::Italic => Node::leaf("i", span.text),
        SpanKind::Code => Node::leaf("code", span.text),
        SpanKind::Link => Node::leaf("a", span.text).with_attribute("href", target),
        SpanKind::Image => Node::leaf("img", "")
            .with_attribute("src", target)
            .with_attribute("alt", span.text),
    }
}

/// Convert a span sequence into leaves, preserving order.
pub fn spans_to_nodes(spans: Vec<Span>) -> Vec<Node> {
    spans.into_iter().map(span_to_node).collect()
}
