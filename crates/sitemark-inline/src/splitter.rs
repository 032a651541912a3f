//! Inline span splitting.
//!
//! Every pass takes ownership of the current span list and returns a fresh
//! one. Spans that an earlier pass already typed are passed through as-is,
//! which is what gives the passes their priority: once `**x**` has become a
//! bold span, the `*` pass never sees its text.

use crate::span::{Span, SpanKind};
use crate::InlineError;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Delimiter passes in resolution order. `**` must run before `*`.
const DELIMITER_PASSES: &[(&str, SpanKind)] = &[
    ("**", SpanKind::Bold),
    ("*", SpanKind::Italic),
    ("_", SpanKind::Italic),
    ("`", SpanKind::Code),
];

static IMAGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
});

/// Bare `[label](url)` shape. Occurrences preceded by `!` are images and
/// are rejected by [`extract_markdown_links`].
static LINK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex")
});

/// Run the full inline pipeline over one run of text.
///
/// An empty input (or one made only of delimiters) yields no spans.
pub fn text_to_spans(text: &str) -> Result<Vec<Span>, InlineError> {
    let mut spans = vec![Span::plain(text)];

    for &(delimiter, kind) in DELIMITER_PASSES {
        spans = split_nodes_delimiter(spans, delimiter, kind)?;
        trace!(delimiter, spans = spans.len(), "delimiter pass");
    }

    let spans = split_nodes_image(split_nodes_link(spans));
    trace!(spans = spans.len(), "link and image passes");
    Ok(spans)
}

/// Split every plain span on `delimiter`, typing odd segments as `kind`.
///
/// A plain span must split into an odd number of segments (text, opener,
/// content, closer, ...); an even count means a delimiter was left open and
/// the whole pass fails. Empty segments are dropped.
///
/// `kind` must be a kind without a target (`Bold`, `Italic`, `Code`);
/// `Link` and `Image` are rejected with [`InlineError::TargetRequired`].
pub fn split_nodes_delimiter(
    spans: Vec<Span>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<Span>, InlineError> {
    if kind.has_target() {
        return Err(InlineError::TargetRequired { kind });
    }

    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let segments: Vec<&str> = span.text.split(delimiter).collect();
        if segments.len() % 2 == 0 {
            return Err(InlineError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }

        for (i, segment) in segments.into_iter().enumerate() {
            if segment.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(Span::plain(segment));
            } else {
                out.push(Span::new(segment, kind));
            }
        }
    }

    Ok(out)
}

/// Collect `(alt, url)` pairs for every `![alt](url)` in `text`, left to right.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    IMAGE_REGEX
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Collect `(label, url)` pairs for every `[label](url)` in `text` that is
/// not the tail of an image (`![...](...)`), left to right.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(caps) = LINK_REGEX.captures_at(text, pos) {
        let Some(whole) = caps.get(0) else {
            break;
        };

        if text[..whole.start()].ends_with('!') {
            // Retry from just past the rejected '['.
            pos = whole.start() + 1;
            continue;
        }

        found.push((caps[1].to_string(), caps[2].to_string()));
        pos = whole.end();
    }

    found
}

/// Cut every `[label](url)` out of the plain spans as link spans.
pub fn split_nodes_link(spans: Vec<Span>) -> Vec<Span> {
    split_nodes_matching(spans, extract_markdown_links, |label, url| {
        (format!("[{label}]({url})"), Span::link(label, url))
    })
}

/// Cut every `![alt](url)` out of the plain spans as image spans.
pub fn split_nodes_image(spans: Vec<Span>) -> Vec<Span> {
    split_nodes_matching(spans, extract_markdown_images, |alt, url| {
        (format!("![{alt}]({url})"), Span::image(alt, url))
    })
}

/// Shared driver for the link and image passes.
///
/// The matches of each plain input span are applied one at a time: the
/// literal source text of the match is searched for in each still-plain
/// piece, and the first occurrence is replaced by the typed span with the
/// surrounding text kept as plain pieces.
fn split_nodes_matching(
    spans: Vec<Span>,
    extract: fn(&str) -> Vec<(String, String)>,
    build: fn(&str, &str) -> (String, Span),
) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let matches = extract(&span.text);
        if matches.is_empty() {
            out.push(span);
            continue;
        }

        let mut current = vec![span];
        for (label, url) in &matches {
            let (literal, typed) = build(label, url);
            let mut next = Vec::with_capacity(current.len() + 2);

            for piece in current {
                if !piece.is_plain() {
                    next.push(piece);
                    continue;
                }
                match piece.text.find(literal.as_str()) {
                    None => next.push(piece),
                    Some(at) => {
                        let before = &piece.text[..at];
                        let after = &piece.text[at + literal.len()..];
                        if !before.is_empty() {
                            next.push(Span::plain(before));
                        }
                        next.push(typed.clone());
                        if !after.is_empty() {
                            next.push(Span::plain(after));
                        }
                    }
                }
            }

            current = next;
        }

        out.extend(current);
    }

    out
}
