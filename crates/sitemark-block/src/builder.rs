//! Block builders.
//!
//! One builder per [`BlockType`]; each returns the parent node for the
//! block. Everything except fenced code runs its text through the inline
//! engine.

use crate::blocks::BlockType;
use crate::BlockError;
use once_cell::sync::Lazy;
use regex::Regex;
use sitemark_html::{span_to_node, spans_to_nodes, Node};
use sitemark_inline::{text_to_spans, Span, SpanKind};

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static UNORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-*+]\s+(.*)").expect("Invalid unordered item regex"));

static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+\.\s+(.*)").expect("Invalid ordered item regex"));

/// Build the subtree for a block of a known type.
pub fn build_block(block: &str, block_type: BlockType) -> Result<Node, BlockError> {
    match block_type {
        BlockType::Paragraph => build_paragraph(block),
        BlockType::Heading => build_heading(block),
        BlockType::Code => Ok(build_code(block)),
        BlockType::Quote => build_quote(block),
        BlockType::UnorderedList => build_list(block, "ul", &UNORDERED_ITEM),
        BlockType::OrderedList => build_list(block, "ol", &ORDERED_ITEM),
    }
}

/// Inline-parse `text` into leaf nodes.
fn text_to_children(text: &str) -> Result<Vec<Node>, BlockError> {
    Ok(spans_to_nodes(text_to_spans(text)?))
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// `<p>`: all whitespace collapsed to single spaces.
///
/// If inline parsing leaves nothing (e.g. the text was only delimiters),
/// the raw text is kept as a single untagged leaf.
fn build_paragraph(block: &str) -> Result<Node, BlockError> {
    let content = collapse_whitespace(block);
    let mut children = text_to_children(&content)?;
    if children.is_empty() {
        children.push(Node::text(content));
    }
    Ok(Node::parent("p", children))
}

/// `<h1>`..`<h6>`, level taken from the leading `#` run.
fn build_heading(block: &str) -> Result<Node, BlockError> {
    let level = block.chars().take_while(|&c| c == '#').count();
    let content = block[level..].trim();
    let children = text_to_children(content)?;
    Ok(Node::parent(format!("h{level}"), children))
}

/// `<pre><code>`: fence lines dropped, each line left-trimmed, content kept
/// verbatim with a trailing newline.
fn build_code(block: &str) -> Node {
    let lines: Vec<&str> = block.trim().split('\n').collect();
    let inner = lines.get(1..lines.len().saturating_sub(1)).unwrap_or(&[]);

    let mut content = inner
        .iter()
        .map(|line| line.trim_start())
        .collect::<Vec<_>>()
        .join("\n");
    content.push('\n');

    let code = span_to_node(Span::new(content, SpanKind::Code));
    Node::parent("pre", vec![code])
}

/// `<blockquote>`: one leading `>` stripped per line, lines joined with spaces.
fn build_quote(block: &str) -> Result<Node, BlockError> {
    let lines: Vec<&str> = block
        .trim()
        .split('\n')
        .map(|line| {
            let line = line.trim();
            match line.strip_prefix('>') {
                Some(rest) => rest.trim(),
                None => line,
            }
        })
        .collect();

    let content = collapse_whitespace(&lines.join(" "));
    let children = text_to_children(&content)?;
    Ok(Node::parent("blockquote", children))
}

/// `<ul>` / `<ol>`: one `<li>` per marker line with non-empty content.
/// Lines without a marker are dropped.
fn build_list(block: &str, tag: &str, item: &Regex) -> Result<Node, BlockError> {
    let mut items = Vec::new();

    for line in block.trim().split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        let Some(caps) = item.captures(line) else {
            continue;
        };
        let content = &caps[1];
        if content.is_empty() {
            continue;
        }
        items.push(Node::parent("li", text_to_children(content)?));
    }

    Ok(Node::parent(tag, items))
}
